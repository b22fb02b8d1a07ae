use crate::models::{FarmingType, ReportSource, RiskLevel, WeatherReport};
use crate::ui::components::{humidity_gauge, risk_gauge, temperature_gauge, wind_gauge};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Widget},
};

pub struct DashboardScreen<'a> {
    pub report: &'a WeatherReport,
    pub farming_type: FarmingType,
    pub status_message: Option<&'a str>,
}

impl<'a> DashboardScreen<'a> {
    pub fn new(report: &'a WeatherReport, farming_type: FarmingType) -> Self {
        Self {
            report,
            farming_type,
            status_message: None,
        }
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }
}

impl Widget for DashboardScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(5), // Weather gauges
                Constraint::Min(10),   // Risk panels
                Constraint::Length(6), // Forecast
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_gauges(chunks[1], buf);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        let risk = &self.report.disease_risk;
        match risk.plant_diseases {
            Some(ref plant) => self.render_risk_panel(
                "Plant Diseases",
                plant.max_risk(),
                &plant.risks(),
                &plant.recommended_actions,
                middle[0],
                buf,
            ),
            None => self.render_not_assessed("Plant Diseases", middle[0], buf),
        }
        match risk.animal_diseases {
            Some(ref animal) => self.render_risk_panel(
                "Animal Diseases",
                animal.max_risk(),
                &animal.risks(),
                &animal.recommended_actions,
                middle[1],
                buf,
            ),
            None => self.render_not_assessed("Animal Diseases", middle[1], buf),
        }

        self.render_forecast(chunks[3], buf);
        self.render_status_message(chunks[4], buf);
        self.render_nav(chunks[5], buf);
    }
}

impl DashboardScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            "FarmCast - {} ({} farming)",
            self.report.location, self.farming_type
        );

        let block = Block::default()
            .title(Span::styled(title, Theme::title()))
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Theme::border());

        let source_style = match self.report.source {
            ReportSource::Live => Theme::success(),
            ReportSource::Fallback => Theme::warning(),
        };

        let info = Line::from(vec![
            Span::styled("Source: ", Theme::dim()),
            Span::styled(self.report.source.as_str(), source_style),
            Span::styled(
                format!(
                    "  {}  Updated: {}",
                    self.report.current.condition, self.report.current.last_updated
                ),
                Theme::dim(),
            ),
        ]);
        Paragraph::new(info).block(block).render(area, buf);
    }

    fn render_gauges(&self, area: Rect, buf: &mut Buffer) {
        let gauge_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); 4])
            .split(area);

        let current = &self.report.current;
        temperature_gauge("Temperature", Some(current.temperature)).render(gauge_chunks[0], buf);
        temperature_gauge("Feels Like", Some(current.feels_like)).render(gauge_chunks[1], buf);
        humidity_gauge("Humidity", Some(current.humidity)).render(gauge_chunks[2], buf);
        wind_gauge("Wind", Some(current.wind_speed)).render(gauge_chunks[3], buf);
    }

    fn render_risk_panel(
        &self,
        title: &str,
        overall: f64,
        risks: &[(&'static str, f64)],
        actions: &[String],
        area: Rect,
        buf: &mut Buffer,
    ) {
        let title = Line::from(vec![
            Span::styled(format!("{} ", title), Theme::header()),
            Span::styled(
                RiskLevel::from_percent(overall).as_str(),
                Theme::risk_style(overall),
            ),
        ]);
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(1)])
            .split(inner);

        let gauges = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(rows[0]);
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50); 2])
            .split(gauges[0]);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50); 2])
            .split(gauges[1]);

        let cells = [top[0], top[1], bottom[0], bottom[1]];
        for ((label, value), cell) in risks.iter().zip(cells) {
            risk_gauge(label, *value).render(cell, buf);
        }

        if actions.is_empty() {
            Paragraph::new(Span::styled("No action needed", Theme::dim())).render(rows[1], buf);
            return;
        }

        let items: Vec<ListItem> = actions
            .iter()
            .map(|a| {
                ListItem::new(Line::from(vec![
                    Span::styled("• ", Theme::highlight()),
                    Span::styled(a.as_str(), Theme::normal()),
                ]))
            })
            .collect();
        List::new(items).render(rows[1], buf);
    }

    fn render_not_assessed(&self, title: &str, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(title.to_string(), Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let msg = format!("Not assessed for {} farming", self.farming_type);
        Paragraph::new(Span::styled(msg, Theme::dim()))
            .block(block)
            .render(area, buf);
    }

    fn render_forecast(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Forecast", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let header = Row::new(vec![
            Cell::from("Date"),
            Cell::from("Condition"),
            Cell::from("Min/Max"),
            Cell::from("Humidity"),
            Cell::from("Rain"),
        ])
        .style(Theme::header());

        let rows: Vec<Row> = self
            .report
            .forecast
            .iter()
            .map(|day| {
                let rain = day
                    .chance_of_rain
                    .map(|c| format!("{:.0}% / {:.1} mm", c, day.precipitation))
                    .unwrap_or_else(|| format!("{:.1} mm", day.precipitation));
                Row::new(vec![
                    Cell::from(day.date.clone()),
                    Cell::from(day.condition.clone()),
                    Cell::from(format!("{:.0}-{:.0}°C", day.min_temp, day.max_temp))
                        .style(Style::default().fg(Theme::temp_color(day.max_temp))),
                    Cell::from(format!("{:.0}%", day.humidity)),
                    Cell::from(rain),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(12),
            Constraint::Min(14),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(16),
        ];
        Table::new(rows, widths)
            .header(header)
            .block(block)
            .render(area, buf);
    }

    fn render_status_message(&self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.status_message {
            let style = if msg.contains("fallback") || msg.contains("failed") {
                Theme::warning()
            } else {
                Theme::success()
            };
            Paragraph::new(Span::styled(msg, style)).render(area, buf);
        }
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        let nav = Line::from(vec![
            Span::styled("[r]", Theme::nav_key()),
            Span::styled("Refresh ", Theme::nav_label()),
            Span::styled("[f]", Theme::nav_key()),
            Span::styled("Farming type ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);

        Paragraph::new(nav).render(area, buf);
    }
}
