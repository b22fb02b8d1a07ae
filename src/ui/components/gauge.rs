use crate::models::RiskLevel;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct GaugeWidget<'a> {
    title: &'a str,
    value: Option<f64>,
    unit: &'a str,
    min: f64,
    max: f64,
    thresholds: Vec<(f64, Color)>,
    precision: usize,
}

impl<'a> GaugeWidget<'a> {
    pub fn new(title: &'a str, value: Option<f64>, unit: &'a str) -> Self {
        Self {
            title,
            value,
            unit,
            min: 0.0,
            max: 100.0,
            thresholds: Vec::new(),
            precision: 1,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn thresholds(mut self, thresholds: Vec<(f64, Color)>) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    fn color_for(&self, value: f64) -> Color {
        self.thresholds
            .iter()
            .rev()
            .find(|(threshold, _)| value >= *threshold)
            .map(|(_, color)| *color)
            .unwrap_or(Theme::FG)
    }

    /// Fraction of the bar to fill, 0.0 to 1.0
    fn fill_ratio(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

impl Widget for GaugeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(value) = self.value else {
            Paragraph::new(Span::styled("N/A", Theme::dim())).render(inner, buf);
            return;
        };

        let color = self.color_for(value);
        let value_str = format!("{:.prec$}{}", value, self.unit, prec = self.precision);
        Paragraph::new(Line::from(Span::styled(value_str, Style::default().fg(color))))
            .render(inner, buf);

        if inner.height >= 2 {
            let y = inner.y + 1;
            let filled = (inner.width as f64 * self.fill_ratio(value)) as u16;

            for x in inner.x..inner.x + inner.width {
                let ch = if x < inner.x + filled { '█' } else { '░' };
                buf[(x, y)].set_char(ch).set_fg(color);
            }
        }
    }
}

/// Percentage gauge coloured by risk level
pub fn risk_gauge(title: &str, value: f64) -> GaugeWidget<'_> {
    GaugeWidget::new(title, Some(value), "%")
        .precision(0)
        .thresholds(vec![
            (0.0, RiskLevel::Low.color()),
            (30.0, RiskLevel::Moderate.color()),
            (60.0, RiskLevel::High.color()),
        ])
}

pub fn temperature_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "°C")
        .range(0.0, 45.0)
        .thresholds(vec![
            (f64::MIN, Theme::TEMP_COOL),
            (18.0, Theme::TEMP_MILD),
            (26.0, Theme::TEMP_WARM),
            (32.0, Theme::TEMP_HOT),
        ])
}

pub fn humidity_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "%")
        .range(0.0, 100.0)
        .precision(0)
        .thresholds(vec![
            (0.0, Theme::SUCCESS),
            (70.0, Theme::WARNING),
            (80.0, Theme::ERROR),
        ])
}

pub fn wind_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, " km/h")
        .range(0.0, 60.0)
        .precision(0)
        .thresholds(vec![
            (f64::MIN, Theme::WIND_CALM),
            (20.0, Theme::WIND_BREEZY),
            (40.0, Theme::WIND_STRONG),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_gauge_colors_match_levels() {
        assert_eq!(risk_gauge("x", 0.0).color_for(0.0), Color::Green);
        assert_eq!(risk_gauge("x", 0.0).color_for(29.9), Color::Green);
        assert_eq!(risk_gauge("x", 0.0).color_for(30.0), Color::Yellow);
        assert_eq!(risk_gauge("x", 0.0).color_for(60.0), Color::Red);
    }

    #[test]
    fn fill_ratio_is_clamped() {
        let gauge = temperature_gauge("Temp", None);
        assert_eq!(gauge.fill_ratio(-5.0), 0.0);
        assert_eq!(gauge.fill_ratio(90.0), 1.0);
        assert!((gauge.fill_ratio(22.5) - 0.5).abs() < 1e-9);

        let flat = GaugeWidget::new("Flat", Some(1.0), "").range(5.0, 5.0);
        assert_eq!(flat.fill_ratio(5.0), 0.0);
    }

    #[test]
    fn renders_value_and_bar() {
        let area = Rect::new(0, 0, 12, 4);
        let mut buf = Buffer::empty(area);
        risk_gauge("Fungal", 50.0).render(area, &mut buf);

        assert_eq!(buf[(1, 1)].symbol(), "5");
        assert_eq!(buf[(2, 1)].symbol(), "0");
        assert_eq!(buf[(3, 1)].symbol(), "%");
        // Inner width 10, half filled
        assert_eq!(buf[(1, 2)].symbol(), "█");
        assert_eq!(buf[(5, 2)].symbol(), "█");
        assert_eq!(buf[(6, 2)].symbol(), "░");
    }

    #[test]
    fn renders_na_without_value() {
        let area = Rect::new(0, 0, 12, 4);
        let mut buf = Buffer::empty(area);
        humidity_gauge("Humidity", None).render(area, &mut buf);
        assert_eq!(buf[(1, 1)].symbol(), "N");
        assert_eq!(buf[(3, 1)].symbol(), "A");
    }

    #[test]
    fn skips_tiny_areas() {
        let area = Rect::new(0, 0, 8, 2);
        let mut buf = Buffer::empty(area);
        wind_gauge("Wind", Some(12.0)).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
