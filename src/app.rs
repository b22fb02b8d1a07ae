use crate::logic::WeatherService;
use crate::models::{FarmingType, ReportRequest, ReportSource, WeatherReport};

pub struct App {
    pub should_quit: bool,
    pub request: ReportRequest,
    pub report: WeatherReport,

    // UI state
    pub status_message: Option<String>,
    pub needs_refresh: bool,
}

impl App {
    pub fn new(request: ReportRequest, report: WeatherReport) -> Self {
        let mut app = Self {
            should_quit: false,
            request,
            report,
            status_message: None,
            needs_refresh: false,
        };
        app.set_source_status();
        app
    }

    pub fn farming_type(&self) -> FarmingType {
        self.request.farming_type
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn request_refresh(&mut self) {
        self.needs_refresh = true;
        self.set_status("Refreshing data...");
    }

    pub fn update_report(&mut self, report: WeatherReport) {
        self.report = report;
        self.set_source_status();
    }

    /// Move to the next farming type and recompute risk from the current readings
    pub fn cycle_farming_type(&mut self, service: &WeatherService) {
        let next = self.request.farming_type.cycle();
        self.request.farming_type = next;
        service.reassess(&mut self.report, next);
        self.set_status(&format!("Farming type: {}", next));
    }

    fn set_source_status(&mut self) {
        match self.report.source {
            ReportSource::Live => self.set_status("Live data from WeatherAPI"),
            ReportSource::Fallback => {
                self.set_status("WeatherAPI unavailable - showing fallback data")
            }
        }
    }
}
