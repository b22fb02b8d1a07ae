use super::farming::FarmingType;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FORECAST_DAYS: u32 = 3;
pub const MAX_FORECAST_DAYS: u32 = 14;

/// Parameters for a single weather report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub location: String,
    pub days: u32,
    pub include_air_quality: bool,
    pub include_pollen: bool,
    pub include_astronomy: bool,
    pub include_alerts: bool,
    pub include_hourly: bool,
    pub include_marine: bool,
    pub include_tides: bool,
    pub farming_type: FarmingType,
}

impl ReportRequest {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            days: DEFAULT_FORECAST_DAYS,
            include_air_quality: true,
            include_pollen: true,
            include_astronomy: true,
            include_alerts: true,
            include_hourly: false,
            include_marine: false,
            include_tides: false,
            farming_type: FarmingType::default(),
        }
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn with_farming_type(mut self, farming_type: FarmingType) -> Self {
        self.farming_type = farming_type;
        self
    }

    /// Forecast days actually requested from the provider (1-14, 0 means default)
    pub fn effective_days(&self) -> u32 {
        if self.days == 0 {
            DEFAULT_FORECAST_DAYS
        } else {
            self.days.min(MAX_FORECAST_DAYS)
        }
    }
}
