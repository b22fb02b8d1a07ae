use crate::config::Config;
use crate::datasources::{fallback_report, WeatherApiClient};
use crate::error::Result;
use crate::logic::disease_risk::DiseaseRiskEstimator;
use crate::models::{FarmingType, ReportRequest, WeatherReport};

/// Reachability of the configured weather provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub configured: bool,
    pub weatherapi: bool,
}

pub struct WeatherService {
    client: Option<WeatherApiClient>,
    estimator: DiseaseRiskEstimator,
}

impl WeatherService {
    pub fn new(config: &Config) -> Self {
        let client = config.api_key().map(|key| {
            tracing::info!("WeatherAPI client configured");
            WeatherApiClient::new(key)
        });

        if client.is_none() {
            tracing::warn!("WeatherAPI key not configured - reports will use fallback data");
        }

        Self {
            client,
            estimator: DiseaseRiskEstimator,
        }
    }

    /// Build a report with disease risk for the request.
    ///
    /// Never fails. A missing key, a provider error or readings that do not
    /// validate all produce the fallback report instead.
    pub async fn report(&self, request: &ReportRequest) -> WeatherReport {
        if let Some(ref client) = self.client {
            match client.fetch_report(request).await {
                Ok(mut report) => match self.assess(&mut report, request.farming_type) {
                    Ok(()) => return report,
                    Err(e) => {
                        tracing::warn!("WeatherAPI returned unusable readings: {}", e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to fetch weather report: {}", e);
                }
            }
        }

        self.fallback(request)
    }

    /// Recompute the disease risk of an existing report for another farming type
    pub fn reassess(&self, report: &mut WeatherReport, farming_type: FarmingType) {
        if let Err(e) = self.assess(report, farming_type) {
            tracing::warn!("Cannot reassess disease risk: {}", e);
        }
    }

    pub async fn check_connection(&self) -> ConnectionStatus {
        let Some(ref client) = self.client else {
            return ConnectionStatus::default();
        };

        let weatherapi = match client.test_connection().await {
            Ok(ok) => ok,
            Err(e) => {
                tracing::warn!("WeatherAPI connection test failed: {}", e);
                false
            }
        };

        ConnectionStatus {
            configured: true,
            weatherapi,
        }
    }

    fn fallback(&self, request: &ReportRequest) -> WeatherReport {
        let mut report = fallback_report(request);
        // Static readings always validate
        self.reassess(&mut report, request.farming_type);
        report
    }

    fn assess(&self, report: &mut WeatherReport, farming_type: FarmingType) -> Result<()> {
        let reading = report.current.reading()?;

        let air_quality = match report.air_quality.as_ref().map(|aq| aq.reading()).transpose() {
            Ok(aq) => aq,
            Err(e) => {
                tracing::warn!("Ignoring air quality data: {}", e);
                None
            }
        };

        report.disease_risk = self
            .estimator
            .estimate(&reading, air_quality.as_ref(), farming_type);
        Ok(())
    }
}
