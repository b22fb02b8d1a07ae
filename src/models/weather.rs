use super::risk::DiseaseRisk;
use crate::error::{FarmCastError, Result};
use serde::{Deserialize, Serialize};

/// Validated weather input for the disease risk estimator.
///
/// Only constructible through [`WeatherReading::new`], so every value is finite
/// and humidity lies in 0-100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherReading {
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    precipitation: f64,
}

impl WeatherReading {
    pub fn new(temperature: f64, humidity: f64, wind_speed: f64, precipitation: f64) -> Result<Self> {
        require_finite("temperature", temperature)?;
        require_finite("humidity", humidity)?;
        require_finite("wind speed", wind_speed)?;
        require_finite("precipitation", precipitation)?;

        if !(0.0..=100.0).contains(&humidity) {
            return Err(FarmCastError::InvalidData(format!(
                "humidity must be between 0 and 100, got {}",
                humidity
            )));
        }

        Ok(Self {
            temperature,
            humidity,
            wind_speed,
            precipitation,
        })
    }

    /// Air temperature in °C
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Relative humidity in percent
    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    /// Wind speed in km/h
    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    /// Precipitation in mm
    pub fn precipitation(&self) -> f64 {
        self.precipitation
    }
}

/// Validated particulate readings in µg/m³
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirQualityReading {
    pm2_5: f64,
    pm10: f64,
}

impl AirQualityReading {
    pub fn new(pm2_5: f64, pm10: f64) -> Result<Self> {
        require_finite("pm2.5", pm2_5)?;
        require_finite("pm10", pm10)?;

        if pm2_5 < 0.0 || pm10 < 0.0 {
            return Err(FarmCastError::InvalidData(format!(
                "particulate readings cannot be negative (pm2.5={}, pm10={})",
                pm2_5, pm10
            )));
        }

        Ok(Self { pm2_5, pm10 })
    }

    pub fn pm2_5(&self) -> f64 {
        self.pm2_5
    }

    pub fn pm10(&self) -> f64 {
        self.pm10
    }
}

fn require_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FarmCastError::InvalidData(format!(
            "{} must be a finite number, got {}",
            field, value
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSource {
    Live,
    Fallback,
}

impl ReportSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportSource::Live => "WeatherAPI",
            ReportSource::Fallback => "Fallback (static)",
        }
    }
}

impl std::fmt::Display for ReportSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature: f64,
    pub condition: String,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_direction: String,
    pub pressure: f64,
    pub visibility: f64,
    pub uv_index: f64,
    pub last_updated: String,
    pub feels_like: f64,
    pub cloud_cover: f64,
    pub precipitation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_chill: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heat_index: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dew_point: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_gust: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_day: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_code: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_icon: Option<String>,
}

impl CurrentConditions {
    /// Extract the estimator input, validating it
    pub fn reading(&self) -> Result<WeatherReading> {
        WeatherReading::new(
            self.temperature,
            self.humidity,
            self.wind_speed,
            self.precipitation,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub date: String,
    pub max_temp: f64,
    pub min_temp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_temp: Option<f64>,
    pub condition: String,
    pub humidity: f64,
    pub wind_speed: f64,
    pub precipitation: f64,
    pub uv_index: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_it_rain: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chance_of_rain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_code: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyForecast {
    pub time: String,
    pub temperature: f64,
    pub condition: String,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_direction: String,
    pub precipitation: f64,
    pub uv_index: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_chill: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heat_index: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dew_point: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_it_rain: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chance_of_rain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_day: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub headline: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub severity: String,
    pub urgency: String,
    pub areas: String,
    pub category: String,
    pub certainty: String,
    pub event: String,
    pub note: String,
    pub effective: String,
    pub expires: String,
    pub description: String,
    pub instruction: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQuality {
    pub co: f64,
    pub o3: f64,
    pub no2: f64,
    pub so2: f64,
    #[serde(rename = "pm2_5")]
    pub pm2_5: f64,
    pub pm10: f64,
    pub us_epa_index: u8,
    pub gb_defra_index: u8,
}

impl AirQuality {
    pub fn reading(&self) -> Result<AirQualityReading> {
        AirQualityReading::new(self.pm2_5, self.pm10)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pollen {
    pub hazel: f64,
    pub alder: f64,
    pub birch: f64,
    pub oak: f64,
    pub grass: f64,
    pub mugwort: f64,
    pub ragweed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Astronomy {
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
    pub moon_phase: String,
    pub moon_illumination: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_moon_up: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_sun_up: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarineConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub significant_wave_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swell_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swell_direction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swell_period: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_temperature: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tide {
    pub time: String,
    pub height: f64,
    #[serde(rename = "type")]
    pub tide_type: String,
}

/// Full weather tool response for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub location: String,
    pub source: ReportSource,
    pub current: CurrentConditions,
    pub forecast: Vec<DailyForecast>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly: Option<Vec<HourlyForecast>>,
    pub alerts: Vec<WeatherAlert>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_quality: Option<AirQuality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pollen: Option<Pollen>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub astronomy: Option<Astronomy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marine: Option<MarineConditions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tides: Option<Vec<Tide>>,
    pub disease_risk: DiseaseRisk,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_reading_accepts_edge_values() {
        let reading = WeatherReading::new(-5.0, 0.0, 0.0, -1.0).unwrap();
        assert_eq!(reading.temperature(), -5.0);
        assert_eq!(reading.precipitation(), -1.0);
        assert!(WeatherReading::new(28.0, 100.0, 5.0, 2.0).is_ok());
    }

    #[test]
    fn weather_reading_rejects_invalid_values() {
        assert!(WeatherReading::new(f64::NAN, 50.0, 5.0, 0.0).is_err());
        assert!(WeatherReading::new(28.0, 50.0, f64::INFINITY, 0.0).is_err());
        assert!(WeatherReading::new(28.0, 101.0, 5.0, 0.0).is_err());
        assert!(WeatherReading::new(28.0, -0.5, 5.0, 0.0).is_err());
    }

    #[test]
    fn air_quality_reading_validation() {
        let aq = AirQualityReading::new(15.3, 22.1).unwrap();
        assert_eq!(aq.pm2_5(), 15.3);
        assert_eq!(aq.pm10(), 22.1);
        assert!(AirQualityReading::new(-1.0, 10.0).is_err());
        assert!(AirQualityReading::new(10.0, f64::NAN).is_err());
    }

    #[test]
    fn air_quality_serializes_pm2_5_key() {
        let aq = AirQuality {
            co: 0.5,
            o3: 45.2,
            no2: 12.8,
            so2: 3.1,
            pm2_5: 15.3,
            pm10: 22.1,
            us_epa_index: 2,
            gb_defra_index: 3,
        };
        let json = serde_json::to_value(&aq).unwrap();
        assert_eq!(json["pm2_5"], 15.3);
        assert_eq!(json["usEpaIndex"], 2);
        assert_eq!(json["gbDefraIndex"], 3);
    }

    #[test]
    fn tide_and_alert_use_type_key() {
        let tide = Tide {
            time: "06:30".into(),
            height: 1.2,
            tide_type: "High".into(),
        };
        let json = serde_json::to_value(&tide).unwrap();
        assert_eq!(json["type"], "High");
    }
}
