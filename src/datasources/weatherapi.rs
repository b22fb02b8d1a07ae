use crate::error::{FarmCastError, Result};
use crate::logic::calculations::{round_half_up, round_hundredths, round_present};
use crate::logic::locations::normalize_location;
use crate::models::{
    AirQuality, Astronomy, CurrentConditions, DailyForecast, DiseaseRisk, HourlyForecast,
    MarineConditions, Pollen, ReportRequest, ReportSource, Tide, WeatherAlert, WeatherReport,
};
use chrono::Utc;
use serde::{Deserialize, Deserializer};

const API_BASE_URL: &str = "https://api.weatherapi.com/v1";
const HOURLY_POINTS: usize = 24;

pub struct WeatherApiClient {
    client: reqwest::Client,
    api_key: String,
}

// WeatherAPI.com response structures
#[derive(Debug, Deserialize)]
struct WapiForecastResponse {
    location: WapiLocation,
    current: WapiCurrent,
    forecast: WapiForecast,
    #[serde(default)]
    alerts: Option<WapiAlerts>,
}

#[derive(Debug, Deserialize)]
struct WapiLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WapiCondition {
    text: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    code: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct WapiCurrent {
    last_updated: String,
    temp_c: f64,
    #[serde(default)]
    is_day: Option<u8>,
    condition: WapiCondition,
    wind_kph: f64,
    wind_dir: String,
    pressure_mb: f64,
    precip_mm: f64,
    humidity: f64,
    cloud: f64,
    feelslike_c: f64,
    #[serde(default)]
    windchill_c: Option<f64>,
    #[serde(default)]
    heatindex_c: Option<f64>,
    #[serde(default)]
    dewpoint_c: Option<f64>,
    vis_km: f64,
    uv: f64,
    #[serde(default)]
    gust_kph: Option<f64>,
    #[serde(default)]
    air_quality: Option<WapiAirQuality>,
    #[serde(default)]
    pollen: Option<WapiPollen>,
}

#[derive(Debug, Deserialize)]
struct WapiAirQuality {
    co: f64,
    o3: f64,
    no2: f64,
    so2: f64,
    pm2_5: f64,
    pm10: f64,
    #[serde(rename = "us-epa-index", default)]
    us_epa_index: u8,
    #[serde(rename = "gb-defra-index", default)]
    gb_defra_index: u8,
}

#[derive(Debug, Deserialize)]
struct WapiPollen {
    #[serde(alias = "Hazel", default)]
    hazel: f64,
    #[serde(alias = "Alder", default)]
    alder: f64,
    #[serde(alias = "Birch", default)]
    birch: f64,
    #[serde(alias = "Oak", default)]
    oak: f64,
    #[serde(alias = "Grass", default)]
    grass: f64,
    #[serde(alias = "Mugwort", default)]
    mugwort: f64,
    #[serde(alias = "Ragweed", default)]
    ragweed: f64,
}

#[derive(Debug, Deserialize)]
struct WapiForecast {
    forecastday: Vec<WapiForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WapiForecastDay {
    date: String,
    day: WapiDay,
    #[serde(default)]
    hour: Vec<WapiHour>,
}

#[derive(Debug, Deserialize)]
struct WapiDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    #[serde(default)]
    avgtemp_c: Option<f64>,
    maxwind_kph: f64,
    totalprecip_mm: f64,
    #[serde(default)]
    avgvis_km: Option<f64>,
    avghumidity: f64,
    #[serde(default)]
    daily_will_it_rain: Option<u8>,
    #[serde(default)]
    daily_chance_of_rain: Option<f64>,
    condition: WapiCondition,
    uv: f64,
}

#[derive(Debug, Deserialize)]
struct WapiHour {
    time: String,
    temp_c: f64,
    #[serde(default)]
    is_day: Option<u8>,
    condition: WapiCondition,
    wind_kph: f64,
    wind_dir: String,
    precip_mm: f64,
    humidity: f64,
    #[serde(default)]
    uv: f64,
    #[serde(default)]
    feelslike_c: Option<f64>,
    #[serde(default)]
    windchill_c: Option<f64>,
    #[serde(default)]
    heatindex_c: Option<f64>,
    #[serde(default)]
    dewpoint_c: Option<f64>,
    #[serde(default)]
    will_it_rain: Option<u8>,
    #[serde(default)]
    chance_of_rain: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WapiAlerts {
    #[serde(default)]
    alert: Vec<WapiAlert>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WapiAlert {
    headline: String,
    #[serde(alias = "msgType")]
    msgtype: Option<String>,
    severity: String,
    urgency: String,
    areas: String,
    category: String,
    certainty: String,
    event: String,
    note: String,
    effective: String,
    expires: String,
    desc: String,
    instruction: String,
}

#[derive(Debug, Deserialize)]
struct WapiAstronomyResponse {
    astronomy: WapiAstronomyBody,
}

#[derive(Debug, Deserialize)]
struct WapiAstronomyBody {
    astro: WapiAstro,
}

#[derive(Debug, Deserialize)]
struct WapiAstro {
    sunrise: String,
    sunset: String,
    moonrise: String,
    moonset: String,
    moon_phase: String,
    #[serde(deserialize_with = "deserialize_number_or_string")]
    moon_illumination: f64,
    #[serde(default)]
    is_moon_up: Option<u8>,
    #[serde(default)]
    is_sun_up: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct WapiMarineResponse {
    forecast: WapiMarineForecast,
}

#[derive(Debug, Deserialize)]
struct WapiMarineForecast {
    forecastday: Vec<WapiMarineDay>,
}

#[derive(Debug, Deserialize)]
struct WapiMarineDay {
    #[serde(default)]
    hour: Vec<WapiMarineHour>,
    #[serde(default)]
    tides: Vec<WapiTide>,
}

#[derive(Debug, Deserialize)]
struct WapiMarineHour {
    #[serde(default)]
    sig_ht_mt: Option<f64>,
    #[serde(default)]
    swell_ht_mt: Option<f64>,
    #[serde(default)]
    swell_dir: Option<f64>,
    #[serde(default)]
    swell_period_secs: Option<f64>,
    #[serde(default)]
    water_temp_c: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WapiTide {
    tide_time: String,
    #[serde(deserialize_with = "deserialize_number_or_string")]
    tide_height_mt: f64,
    tide_type: String,
}

/// The provider sends some numeric fields as strings ("25")
fn deserialize_number_or_string<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid number '{}'", s))),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

impl WeatherApiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Fetch forecast, plus astronomy and marine data when requested.
    ///
    /// The returned report carries an empty disease risk; assessment happens
    /// after the readings are validated.
    pub async fn fetch_report(&self, request: &ReportRequest) -> Result<WeatherReport> {
        let location = normalize_location(&request.location);
        let days = request.effective_days().to_string();

        tracing::debug!(location = %location, days = %days, "Fetching WeatherAPI forecast");

        let response: WapiForecastResponse = self
            .get_json(
                "forecast.json",
                &[
                    ("q", location.as_str()),
                    ("days", days.as_str()),
                    ("aqi", yes_no(request.include_air_quality)),
                    ("pollen", yes_no(request.include_pollen)),
                    ("alerts", yes_no(request.include_alerts)),
                ],
            )
            .await?;

        let astronomy = if request.include_astronomy {
            match self.fetch_astronomy(&location).await {
                Ok(astronomy) => Some(astronomy),
                Err(e) => {
                    tracing::warn!("Astronomy data not available: {}", e);
                    None
                }
            }
        } else {
            None
        };

        let marine = if request.include_marine {
            match self
                .get_json::<WapiMarineResponse>(
                    "marine.json",
                    &[
                        ("q", location.as_str()),
                        ("days", days.as_str()),
                        ("tides", yes_no(request.include_tides)),
                    ],
                )
                .await
            {
                Ok(marine) => Some(marine),
                Err(e) => {
                    tracing::warn!("Marine weather data not available: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Ok(convert_response(response, astronomy, marine, request))
    }

    /// Test connection to the WeatherAPI service
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!("{}/current.json", API_BASE_URL);
        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", "Lagos")])
            .send()
            .await
            .map_err(|e| FarmCastError::Http(e.without_url()))?;

        Ok(response.status().is_success())
    }

    async fn fetch_astronomy(&self, location: &str) -> Result<WapiAstro> {
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        let response: WapiAstronomyResponse = self
            .get_json("astronomy.json", &[("q", location), ("dt", today.as_str())])
            .await?;
        Ok(response.astronomy.astro)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);

        // Errors are stripped of their URL so the API key never reaches the logs
        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| {
                FarmCastError::DataSourceUnavailable(format!("WeatherAPI: {}", e.without_url()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(FarmCastError::DataSourceUnavailable(format!(
                "WeatherAPI {} returned {}",
                endpoint, status
            )));
        }

        response.json::<T>().await.map_err(|e| {
            FarmCastError::DataSourceUnavailable(format!(
                "Failed to parse WeatherAPI {} response: {}",
                endpoint,
                e.without_url()
            ))
        })
    }
}

fn convert_response(
    response: WapiForecastResponse,
    astronomy: Option<WapiAstro>,
    marine: Option<WapiMarineResponse>,
    request: &ReportRequest,
) -> WeatherReport {
    let current = &response.current;

    let air_quality = current
        .air_quality
        .as_ref()
        .filter(|_| request.include_air_quality)
        .map(convert_air_quality);

    let pollen = current
        .pollen
        .as_ref()
        .filter(|_| request.include_pollen)
        .map(convert_pollen);

    let hourly = response
        .forecast
        .forecastday
        .first()
        .filter(|day| request.include_hourly && !day.hour.is_empty())
        .map(|day| {
            day.hour
                .iter()
                .take(HOURLY_POINTS)
                .map(convert_hour)
                .collect()
        });

    let forecast = response.forecast.forecastday.iter().map(convert_day).collect();

    let alerts = response
        .alerts
        .map(|a| a.alert.into_iter().map(convert_alert).collect())
        .unwrap_or_default();

    let astronomy = astronomy
        .filter(|_| request.include_astronomy)
        .map(convert_astronomy);

    let marine_day = marine
        .filter(|_| request.include_marine)
        .and_then(|m| m.forecast.forecastday.into_iter().next());

    let marine_conditions = marine_day
        .as_ref()
        .and_then(|day| day.hour.first())
        .map(convert_marine_hour);

    let tides = marine_day
        .filter(|day| request.include_tides && !day.tides.is_empty())
        .map(|day| day.tides.iter().map(convert_tide).collect());

    WeatherReport {
        location: response.location.name,
        source: ReportSource::Live,
        current: convert_current(&response.current),
        forecast,
        hourly,
        alerts,
        air_quality,
        pollen,
        astronomy,
        marine: marine_conditions,
        tides,
        disease_risk: DiseaseRisk::default(),
    }
}

fn convert_current(current: &WapiCurrent) -> CurrentConditions {
    CurrentConditions {
        temperature: round_half_up(current.temp_c),
        condition: current.condition.text.clone(),
        humidity: current.humidity,
        wind_speed: round_half_up(current.wind_kph),
        wind_direction: current.wind_dir.clone(),
        pressure: round_half_up(current.pressure_mb),
        visibility: round_half_up(current.vis_km),
        uv_index: current.uv,
        last_updated: current.last_updated.clone(),
        feels_like: round_half_up(current.feelslike_c),
        cloud_cover: current.cloud,
        precipitation: round_half_up(current.precip_mm),
        wind_chill: round_present(current.windchill_c),
        heat_index: round_present(current.heatindex_c),
        dew_point: round_present(current.dewpoint_c),
        wind_gust: round_present(current.gust_kph),
        is_day: current.is_day,
        condition_code: current.condition.code,
        condition_icon: current.condition.icon.clone(),
    }
}

fn convert_day(day: &WapiForecastDay) -> DailyForecast {
    DailyForecast {
        date: day.date.clone(),
        max_temp: round_half_up(day.day.maxtemp_c),
        min_temp: round_half_up(day.day.mintemp_c),
        avg_temp: round_present(day.day.avgtemp_c),
        condition: day.day.condition.text.clone(),
        humidity: day.day.avghumidity,
        wind_speed: round_half_up(day.day.maxwind_kph),
        precipitation: round_half_up(day.day.totalprecip_mm),
        uv_index: day.day.uv,
        visibility: round_present(day.day.avgvis_km),
        will_it_rain: day.day.daily_will_it_rain,
        chance_of_rain: day.day.daily_chance_of_rain,
        condition_code: day.day.condition.code,
        condition_icon: day.day.condition.icon.clone(),
    }
}

fn convert_hour(hour: &WapiHour) -> HourlyForecast {
    HourlyForecast {
        time: hour.time.clone(),
        temperature: round_half_up(hour.temp_c),
        condition: hour.condition.text.clone(),
        humidity: hour.humidity,
        wind_speed: round_half_up(hour.wind_kph),
        wind_direction: hour.wind_dir.clone(),
        precipitation: round_half_up(hour.precip_mm),
        uv_index: hour.uv,
        feels_like: round_present(hour.feelslike_c),
        wind_chill: round_present(hour.windchill_c),
        heat_index: round_present(hour.heatindex_c),
        dew_point: round_present(hour.dewpoint_c),
        will_it_rain: hour.will_it_rain,
        chance_of_rain: hour.chance_of_rain,
        is_day: hour.is_day,
    }
}

fn convert_alert(alert: WapiAlert) -> WeatherAlert {
    let alert_type = alert
        .msgtype
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| alert.event.clone());

    WeatherAlert {
        headline: alert.headline,
        alert_type,
        severity: alert.severity,
        urgency: alert.urgency,
        areas: alert.areas,
        category: alert.category,
        certainty: alert.certainty,
        event: alert.event,
        note: alert.note,
        effective: alert.effective,
        expires: alert.expires,
        description: alert.desc,
        instruction: alert.instruction,
    }
}

fn convert_air_quality(aq: &WapiAirQuality) -> AirQuality {
    AirQuality {
        co: round_hundredths(aq.co),
        o3: round_hundredths(aq.o3),
        no2: round_hundredths(aq.no2),
        so2: round_hundredths(aq.so2),
        pm2_5: round_hundredths(aq.pm2_5),
        pm10: round_hundredths(aq.pm10),
        us_epa_index: aq.us_epa_index,
        gb_defra_index: aq.gb_defra_index,
    }
}

fn convert_pollen(pollen: &WapiPollen) -> Pollen {
    Pollen {
        hazel: round_hundredths(pollen.hazel),
        alder: round_hundredths(pollen.alder),
        birch: round_hundredths(pollen.birch),
        oak: round_hundredths(pollen.oak),
        grass: round_hundredths(pollen.grass),
        mugwort: round_hundredths(pollen.mugwort),
        ragweed: round_hundredths(pollen.ragweed),
    }
}

fn convert_astronomy(astro: WapiAstro) -> Astronomy {
    Astronomy {
        sunrise: astro.sunrise,
        sunset: astro.sunset,
        moonrise: astro.moonrise,
        moonset: astro.moonset,
        moon_phase: astro.moon_phase,
        moon_illumination: astro.moon_illumination,
        is_moon_up: astro.is_moon_up,
        is_sun_up: astro.is_sun_up,
    }
}

fn convert_marine_hour(hour: &WapiMarineHour) -> MarineConditions {
    MarineConditions {
        significant_wave_height: hour.sig_ht_mt.filter(|v| *v != 0.0).map(round_hundredths),
        swell_height: hour.swell_ht_mt.filter(|v| *v != 0.0).map(round_hundredths),
        swell_direction: hour.swell_dir,
        swell_period: hour.swell_period_secs,
        water_temperature: round_present(hour.water_temp_c),
    }
}

fn convert_tide(tide: &WapiTide) -> Tide {
    Tide {
        time: tide.tide_time.clone(),
        height: round_hundredths(tide.tide_height_mt),
        tide_type: tide.tide_type.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_hour(time: &str) -> serde_json::Value {
        json!({
            "time": time,
            "temp_c": 26.4,
            "is_day": 0,
            "condition": { "text": "Clear", "icon": "//cdn/113.png", "code": 1000 },
            "wind_kph": 7.6,
            "wind_dir": "SW",
            "precip_mm": 0.0,
            "humidity": 82,
            "uv": 0,
            "feelslike_c": 28.9,
            "windchill_c": 26.4,
            "heatindex_c": 28.9,
            "dewpoint_c": 0.0,
            "will_it_rain": 0,
            "chance_of_rain": 10
        })
    }

    fn sample_forecast() -> WapiForecastResponse {
        let hours: Vec<serde_json::Value> = (0..30).map(|h| sample_hour(&format!("2025-06-01 {:02}:00", h % 24))).collect();

        let value = json!({
            "location": { "name": "Lagos", "region": "Lagos", "country": "Nigeria" },
            "current": {
                "last_updated": "2025-06-01 12:00",
                "temp_c": 27.5,
                "is_day": 1,
                "condition": { "text": "Partly cloudy", "icon": "//cdn/116.png", "code": 1003 },
                "wind_kph": 11.2,
                "wind_dir": "SW",
                "pressure_mb": 1012.6,
                "precip_mm": 0.44,
                "humidity": 84,
                "cloud": 50,
                "feelslike_c": 31.2,
                "windchill_c": 27.5,
                "heatindex_c": 31.2,
                "dewpoint_c": 24.1,
                "vis_km": 9.6,
                "uv": 6.0,
                "gust_kph": 0.0,
                "air_quality": {
                    "co": 523.456, "o3": 45.219, "no2": 12.8, "so2": 3.1,
                    "pm2_5": 15.333, "pm10": 22.106,
                    "us-epa-index": 2, "gb-defra-index": 3
                },
                "pollen": {
                    "Hazel": 5.2, "Alder": 2.1, "Birch": 8.7, "Oak": 12.3,
                    "Grass": 45.666, "Mugwort": 3.2, "Ragweed": 1.8
                }
            },
            "forecast": {
                "forecastday": [
                    {
                        "date": "2025-06-01",
                        "day": {
                            "maxtemp_c": 31.6, "mintemp_c": 24.2, "avgtemp_c": 27.5,
                            "maxwind_kph": 15.1, "totalprecip_mm": 2.5, "avgvis_km": 9.4,
                            "avghumidity": 78, "daily_will_it_rain": 1, "daily_chance_of_rain": 80,
                            "condition": { "text": "Patchy rain", "icon": "//cdn/176.png", "code": 1063 },
                            "uv": 7.0
                        },
                        "hour": hours
                    },
                    {
                        "date": "2025-06-02",
                        "day": {
                            "maxtemp_c": 30.0, "mintemp_c": 23.0,
                            "maxwind_kph": 12.0, "totalprecip_mm": 0.0,
                            "avghumidity": 70,
                            "condition": { "text": "Sunny" },
                            "uv": 8.0
                        }
                    }
                ]
            },
            "alerts": {
                "alert": [
                    {
                        "headline": "Flood warning",
                        "msgtype": "",
                        "severity": "Moderate",
                        "event": "Flood",
                        "desc": "River levels rising",
                        "instruction": "Move livestock to higher ground"
                    }
                ]
            }
        });

        serde_json::from_value(value).unwrap()
    }

    fn full_request() -> ReportRequest {
        let mut req = ReportRequest::new("lagos");
        req.include_hourly = true;
        req.include_marine = true;
        req.include_tides = true;
        req
    }

    #[test]
    fn client_creation() {
        let client = WeatherApiClient::new("test_key");
        assert_eq!(client.api_key, "test_key");
    }

    #[test]
    fn converts_current_conditions_with_rounding() {
        let report = convert_response(sample_forecast(), None, None, &full_request());

        assert_eq!(report.location, "Lagos");
        assert_eq!(report.source, ReportSource::Live);
        let current = &report.current;
        assert_eq!(current.temperature, 28.0);
        assert_eq!(current.humidity, 84.0);
        assert_eq!(current.wind_speed, 11.0);
        assert_eq!(current.pressure, 1013.0);
        assert_eq!(current.visibility, 10.0);
        assert_eq!(current.precipitation, 0.0);
        assert_eq!(current.feels_like, 31.0);
        assert_eq!(current.dew_point, Some(24.0));
        // Zero gust is treated as unavailable
        assert_eq!(current.wind_gust, None);
        assert_eq!(current.condition_code, Some(1003));
        assert!(report.disease_risk.is_empty());
    }

    #[test]
    fn converts_air_quality_and_pollen() {
        let report = convert_response(sample_forecast(), None, None, &full_request());

        let aq = report.air_quality.unwrap();
        assert_eq!(aq.pm2_5, 15.33);
        assert_eq!(aq.pm10, 22.11);
        assert_eq!(aq.co, 523.46);
        assert_eq!(aq.us_epa_index, 2);

        let pollen = report.pollen.unwrap();
        assert_eq!(pollen.grass, 45.67);
        assert_eq!(pollen.oak, 12.3);
    }

    #[test]
    fn optional_sections_follow_request_flags() {
        let mut req = ReportRequest::new("Lagos");
        req.include_air_quality = false;
        req.include_pollen = false;

        let report = convert_response(sample_forecast(), None, None, &req);
        assert!(report.air_quality.is_none());
        assert!(report.pollen.is_none());
        assert!(report.hourly.is_none());
        assert!(report.marine.is_none());
        assert!(report.tides.is_none());
    }

    #[test]
    fn converts_forecast_days_and_hourly() {
        let report = convert_response(sample_forecast(), None, None, &full_request());

        assert_eq!(report.forecast.len(), 2);
        let first = &report.forecast[0];
        assert_eq!(first.max_temp, 32.0);
        assert_eq!(first.min_temp, 24.0);
        assert_eq!(first.avg_temp, Some(28.0));
        assert_eq!(first.wind_speed, 15.0);
        assert_eq!(first.precipitation, 3.0);
        assert_eq!(first.visibility, Some(9.0));
        assert_eq!(first.chance_of_rain, Some(80.0));

        let second = &report.forecast[1];
        assert_eq!(second.avg_temp, None);
        assert_eq!(second.condition, "Sunny");
        assert_eq!(second.condition_icon, None);

        let hourly = report.hourly.unwrap();
        assert_eq!(hourly.len(), 24);
        assert_eq!(hourly[0].temperature, 26.0);
        assert_eq!(hourly[0].wind_speed, 8.0);
        assert_eq!(hourly[0].feels_like, Some(29.0));
        assert_eq!(hourly[0].dew_point, None);
    }

    #[test]
    fn alert_type_falls_back_to_event() {
        let report = convert_response(sample_forecast(), None, None, &full_request());
        assert_eq!(report.alerts.len(), 1);
        let alert = &report.alerts[0];
        assert_eq!(alert.alert_type, "Flood");
        assert_eq!(alert.description, "River levels rising");
        assert_eq!(alert.urgency, "");
    }

    #[test]
    fn converts_astronomy_with_string_illumination() {
        let astro: WapiAstronomyResponse = serde_json::from_value(json!({
            "astronomy": { "astro": {
                "sunrise": "06:30 AM", "sunset": "06:45 PM",
                "moonrise": "08:15 PM", "moonset": "07:20 AM",
                "moon_phase": "Waxing Crescent", "moon_illumination": "25",
                "is_moon_up": 0, "is_sun_up": 1
            }}
        }))
        .unwrap();

        let report = convert_response(
            sample_forecast(),
            Some(astro.astronomy.astro),
            None,
            &full_request(),
        );
        let astronomy = report.astronomy.unwrap();
        assert_eq!(astronomy.moon_illumination, 25.0);
        assert_eq!(astronomy.moon_phase, "Waxing Crescent");
        assert_eq!(astronomy.is_sun_up, Some(1));
    }

    #[test]
    fn converts_marine_and_tides() {
        let marine: WapiMarineResponse = serde_json::from_value(json!({
            "forecast": { "forecastday": [ {
                "hour": [
                    { "sig_ht_mt": 1.234, "swell_ht_mt": 0.0, "swell_dir": 225.0,
                      "swell_period_secs": 8.5, "water_temp_c": 27.6 }
                ],
                "tides": [
                    { "tide_time": "06:30", "tide_height_mt": "1.204", "tide_type": "HIGH" },
                    { "tide_time": "12:45", "tide_height_mt": 0.3, "tide_type": "LOW" }
                ]
            } ] }
        }))
        .unwrap();

        let report = convert_response(sample_forecast(), None, Some(marine), &full_request());
        let conditions = report.marine.unwrap();
        assert_eq!(conditions.significant_wave_height, Some(1.23));
        assert_eq!(conditions.swell_height, None);
        assert_eq!(conditions.swell_direction, Some(225.0));
        assert_eq!(conditions.water_temperature, Some(28.0));

        let tides = report.tides.unwrap();
        assert_eq!(tides.len(), 2);
        assert_eq!(tides[0].height, 1.2);
        assert_eq!(tides[1].tide_type, "LOW");
    }

    #[test]
    fn tides_require_tide_flag() {
        let marine: WapiMarineResponse = serde_json::from_value(json!({
            "forecast": { "forecastday": [ {
                "hour": [ { "sig_ht_mt": 1.0 } ],
                "tides": [ { "tide_time": "06:30", "tide_height_mt": 1.2, "tide_type": "HIGH" } ]
            } ] }
        }))
        .unwrap();

        let mut req = full_request();
        req.include_tides = false;
        let report = convert_response(sample_forecast(), None, Some(marine), &req);
        assert!(report.marine.is_some());
        assert!(report.tides.is_none());
    }
}
