use crate::logic::locations::normalize_location;
use crate::models::{
    AirQuality, Astronomy, CurrentConditions, DailyForecast, DiseaseRisk, HourlyForecast,
    MarineConditions, Pollen, ReportRequest, ReportSource, Tide, WeatherReport,
};
use chrono::{Duration, Utc};

const PARTLY_CLOUDY_ICON: &str = "//cdn.weatherapi.com/weather/64x64/day/116.png";
const LIGHT_RAIN_ICON: &str = "//cdn.weatherapi.com/weather/64x64/day/302.png";
const SUNNY_ICON: &str = "//cdn.weatherapi.com/weather/64x64/day/113.png";

/// Typical Nigerian conditions used when the weather provider is unavailable.
///
/// Optional sections follow the request flags. The disease risk is left
/// empty for the caller to assess from these readings.
pub fn fallback_report(request: &ReportRequest) -> WeatherReport {
    let now = Utc::now();

    let current = CurrentConditions {
        temperature: 28.0,
        condition: "Partly Cloudy".into(),
        humidity: 75.0,
        wind_speed: 12.0,
        wind_direction: "SW".into(),
        pressure: 1013.0,
        visibility: 10.0,
        uv_index: 6.0,
        last_updated: now.to_rfc3339(),
        feels_like: 30.0,
        cloud_cover: 50.0,
        precipitation: 2.0,
        wind_chill: Some(26.0),
        heat_index: Some(32.0),
        dew_point: Some(22.0),
        wind_gust: Some(18.0),
        is_day: Some(1),
        condition_code: Some(1003),
        condition_icon: Some(PARTLY_CLOUDY_ICON.into()),
    };

    let day = |offset: i64| (now + Duration::days(offset)).format("%Y-%m-%d").to_string();
    let forecast = vec![
        DailyForecast {
            date: day(0),
            max_temp: 32.0,
            min_temp: 24.0,
            avg_temp: Some(28.0),
            condition: "Partly Cloudy".into(),
            humidity: 70.0,
            wind_speed: 15.0,
            precipitation: 2.0,
            uv_index: 6.0,
            visibility: Some(10.0),
            will_it_rain: Some(0),
            chance_of_rain: Some(20.0),
            condition_code: Some(1003),
            condition_icon: Some(PARTLY_CLOUDY_ICON.into()),
        },
        DailyForecast {
            date: day(1),
            max_temp: 30.0,
            min_temp: 23.0,
            avg_temp: Some(26.0),
            condition: "Light Rain".into(),
            humidity: 80.0,
            wind_speed: 18.0,
            precipitation: 8.0,
            uv_index: 4.0,
            visibility: Some(8.0),
            will_it_rain: Some(1),
            chance_of_rain: Some(70.0),
            condition_code: Some(1183),
            condition_icon: Some(LIGHT_RAIN_ICON.into()),
        },
        DailyForecast {
            date: day(2),
            max_temp: 31.0,
            min_temp: 25.0,
            avg_temp: Some(28.0),
            condition: "Sunny".into(),
            humidity: 65.0,
            wind_speed: 10.0,
            precipitation: 0.0,
            uv_index: 7.0,
            visibility: Some(12.0),
            will_it_rain: Some(0),
            chance_of_rain: Some(10.0),
            condition_code: Some(1000),
            condition_icon: Some(SUNNY_ICON.into()),
        },
    ];

    let hourly = request.include_hourly.then(|| {
        vec![
            hour("00:00", 26.0, "Clear", 80.0, 8.0, 0.0, 28.0, 22.0, 10.0, 0),
            hour("06:00", 24.0, "Partly Cloudy", 85.0, 6.0, 1.0, 26.0, 21.0, 15.0, 0),
            hour("12:00", 32.0, "Sunny", 60.0, 12.0, 8.0, 35.0, 23.0, 5.0, 1),
            hour("18:00", 29.0, "Partly Cloudy", 70.0, 10.0, 3.0, 32.0, 22.0, 20.0, 1),
        ]
    });

    let air_quality = request.include_air_quality.then(|| AirQuality {
        co: 0.5,
        o3: 45.2,
        no2: 12.8,
        so2: 3.1,
        pm2_5: 15.3,
        pm10: 22.1,
        us_epa_index: 2,
        gb_defra_index: 3,
    });

    let pollen = request.include_pollen.then(|| Pollen {
        hazel: 5.2,
        alder: 2.1,
        birch: 8.7,
        oak: 12.3,
        grass: 45.6,
        mugwort: 3.2,
        ragweed: 1.8,
    });

    let astronomy = request.include_astronomy.then(|| Astronomy {
        sunrise: "06:30 AM".into(),
        sunset: "06:45 PM".into(),
        moonrise: "08:15 PM".into(),
        moonset: "07:20 AM".into(),
        moon_phase: "Waxing Crescent".into(),
        moon_illumination: 25.0,
        is_moon_up: Some(0),
        is_sun_up: Some(1),
    });

    let marine = request.include_marine.then(|| MarineConditions {
        significant_wave_height: Some(1.2),
        swell_height: Some(0.8),
        swell_direction: Some(225.0),
        swell_period: Some(8.5),
        water_temperature: Some(28.0),
    });

    let tides = request.include_tides.then(|| {
        vec![
            tide("06:30", 1.2, "High"),
            tide("12:45", 0.3, "Low"),
            tide("18:20", 1.5, "High"),
        ]
    });

    WeatherReport {
        location: normalize_location(&request.location),
        source: ReportSource::Fallback,
        current,
        forecast,
        hourly,
        alerts: Vec::new(),
        air_quality,
        pollen,
        astronomy,
        marine,
        tides,
        disease_risk: DiseaseRisk::default(),
    }
}

#[allow(clippy::too_many_arguments)]
fn hour(
    time: &str,
    temperature: f64,
    condition: &str,
    humidity: f64,
    wind_speed: f64,
    uv_index: f64,
    feels_like: f64,
    dew_point: f64,
    chance_of_rain: f64,
    is_day: u8,
) -> HourlyForecast {
    HourlyForecast {
        time: time.into(),
        temperature,
        condition: condition.into(),
        humidity,
        wind_speed,
        wind_direction: "SW".into(),
        precipitation: 0.0,
        uv_index,
        feels_like: Some(feels_like),
        wind_chill: Some(temperature),
        heat_index: Some(feels_like),
        dew_point: Some(dew_point),
        will_it_rain: Some(0),
        chance_of_rain: Some(chance_of_rain),
        is_day: Some(is_day),
    }
}

fn tide(time: &str, height: f64, tide_type: &str) -> Tide {
    Tide {
        time: time.into(),
        height,
        tide_type: tide_type.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_sections() {
        let report = fallback_report(&ReportRequest::new("kano"));

        assert_eq!(report.location, "Kano");
        assert_eq!(report.source, ReportSource::Fallback);
        assert_eq!(report.forecast.len(), 3);
        assert!(report.alerts.is_empty());
        assert!(report.air_quality.is_some());
        assert!(report.pollen.is_some());
        assert!(report.astronomy.is_some());
        assert!(report.hourly.is_none());
        assert!(report.marine.is_none());
        assert!(report.tides.is_none());
        assert!(report.disease_risk.is_empty());
    }

    #[test]
    fn current_readings_are_valid() {
        let report = fallback_report(&ReportRequest::new("Lagos"));
        let reading = report.current.reading().unwrap();
        assert_eq!(reading.temperature(), 28.0);
        assert_eq!(reading.humidity(), 75.0);
        assert_eq!(reading.wind_speed(), 12.0);
        assert_eq!(reading.precipitation(), 2.0);

        let aq = report.air_quality.unwrap().reading().unwrap();
        assert_eq!(aq.pm2_5(), 15.3);
        assert_eq!(aq.pm10(), 22.1);
    }

    #[test]
    fn coastal_sections_when_requested() {
        let mut req = ReportRequest::new("Calabar");
        req.include_hourly = true;
        req.include_marine = true;
        req.include_tides = true;
        req.include_air_quality = false;

        let report = fallback_report(&req);
        assert_eq!(report.hourly.as_ref().map(Vec::len), Some(4));
        assert_eq!(report.tides.as_ref().map(Vec::len), Some(3));
        assert_eq!(report.marine.unwrap().swell_direction, Some(225.0));
        assert!(report.air_quality.is_none());
    }

    #[test]
    fn forecast_dates_are_consecutive() {
        let report = fallback_report(&ReportRequest::new("Abuja"));
        let today = Utc::now().date_naive();
        let dates: Vec<_> = report
            .forecast
            .iter()
            .map(|d| chrono::NaiveDate::parse_from_str(&d.date, "%Y-%m-%d").unwrap())
            .collect();
        assert!(dates[0] >= today);
        assert_eq!(dates[1] - dates[0], Duration::days(1));
        assert_eq!(dates[2] - dates[1], Duration::days(1));
    }
}
