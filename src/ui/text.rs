//! Plain-text rendering for the non-interactive commands.

use crate::logic::calculations::round_half_up;
use crate::models::{DiseaseRisk, FarmingType, RiskLevel, WeatherReport};

const BAR_WIDTH: usize = 10;

/// Fixed-width bar such as `[#####.....] 45%`
pub fn risk_bar(percent: f64) -> String {
    let percent = round_half_up(percent.clamp(0.0, 100.0));
    let filled = (round_half_up(percent / 10.0) as usize).min(BAR_WIDTH);
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        percent as u32
    )
}

pub fn render_risk(risk: &DiseaseRisk, farming_type: FarmingType) -> String {
    let mut lines = vec![format!("Disease risk ({} farming)", farming_type)];

    if risk.is_empty() {
        lines.push(format!(
            "  Crop and livestock diseases are not assessed for {} farming",
            farming_type
        ));
        return lines.join("\n");
    }

    if let Some(ref plant) = risk.plant_diseases {
        lines.push(String::new());
        lines.push("Plant diseases".to_string());
        lines.extend(risk_rows(&plant.risks()));
        lines.extend(action_rows(&plant.recommended_actions));
    }

    if let Some(ref animal) = risk.animal_diseases {
        lines.push(String::new());
        lines.push("Animal diseases".to_string());
        lines.extend(risk_rows(&animal.risks()));
        lines.extend(action_rows(&animal.recommended_actions));
    }

    lines.join("\n")
}

fn risk_rows(risks: &[(&str, f64)]) -> Vec<String> {
    risks
        .iter()
        .map(|(label, value)| {
            format!(
                "  {:<19}{} {}",
                label,
                risk_bar(*value),
                RiskLevel::from_percent(*value)
            )
        })
        .collect()
}

fn action_rows(actions: &[String]) -> Vec<String> {
    if actions.is_empty() {
        return vec!["  No action needed".to_string()];
    }
    actions.iter().map(|a| format!("  - {}", a)).collect()
}

pub fn render_report(report: &WeatherReport, farming_type: FarmingType) -> String {
    let current = &report.current;
    let mut lines = vec![
        format!("{} ({})", report.location, report.source.as_str()),
        format!("Updated: {}", current.last_updated),
        String::new(),
        "Current conditions".to_string(),
        format!(
            "  {}, {:.1}°C (feels like {:.1}°C)",
            current.condition, current.temperature, current.feels_like
        ),
        format!(
            "  Humidity {:.0}%  Wind {:.1} km/h {}  Precipitation {:.1} mm",
            current.humidity, current.wind_speed, current.wind_direction, current.precipitation
        ),
        format!(
            "  UV {:.1}  Pressure {:.0} mb  Visibility {:.1} km  Cloud {:.0}%",
            current.uv_index, current.pressure, current.visibility, current.cloud_cover
        ),
    ];

    if !report.forecast.is_empty() {
        lines.push(String::new());
        lines.push("Forecast".to_string());
        for day in &report.forecast {
            let rain = day
                .chance_of_rain
                .map(|c| format!("  rain {:.0}%", c))
                .unwrap_or_default();
            lines.push(format!(
                "  {}  {:<20} {:>5.1}-{:<5.1}°C  {:>5.1} mm{}",
                day.date, day.condition, day.min_temp, day.max_temp, day.precipitation, rain
            ));
        }
    }

    if let Some(ref hours) = report.hourly {
        lines.push(String::new());
        lines.push("Next hours".to_string());
        for hour in hours {
            lines.push(format!(
                "  {}  {:<20} {:>5.1}°C  {:>3.0}%  {:.1} km/h",
                hour.time, hour.condition, hour.temperature, hour.humidity, hour.wind_speed
            ));
        }
    }

    if !report.alerts.is_empty() {
        lines.push(String::new());
        lines.push("Alerts".to_string());
        for alert in &report.alerts {
            lines.push(format!("  ! [{}] {}", alert.severity, alert.headline));
        }
    }

    if let Some(ref aq) = report.air_quality {
        lines.push(String::new());
        lines.push("Air quality".to_string());
        lines.push(format!(
            "  PM2.5 {:.1}  PM10 {:.1}  O3 {:.1}  NO2 {:.1}  US EPA index {}",
            aq.pm2_5, aq.pm10, aq.o3, aq.no2, aq.us_epa_index
        ));
    }

    if let Some(ref pollen) = report.pollen {
        lines.push(String::new());
        lines.push("Pollen".to_string());
        lines.push(format!(
            "  Grass {:.1}  Oak {:.1}  Birch {:.1}  Ragweed {:.1}",
            pollen.grass, pollen.oak, pollen.birch, pollen.ragweed
        ));
    }

    if let Some(ref astro) = report.astronomy {
        lines.push(String::new());
        lines.push("Astronomy".to_string());
        lines.push(format!(
            "  Sunrise {}  Sunset {}  Moon {} ({:.0}%)",
            astro.sunrise, astro.sunset, astro.moon_phase, astro.moon_illumination
        ));
    }

    if let Some(ref marine) = report.marine {
        let fmt = |v: Option<f64>, unit: &str| {
            v.map(|v| format!("{:.1}{}", v, unit))
                .unwrap_or_else(|| "-".to_string())
        };
        lines.push(String::new());
        lines.push("Marine".to_string());
        lines.push(format!(
            "  Waves {}  Swell {}  Water {}",
            fmt(marine.significant_wave_height, " m"),
            fmt(marine.swell_height, " m"),
            fmt(marine.water_temperature, "°C")
        ));
    }

    if let Some(ref tides) = report.tides {
        lines.push(String::new());
        lines.push("Tides".to_string());
        for tide in tides {
            lines.push(format!("  {}  {:<5} {:.1} m", tide.time, tide.tide_type, tide.height));
        }
    }

    lines.push(String::new());
    lines.push(render_risk(&report.disease_risk, farming_type));
    lines.join("\n")
}
