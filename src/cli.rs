use crate::models::{FarmingType, ReportRequest};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "farmcast",
    version,
    about = "Weather-driven crop and livestock disease risk for Nigerian farms"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a weather report with disease risk
    Weather(WeatherArgs),
    /// Estimate disease risk from readings given on the command line
    Risk(RiskArgs),
    /// Interactive dashboard (default)
    Dashboard {
        /// City or place name, overrides the configured farm location
        location: Option<String>,
    },
    /// Re-run interactive setup
    Init,
    /// Validate config and test connections
    Check,
}

#[derive(Args)]
pub struct WeatherArgs {
    /// City or place name, overrides the configured farm location
    pub location: Option<String>,

    /// Forecast days (1-14)
    #[arg(short, long)]
    pub days: Option<u32>,

    /// crops, animals, mixed or aquaculture
    #[arg(short, long)]
    pub farming_type: Option<FarmingType>,

    /// Include the next 24 hours
    #[arg(long)]
    pub hourly: bool,

    /// Include marine conditions
    #[arg(long)]
    pub marine: bool,

    /// Include tide times (implies --marine)
    #[arg(long)]
    pub tides: bool,

    #[arg(long)]
    pub no_air_quality: bool,

    #[arg(long)]
    pub no_pollen: bool,

    #[arg(long)]
    pub no_astronomy: bool,

    #[arg(long)]
    pub no_alerts: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl WeatherArgs {
    /// Layer the command line flags over the configured request
    pub fn apply(&self, mut request: ReportRequest) -> ReportRequest {
        if let Some(ref location) = self.location {
            request.location = location.clone();
        }
        if let Some(days) = self.days {
            request = request.with_days(days);
        }
        if let Some(farming_type) = self.farming_type {
            request.farming_type = farming_type;
        }
        request.include_hourly |= self.hourly;
        request.include_marine |= self.marine || self.tides;
        request.include_tides |= self.tides;
        request.include_air_quality &= !self.no_air_quality;
        request.include_pollen &= !self.no_pollen;
        request.include_astronomy &= !self.no_astronomy;
        request.include_alerts &= !self.no_alerts;
        request
    }
}

#[derive(Args)]
pub struct RiskArgs {
    /// Air temperature in °C
    #[arg(short, long, allow_negative_numbers = true)]
    pub temperature: f64,

    /// Relative humidity in percent
    #[arg(short = 'H', long)]
    pub humidity: f64,

    /// Wind speed in km/h
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub wind_speed: f64,

    /// Precipitation in mm
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub precipitation: f64,

    /// PM2.5 in µg/m³
    #[arg(long = "pm2-5")]
    pub pm2_5: Option<f64>,

    /// PM10 in µg/m³
    #[arg(long)]
    pub pm10: Option<f64>,

    /// crops, animals, mixed or aquaculture
    #[arg(short, long)]
    pub farming_type: Option<FarmingType>,

    /// Print the assessment as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_dashboard() {
        let cli = Cli::parse_from(["farmcast", "-vv"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn weather_flags_override_request() {
        let cli = Cli::parse_from([
            "farmcast",
            "weather",
            "kano",
            "--days",
            "5",
            "--farming-type",
            "livestock",
            "--tides",
            "--no-pollen",
        ]);
        let Some(Commands::Weather(args)) = cli.command else {
            panic!("expected weather command");
        };

        let request = args.apply(ReportRequest::new("Lagos"));
        assert_eq!(request.location, "kano");
        assert_eq!(request.days, 5);
        assert_eq!(request.farming_type, FarmingType::Animals);
        assert!(request.include_marine);
        assert!(request.include_tides);
        assert!(!request.include_pollen);
        assert!(request.include_air_quality);
        assert!(!request.include_hourly);
    }

    #[test]
    fn risk_accepts_readings() {
        let cli = Cli::parse_from([
            "farmcast",
            "--config",
            "farm.yaml",
            "risk",
            "--temperature",
            "-2",
            "-H",
            "85",
            "--pm2-5",
            "30",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("farm.yaml")));
        let Some(Commands::Risk(args)) = cli.command else {
            panic!("expected risk command");
        };
        assert_eq!(args.temperature, -2.0);
        assert_eq!(args.humidity, 85.0);
        assert_eq!(args.wind_speed, 0.0);
        assert_eq!(args.pm2_5, Some(30.0));
        assert_eq!(args.pm10, None);
        assert!(args.farming_type.is_none());
    }

    #[test]
    fn risk_accepts_negative_wind_and_precipitation() {
        let cli = Cli::parse_from([
            "farmcast",
            "risk",
            "-t",
            "30",
            "-H",
            "80",
            "--wind-speed",
            "-5",
            "--precipitation",
            "-1",
        ]);
        let Some(Commands::Risk(args)) = cli.command else {
            panic!("expected risk command");
        };
        assert_eq!(args.wind_speed, -5.0);
        assert_eq!(args.precipitation, -1.0);
    }

    #[test]
    fn rejects_unknown_farming_type() {
        let result = Cli::try_parse_from(["farmcast", "weather", "--farming-type", "forestry"]);
        assert!(result.is_err());
    }
}
