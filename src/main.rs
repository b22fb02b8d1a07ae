mod app;
mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod ui;

use app::App;
use clap::Parser;
use cli::{Cli, Commands, RiskArgs, WeatherArgs};
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::Result;
use logic::{DiseaseRiskEstimator, WeatherService};
use models::{AirQualityReading, ReportRequest, WeatherReading};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use ui::screens::DashboardScreen;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Weather(ref args)) => run_weather(cli.config.clone(), args).await,
        Some(Commands::Risk(ref args)) => run_risk(cli.config.clone(), args),
        Some(Commands::Init) => Config::setup_interactive().map(|_| ()),
        Some(Commands::Check) => run_check(cli.config.clone()).await,
        Some(Commands::Dashboard { ref location }) => {
            run_dashboard(cli.config.clone(), location.clone()).await
        }
        None => run_dashboard(cli.config.clone(), None).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Logs go to stderr so stdout stays clean for reports and JSON
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(config_override: Option<PathBuf>) -> Result<Config> {
    Config::load_or_default(config_override).inspect_err(|_| {
        eprintln!("Run `farmcast init` to write a fresh config file.");
    })
}

async fn run_weather(config_override: Option<PathBuf>, args: &WeatherArgs) -> Result<()> {
    let config = load_config(config_override)?;
    let request = args.apply(config.report_request());
    let service = WeatherService::new(&config);

    let report = service.report(&request).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", ui::text::render_report(&report, request.farming_type));
    }
    Ok(())
}

fn run_risk(config_override: Option<PathBuf>, args: &RiskArgs) -> Result<()> {
    let farming_type = match args.farming_type {
        Some(t) => t,
        None => load_config(config_override)?.farm.farming_type,
    };

    let reading = WeatherReading::new(
        args.temperature,
        args.humidity,
        args.wind_speed,
        args.precipitation,
    )?;

    let air_quality = match (args.pm2_5, args.pm10) {
        (None, None) => None,
        (pm2_5, pm10) => Some(AirQualityReading::new(
            pm2_5.unwrap_or(0.0),
            pm10.unwrap_or(0.0),
        )?),
    };

    let risk = DiseaseRiskEstimator.estimate(&reading, air_quality.as_ref(), farming_type);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&risk)?);
    } else {
        println!("{}", ui::text::render_risk(&risk, farming_type));
    }
    Ok(())
}

async fn run_check(config_override: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_override.clone())?;

    match config_override {
        Some(p) => println!("Config: {}", p.display()),
        None if Config::exists(None) => println!("Config: found"),
        None => println!("Config: none (using defaults)"),
    }
    println!(
        "Farm: {} ({} farming, {} day forecast)",
        config.farm.location, config.farm.farming_type, config.farm.forecast_days
    );

    let status = WeatherService::new(&config).check_connection().await;
    let weatherapi = match (status.configured, status.weatherapi) {
        (false, _) => "not configured (fallback data will be used)",
        (true, true) => "OK",
        (true, false) => "OFFLINE",
    };
    println!("WeatherAPI: {}", weatherapi);

    Ok(())
}

async fn run_dashboard(config_override: Option<PathBuf>, location: Option<String>) -> Result<()> {
    let config = load_config(config_override)?;
    let mut request: ReportRequest = config.report_request();
    if let Some(location) = location {
        request.location = location;
    }

    let service = WeatherService::new(&config);
    let report = service.report(&request).await;
    let mut app = App::new(request, report);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &service).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn render_dashboard(frame: &mut Frame, app: &App) {
    let screen = DashboardScreen::new(&app.report, app.farming_type())
        .with_status(app.status_message.as_deref());
    frame.render_widget(screen, frame.area());
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    service: &WeatherService,
) -> Result<()> {
    loop {
        terminal.draw(|f| render_dashboard(f, app))?;

        // Handle input with timeout for async operations
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Char('r') => app.request_refresh(),
                    KeyCode::Char('f') => app.cycle_farming_type(service),
                    _ => {}
                }
            }
        }

        if app.needs_refresh {
            app.needs_refresh = false;
            // The fetch blocks the loop, so show the refreshing status first
            terminal.draw(|f| render_dashboard(f, app))?;
            let report = service.report(&app.request).await;
            app.update_report(report);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
