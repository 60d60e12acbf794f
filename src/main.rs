//! Widget Gallery - interactive terminal widget showcase
//!
//! Twenty small widgets (timers, forms, weather lookup, pickers, browsers)
//! behind one ratatui frontend.

mod config;
mod core;
mod data;
mod frontend;
mod network;
mod widgets;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::event::KeyCode;
use frontend::{Frontend, FrontendEvent};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "widget-gallery")]
#[command(about = "Terminal gallery of small interactive widgets", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.widget-gallery)
    /// Can also be set via WIDGET_GALLERY_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// OpenWeather API key (overrides config and WIDGET_GALLERY_API_KEY)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Timer period in milliseconds
    #[arg(long, value_name = "N")]
    tick_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the current weather for a city and print it
    Weather {
        #[arg(value_name = "CITY")]
        city: String,
    },
    /// Load and validate configuration
    ValidateConfig,
}

fn main() -> Result<()> {
    // TUI owns stdout, so logs go to a file (RUST_LOG controls the level)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("widget-gallery.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var(config::DIR_ENV, data_dir);
        tracing::info!("Using custom data directory: {:?}", data_dir);
    } else if let Ok(env_dir) = std::env::var(config::DIR_ENV) {
        tracing::info!("Using data directory from {}: {}", config::DIR_ENV, env_dir);
    }

    let overrides = config::Overrides {
        api_key: cli.api_key.clone(),
        tick_ms: cli.tick_ms,
    }
    .with_env();

    let mut config = config::Config::load(cli.config.as_deref())?;
    config.apply_overrides(&overrides);

    match cli.command {
        Some(Commands::ValidateConfig) => validate_config(&config),
        Some(Commands::Weather { city }) => {
            config.validate()?;
            let runtime = tokio::runtime::Runtime::new()?;
            if !runtime.block_on(lookup_once(&config, &city)) {
                std::process::exit(1);
            }
            Ok(())
        }
        None => run_tui(config),
    }
}

fn validate_config(config: &config::Config) -> Result<()> {
    match config.validate() {
        Ok(()) => {
            println!("✓ Configuration is valid");
            println!("  weather endpoint: {}", config.weather.endpoint);
            println!("  units: {}", config.weather.units.as_param());
            println!(
                "  api key: {}",
                if config.weather.api_key.is_empty() { "missing" } else { "set" }
            );
            println!("  tick: {} ms", config.timers.tick_ms);
            println!("  form steps: {}", config.wizard.steps.len());
            println!(
                "  filter items: {} fruits, {} movies",
                config.filters.fruits.len(),
                config.filters.movies.len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

/// Run one lookup through a controller and print the outcome. Returns false on failure.
async fn lookup_once(config: &config::Config, city: &str) -> bool {
    let (resolved_tx, mut resolved_rx) = mpsc::unbounded_channel();
    let source = network::OpenWeatherClient::new(&config.weather);
    let mut controller = widgets::LookupController::new(source, resolved_tx);

    controller.set_query(city.trim());
    if !controller.trigger() {
        eprintln!("✗ City must not be empty");
        return false;
    }

    if let Some(resolved) = resolved_rx.recv().await {
        controller.resolve(resolved);
    }

    let state = controller.state();
    if let Some(report) = state.result() {
        println!("{}, {}", report.city, report.country);
        println!("  {}  {}", report.temp, report.description);
        println!("  feels like {}", report.feels);
        println!("  humidity {}  wind {}", report.humidity, report.wind);
        println!("  sunrise {}  sunset {}", report.sunrise, report.sunset);
        println!("  {}", report.icon_url);
        true
    } else {
        eprintln!("✗ {}", state.error_message().unwrap_or(network::FALLBACK_ERROR));
        false
    }
}

/// Run TUI frontend
fn run_tui(config: config::Config) -> Result<()> {
    // Multi-threaded so tick and lookup tasks keep running while input polling blocks
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async_run_tui(config))
}

async fn async_run_tui(config: config::Config) -> Result<()> {
    let poll_timeout = Duration::from_millis(config.ui.poll_ms);
    let mut app_core = core::AppCore::new(config).context("Invalid configuration")?;
    let mut frontend =
        frontend::TuiFrontend::new(poll_timeout).context("Failed to initialize terminal")?;

    app_core.mount();
    let (width, height) = frontend.size();
    tracing::info!(width, height, "Widget gallery started");

    while app_core.running {
        for event in frontend.poll_events()? {
            match event {
                FrontendEvent::Key { code, modifiers } => {
                    if code == KeyCode::Null {
                        continue;
                    }
                    let action =
                        core::input_router::route_input(code, modifiers, app_core.ui_state.focused);
                    app_core.apply(action);
                }
                FrontendEvent::Paste { text } => {
                    app_core.apply(core::GalleryAction::InsertText(text));
                }
                FrontendEvent::Resize { width, height } => {
                    tracing::debug!(width, height, "Terminal resized");
                    app_core.needs_render = true;
                }
            }
        }

        app_core.process_pending();

        if app_core.needs_render {
            frontend.render(&app_core)?;
            app_core.needs_render = false;
        }

        tokio::task::yield_now().await;
    }

    app_core.unmount();
    frontend.cleanup()?;
    tracing::info!("Widget gallery stopped");
    Ok(())
}
