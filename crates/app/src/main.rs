use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::AnnouncerRef;
use tables_core::model::{Locale, SessionConfig};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Directive, LevelFilter};
use ui::{App, SpeechAnnouncer, UiApp, build_app_context};

mod config;

use config::{AppConfig, Overrides, load_config};

#[derive(Debug, Parser)]
#[command(name = "times-tables", version, about = "Multiplication table drill")]
struct Cli {
    /// TOML settings file
    #[arg(long, env = "TABLES_CONFIG")]
    config: Option<PathBuf>,

    /// Extra log filter directive, e.g. `debug` or `services=trace`
    #[arg(long)]
    log_level: Option<String>,

    #[command(flatten)]
    overrides: Overrides,
}

struct DesktopApp {
    config: AppConfig,
}

impl UiApp for DesktopApp {
    fn initial_config(&self) -> SessionConfig {
        self.config.session_config()
    }

    fn locale(&self) -> Locale {
        self.config.locale
    }

    fn advance_delay(&self) -> Duration {
        self.config.advance_delay()
    }

    fn announcer(&self) -> AnnouncerRef {
        Arc::new(SpeechAnnouncer::new(self.config.locale).with_rate(self.config.speech_rate))
    }
}

fn log_filter(log_level: Option<&str>) -> Result<EnvFilter> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    match log_level {
        Some(directive) => {
            let directive = directive
                .parse::<Directive>()
                .with_context(|| format!("invalid --log-level: {directive}"))?;
            Ok(filter.add_directive(directive))
        }
        None => Ok(filter),
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.log_level.as_deref())?)
        .init();

    let config = load_config(cli.config.as_deref(), &cli.overrides)?;
    tracing::info!(
        multiplier = %config.multiplier,
        order = %config.order,
        voice = config.voice,
        locale = ?config.locale,
        "launching"
    );

    // On macOS, tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(config.window_title.clone())
            .with_always_on_top(false),
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { config });
    let context = build_app_context(&app);

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
