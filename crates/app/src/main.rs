use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::{parse_millis, parse_scenario_id};
use services::{AppConfig, AppServices, ConfigError, Timings, ValidationService};
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};
use werkstatt_core::{Catalog, model::ScenarioId};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    Invalid(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ConfigError> for ArgsError {
    fn from(err: ConfigError) -> Self {
        ArgsError::Invalid(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn validation(&self) -> Arc<ValidationService> {
        self.services.validation()
    }

    fn timings(&self) -> Timings {
        self.services.timings()
    }

    fn start_scenario(&self) -> ScenarioId {
        self.services.start_scenario().clone()
    }
}

enum Parsed {
    Run(AppConfig),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--start <ticket-id>] [--diagnosis-delay-ms <n>]");
    eprintln!("                      [--validation-delay-ms <n>] [--instant]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --start               first ticket in the catalog");
    eprintln!("  --diagnosis-delay-ms  1500");
    eprintln!("  --validation-delay-ms 800");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  WERKSTATT_START, WERKSTATT_DIAGNOSIS_DELAY_MS, WERKSTATT_VALIDATION_DELAY_MS");
    eprintln!("  RUST_LOG (default: info)");
}

/// Command-line flags override `base`, which already carries env values.
fn parse_args(
    args: &mut impl Iterator<Item = String>,
    base: AppConfig,
) -> Result<Parsed, ArgsError> {
    let mut config = base;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--start" => {
                let value = require_value(args, "--start")?;
                config.start_scenario = Some(parse_scenario_id("--start", &value)?);
            }
            "--diagnosis-delay-ms" => {
                let value = require_value(args, "--diagnosis-delay-ms")?;
                config.timings.diagnosis_advance = parse_millis("--diagnosis-delay-ms", &value)?;
            }
            "--validation-delay-ms" => {
                let value = require_value(args, "--validation-delay-ms")?;
                config.timings.validation_delay = parse_millis("--validation-delay-ms", &value)?;
            }
            "--instant" => {
                config.timings = Timings::instant();
            }
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(Parsed::Run(config))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    log_fmt().with_env_filter(filter).with_target(false).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let from_env = AppConfig::default().with_env(|key| std::env::var(key).ok())?;
    let mut argv = std::env::args().skip(1);
    let config = match parse_args(&mut argv, from_env).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })? {
        Parsed::Run(config) => config,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    init_logging();
    tracing::debug!(?config, "launch configuration");

    // Catalog problems surface here, before a window is opened.
    let services = AppServices::builtin(&config)?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("CSS Werkstatt")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
