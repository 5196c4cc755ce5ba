use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::Level;

use quiz_core::Clock;
use quiz_core::model::Catalog;
use services::{load_catalog_from_path, load_catalog_from_str};
use ui::{App, UiApp, build_app_context};

const DEFAULT_CATALOG: &str = include_str!("../assets/default_catalog.json");

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    catalog: Arc<Catalog>,
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

struct Args {
    catalog_path: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--catalog <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in sample catalog");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_CATALOG  path to a catalog JSON file");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut catalog_path = std::env::var("QUIZ_CATALOG").ok().map(PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    catalog_path = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { catalog_path })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Load + validate the catalog up front, in the binary glue, so the
    // engine only ever sees data that passed its integrity preconditions.
    let catalog = match &parsed.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog");
            load_catalog_from_path(path)?
        }
        None => load_catalog_from_str(DEFAULT_CATALOG)?,
    };
    tracing::info!(stages = catalog.stage_count(), "catalog ready");

    let app = DesktopApp {
        catalog: Arc::new(catalog),
        clock: Clock::default_clock(),
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some
    // dev setups. Explicitly disable it so the app doesn't behave like a
    // modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Stage Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
