use std::sync::Arc;

use academy_core::Curriculum;
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, DEFAULT_TITLE, UiApp, build_app_context};

#[derive(Debug, Error)]
enum LaunchError {
    #[error("--start-path must begin with '/': {raw}")]
    InvalidStartPath { raw: String },
    #[error("invalid --log-filter value: {0}")]
    InvalidLogFilter(#[from] tracing_subscriber::filter::ParseError),
    #[error(transparent)]
    Core(#[from] academy_core::Error),
}

/// Desktop launcher for the Web Dev Academy course.
#[derive(Debug, Parser)]
#[command(name = "academy", version, about)]
struct Args {
    /// Route to open on launch, e.g. /css/selectors
    #[arg(long, env = "ACADEMY_START_PATH", default_value = "/")]
    start_path: String,

    /// Window and navbar title
    #[arg(long, env = "ACADEMY_TITLE", default_value = DEFAULT_TITLE)]
    title: String,

    /// tracing filter directive, e.g. `info` or `ui=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_filter: String,
}

impl Args {
    fn validate(&self) -> Result<(), LaunchError> {
        if !self.start_path.starts_with('/') {
            return Err(LaunchError::InvalidStartPath {
                raw: self.start_path.clone(),
            });
        }
        Ok(())
    }
}

struct DesktopApp {
    curriculum: Arc<Curriculum>,
    start_path: String,
    title: String,
}

impl UiApp for DesktopApp {
    fn curriculum(&self) -> Arc<Curriculum> {
        Arc::clone(&self.curriculum)
    }

    fn start_path(&self) -> Option<String> {
        Some(self.start_path.clone())
    }

    fn title(&self) -> String {
        self.title.clone()
    }
}

fn init_tracing(filter: &str) -> Result<(), LaunchError> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

fn load_curriculum() -> Result<Curriculum, academy_core::Error> {
    Ok(Curriculum::builtin()?)
}

fn run() -> Result<(), LaunchError> {
    let args = Args::parse();
    args.validate()?;
    init_tracing(&args.log_filter)?;

    let curriculum = load_curriculum()?;
    info!(
        lessons = curriculum.len(),
        start_path = %args.start_path,
        "launching desktop app"
    );

    let app = DesktopApp {
        curriculum: Arc::new(curriculum),
        start_path: args.start_path,
        title: args.title.clone(),
    };
    let context = build_app_context(Arc::new(app));

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title)
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
