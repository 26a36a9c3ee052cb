mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::ui::{CatalogEditorApp, StartupConfig};

const UI_EVENT_QUEUE_CAPACITY: usize = 256;

#[derive(Parser, Debug)]
#[command(about = "In-memory product catalog editor")]
struct Args {
    /// Window title and page heading.
    #[arg(long, default_value = "NeoFit")]
    title: String,
    #[arg(long, default_value_t = 960.0)]
    width: f32,
    #[arg(long, default_value_t = 640.0)]
    height: f32,
    /// Start without the two sample products.
    #[arg(long)]
    empty_catalog: bool,
    /// Tracing filter directive; RUST_LOG takes precedence when set.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

impl Args {
    fn startup_config(&self) -> StartupConfig {
        StartupConfig {
            title: self.title.clone(),
            window_size: [self.width, self.height],
            empty_catalog: self.empty_catalog,
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_filter);

    let requested = args.startup_config();
    let (startup, startup_banner) = match requested.validate() {
        Ok(()) => (requested, None),
        Err(err) => {
            tracing::warn!(error = %err, "invalid startup arguments; falling back to defaults");
            let banner = UiError::from_message(UiErrorContext::Startup, err.to_string());
            (StartupConfig::default(), Some(banner))
        }
    };
    tracing::info!(
        title = %startup.title,
        seeded = !startup.empty_catalog,
        "starting catalog editor"
    );

    let (ui_tx, ui_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE_CAPACITY);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(startup.title.clone())
            .with_inner_size(startup.window_size)
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };
    let app_name = startup.title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(
                CatalogEditorApp::new(&startup, ui_tx, ui_rx).with_status_banner(startup_banner),
            ))
        }),
    )
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
