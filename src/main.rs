mod app;
mod controller;
mod launch;
mod util;
mod view;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// CSV file with one launch per row
    #[arg(long, default_value = "data/spacex_launch_dash.csv")]
    data: PathBuf,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    tracing::info!(data = %args.data.display(), "starting dashboard");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(app::DASHBOARD_TITLE)
            .with_inner_size([1280.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        app::DASHBOARD_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(app::LaunchDashApp::new(cc, args.data.clone())))),
    )
}
