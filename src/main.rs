//! N-in-a-row GUI
//!
//! Two players share one window and alternate clicks on the grid.

use clap::Parser;
use ninarow::cli::Cli;
use ninarow::ui::NinarowApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let defaults = cli.app_config()?;
    info!(
        grid_size = defaults.grid_size,
        win_condition = defaults.win_condition,
        "starting ninarow"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([600.0, 480.0])
            .with_title("N in a Row"),
        ..Default::default()
    };

    eframe::run_native(
        "N in a Row",
        options,
        Box::new(|cc| Ok(Box::new(NinarowApp::new(cc, defaults)))),
    )?;
    Ok(())
}
