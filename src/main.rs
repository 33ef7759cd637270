mod capture;
mod config;
mod controller;
mod error;
mod folder;
mod output;
mod ui;

use anyhow::{anyhow, Context, Result};
use capture::WebcamDevice;
use clap::Parser;
use config::Args;
use controller::CaptureController;
use output::{Display, SnapshotWriter};
use ui::WebcamApp;

const WINDOW_TITLE: &str = "Webcam App";

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let output_dir = args.output_dir();
    tracing::info!("snapcam starting");
    tracing::info!("Webcam: device {}, {}x{}", args.device, args.width, args.height);
    tracing::info!("Refresh interval: {:?}", args.refresh_interval());
    tracing::info!("Saving to {}", output_dir.display());

    // The output folder must exist before the first capture
    let snapshots = SnapshotWriter::new(output_dir, args.jpeg_quality);
    snapshots
        .ensure_dir()
        .context("Failed to prepare output directory")?;

    let device = WebcamDevice::new(args.device, args.width, args.height, args.fps);
    let controller = CaptureController::new(
        device,
        Display::new(args.width, args.height),
        snapshots,
    );
    let app = WebcamApp::new(controller, args.refresh_interval());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([700.0, 700.0])
            .with_min_inner_size([320.0, 320.0]),
        ..Default::default()
    };

    // The app, and with it any open webcam, is dropped when the window closes
    eframe::run_native(WINDOW_TITLE, options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow!("Window failed: {}", e))?;

    tracing::info!("snapcam exiting");
    Ok(())
}
