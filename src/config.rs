use clap::Parser;
use directories::UserDirs;
use std::path::PathBuf;
use std::time::Duration;

const OUTPUT_DIR_NAME: &str = "captured_images";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input webcam device index
    #[arg(short, long, default_value_t = 0)]
    pub device: u32,

    /// Folder captured images are saved to
    /// Defaults to captured_images in the user's Pictures folder
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Expected frame width, also the placeholder width
    #[arg(long, default_value_t = 640, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Expected frame height, also the placeholder height
    #[arg(long, default_value_t = 480, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Frame rate requested from the camera
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Interval between preview refreshes, in milliseconds
    #[arg(long, default_value_t = 10)]
    pub refresh_ms: u64,

    /// JPEG quality of saved images
    #[arg(long, default_value_t = 90, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub jpeg_quality: u8,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(default_output_dir)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms.max(1))
    }
}

/// `<Pictures>/captured_images`, or `./captured_images` when the platform
/// has no pictures folder
pub fn default_output_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.picture_dir().map(|p| p.join(OUTPUT_DIR_NAME)))
        .unwrap_or_else(|| PathBuf::from(OUTPUT_DIR_NAME))
}
