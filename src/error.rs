use std::path::PathBuf;
use thiserror::Error;

/// Failures the UI reports to the user
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("webcam unavailable: {0:#}")]
    DeviceUnavailable(anyhow::Error),

    #[error("webcam is not running")]
    NotRunning,

    #[error("failed to read a frame: {0:#}")]
    FrameRead(anyhow::Error),

    #[error("failed to save image: {0:#}")]
    Save(anyhow::Error),

    #[error("failed to open folder {}: {source}", path.display())]
    OpenFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CaptureError {
    /// Short heading for the notice window
    pub fn title(&self) -> &'static str {
        match self {
            Self::DeviceUnavailable(_) => "Webcam Unavailable",
            Self::NotRunning => "Webcam Not Started",
            Self::FrameRead(_) => "Capture Failed",
            Self::Save(_) => "Save Failed",
            Self::OpenFolder { .. } => "Open Folder Failed",
        }
    }
}
