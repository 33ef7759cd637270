mod webcam;

#[cfg(test)]
pub mod fake;

pub use webcam::WebcamDevice;

use anyhow::Result;
use image::RgbImage;

/// Trait for camera capture sources
pub trait CaptureSource {
    /// Capture a single frame
    fn capture_frame(&mut self) -> Result<RgbImage>;

    /// Get the resolution of captured frames
    fn resolution(&self) -> (u32, u32);
}

/// A camera that can be opened on demand.
///
/// The returned source owns the open device; dropping it releases the device.
pub trait CaptureDevice {
    type Source: CaptureSource;

    /// Open the device and start streaming
    fn open(&mut self) -> Result<Self::Source>;
}
