use super::{CaptureDevice, CaptureSource};
use anyhow::{Context, Result};
use image::RgbImage;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;

/// Webcam selected by index, opened each time capture starts
pub struct WebcamDevice {
    index: u32,
    width: u32,
    height: u32,
    fps: u32,
}

impl WebcamDevice {
    pub fn new(index: u32, width: u32, height: u32, fps: u32) -> Self {
        Self {
            index,
            width,
            height,
            fps,
        }
    }
}

impl CaptureDevice for WebcamDevice {
    type Source = WebcamCapture;

    fn open(&mut self) -> Result<WebcamCapture> {
        WebcamCapture::new(self.index, self.width, self.height, self.fps)
    }
}

/// An open webcam stream. The stream is stopped when this is dropped.
pub struct WebcamCapture {
    camera: Camera,
    width: u32,
    height: u32,
}

impl WebcamCapture {
    pub fn new(device_index: u32, width: u32, height: u32, fps: u32) -> Result<Self> {
        tracing::info!(
            "Opening webcam {} at {}x{}@{}",
            device_index,
            width,
            height,
            fps
        );

        let index = CameraIndex::Index(device_index);
        let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(
            CameraFormat::new_from(width, height, FrameFormat::MJPEG, fps),
        ));

        let mut camera = Camera::new(index, requested)
            .with_context(|| format!("Failed to open camera {}", device_index))?;

        camera
            .open_stream()
            .context("Failed to open camera stream")?;

        // The driver may not honour the requested size
        let negotiated = camera.resolution();
        tracing::info!(
            "Webcam streaming at {}x{}",
            negotiated.width(),
            negotiated.height()
        );

        Ok(Self {
            camera,
            width: negotiated.width(),
            height: negotiated.height(),
        })
    }
}

impl CaptureSource for WebcamCapture {
    fn capture_frame(&mut self) -> Result<RgbImage> {
        let _span = tracing::debug_span!("webcam_read").entered();

        let frame = self
            .camera
            .frame()
            .context("Failed to capture frame")?;

        let decoded = frame
            .decode_image::<RgbFormat>()
            .context("Failed to decode frame")?;

        Ok(decoded)
    }

    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Drop for WebcamCapture {
    fn drop(&mut self) {
        match self.camera.stop_stream() {
            Ok(()) => tracing::info!("Webcam released"),
            Err(e) => tracing::warn!("Failed to stop webcam stream: {}", e),
        }
    }
}
