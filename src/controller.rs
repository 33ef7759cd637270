use crate::capture::{CaptureDevice, CaptureSource};
use crate::error::CaptureError;
use crate::output::{Display, SnapshotWriter};
use chrono::{Local, NaiveDateTime};
use image::RgbImage;
use std::path::PathBuf;

/// Capture state. The open source only exists while running, so leaving
/// `Running` by any path drops it and releases the device.
enum State<S> {
    Stopped,
    Running(S),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Started {
    Opened,
    AlreadyRunning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Started,
    Stopped,
}

/// Owns the camera, the video view contents and the snapshot writer
pub struct CaptureController<D: CaptureDevice> {
    device: D,
    state: State<D::Source>,
    display: Display,
    snapshots: SnapshotWriter,
}

impl<D: CaptureDevice> CaptureController<D> {
    pub fn new(device: D, display: Display, snapshots: SnapshotWriter) -> Self {
        Self {
            device,
            state: State::Stopped,
            display,
            snapshots,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running(_))
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn snapshots(&self) -> &SnapshotWriter {
        &self.snapshots
    }

    /// Open the device. A failed open leaves the controller stopped.
    pub fn start(&mut self) -> Result<Started, CaptureError> {
        if self.is_running() {
            tracing::debug!("Start requested while already running");
            return Ok(Started::AlreadyRunning);
        }

        let source = self.device.open().map_err(|e| {
            tracing::error!("Failed to open webcam: {:#}", e);
            CaptureError::DeviceUnavailable(e)
        })?;

        let (width, height) = source.resolution();
        tracing::info!("Capture started at {}x{}", width, height);
        self.state = State::Running(source);
        Ok(Started::Opened)
    }

    /// Release the device and blank the view. No-op when already stopped.
    pub fn stop(&mut self) {
        if let State::Running(source) = std::mem::replace(&mut self.state, State::Stopped) {
            drop(source);
            tracing::info!("Capture stopped");
        }
        self.display.clear();
    }

    pub fn toggle(&mut self) -> Result<Toggled, CaptureError> {
        if self.is_running() {
            self.stop();
            Ok(Toggled::Stopped)
        } else {
            self.start()?;
            Ok(Toggled::Started)
        }
    }

    /// Periodic refresh: read one frame into the view.
    ///
    /// A failed read shows the placeholder until the next good frame.
    pub fn tick(&mut self) {
        let State::Running(source) = &mut self.state else {
            return;
        };

        match source.capture_frame() {
            Ok(frame) => self.display.show(Some(frame)),
            Err(e) => {
                tracing::warn!("Frame read failed: {:#}", e);
                self.display.show(None);
            }
        }
    }

    /// Read a fresh frame and save it, named after the current local time
    pub fn capture_image(&mut self) -> Result<PathBuf, CaptureError> {
        self.capture_image_at(&Local::now().naive_local())
    }

    /// Same as [`capture_image`](Self::capture_image) with an explicit timestamp
    pub fn capture_image_at(&mut self, at: &NaiveDateTime) -> Result<PathBuf, CaptureError> {
        let frame = self.read_frame()?;
        self.snapshots.save(&frame, at).map_err(CaptureError::Save)
    }

    fn read_frame(&mut self) -> Result<RgbImage, CaptureError> {
        let State::Running(source) = &mut self.state else {
            tracing::warn!("Capture requested with no open webcam");
            return Err(CaptureError::NotRunning);
        };

        source.capture_frame().map_err(|e| {
            tracing::warn!("Capture read failed: {:#}", e);
            CaptureError::FrameRead(e)
        })
    }
}
