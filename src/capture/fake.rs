//! Scripted capture device for tests. Records every open and release.

use super::{CaptureDevice, CaptureSource};
use anyhow::{bail, Result};
use image::{Rgb, RgbImage};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceEvent {
    Opened,
    Read,
    Released,
}

#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<DeviceEvent>>>);

impl EventLog {
    fn push(&self, event: DeviceEvent) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<DeviceEvent> {
        self.0.borrow().clone()
    }

    pub fn count(&self, event: DeviceEvent) -> usize {
        self.0.borrow().iter().filter(|e| **e == event).count()
    }
}

pub struct FakeDevice {
    pub log: EventLog,
    pub width: u32,
    pub height: u32,
    pub unavailable: bool,
    /// Shared so tests can flip it while a source is open
    pub fail_reads: Rc<RefCell<bool>>,
}

impl FakeDevice {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            log: EventLog::default(),
            width,
            height,
            unavailable: false,
            fail_reads: Rc::new(RefCell::new(false)),
        }
    }

    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }
}

impl CaptureDevice for FakeDevice {
    type Source = FakeSource;

    fn open(&mut self) -> Result<FakeSource> {
        if self.unavailable {
            bail!("no camera at index 0");
        }
        self.log.push(DeviceEvent::Opened);
        Ok(FakeSource {
            log: self.log.clone(),
            width: self.width,
            height: self.height,
            fail_reads: Rc::clone(&self.fail_reads),
            frames_read: 0,
        })
    }
}

pub struct FakeSource {
    log: EventLog,
    width: u32,
    height: u32,
    fail_reads: Rc<RefCell<bool>>,
    frames_read: u8,
}

impl CaptureSource for FakeSource {
    fn capture_frame(&mut self) -> Result<RgbImage> {
        if *self.fail_reads.borrow() {
            bail!("device returned no frame");
        }
        self.log.push(DeviceEvent::Read);
        self.frames_read = self.frames_read.wrapping_add(1);
        // Never black, so frames are distinguishable from the placeholder
        let shade = self.frames_read.max(1);
        Ok(RgbImage::from_pixel(
            self.width,
            self.height,
            Rgb([shade, 128, 255]),
        ))
    }

    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Drop for FakeSource {
    fn drop(&mut self) {
        self.log.push(DeviceEvent::Released);
    }
}
