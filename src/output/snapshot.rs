use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const FILE_PREFIX: &str = "captured_image_";
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// File name for a capture taken at `at`, to the second
pub fn file_name_for(at: &NaiveDateTime) -> String {
    format!("{}{}.jpg", FILE_PREFIX, at.format(TIMESTAMP_FORMAT))
}

/// Writes captured frames as JPEG files into one output directory.
///
/// Names only carry second resolution, so a second capture within the same
/// second replaces the first.
pub struct SnapshotWriter {
    dir: PathBuf,
    quality: u8,
}

impl SnapshotWriter {
    pub fn new<P: Into<PathBuf>>(dir: P, quality: u8) -> Self {
        Self {
            dir: dir.into(),
            quality: quality.clamp(1, 100),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the output directory if it is missing
    pub fn ensure_dir(&self) -> Result<()> {
        if !self.dir.is_dir() {
            tracing::info!("Creating output directory {}", self.dir.display());
        }
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))
    }

    /// Encode `frame` and write it under the name for `at`. Returns the written path.
    pub fn save(&self, frame: &RgbImage, at: &NaiveDateTime) -> Result<PathBuf> {
        let _span = tracing::debug_span!("save_snapshot").entered();

        let path = self.dir.join(file_name_for(at));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        let encoder = JpegEncoder::new_with_quality(&mut writer, self.quality);
        frame
            .write_with_encoder(encoder)
            .with_context(|| format!("Failed to encode {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!(
            "Saved {}x{} frame to {}",
            frame.width(),
            frame.height(),
            path.display()
        );

        Ok(path)
    }
}
