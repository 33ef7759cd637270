use image::{Rgb, RgbImage};

/// Color of the blank image shown while no live frame is available
pub const PLACEHOLDER_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// The image currently shown in the video view
pub struct Display {
    image: RgbImage,
    width: u32,
    height: u32,
    live: bool,
    generation: u64,
}

impl Display {
    /// Create a display showing the placeholder at the expected frame size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: Self::placeholder(width, height),
            width,
            height,
            live: false,
            generation: 0,
        }
    }

    fn placeholder(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, PLACEHOLDER_COLOR)
    }

    /// Show a live frame, or the placeholder when there is none
    pub fn show(&mut self, frame: Option<RgbImage>) {
        match frame {
            Some(frame) => {
                self.image = frame;
                self.live = true;
            }
            None => {
                // Skip the reallocation when the placeholder is already up
                if !self.live && self.generation > 0 {
                    return;
                }
                self.image = Self::placeholder(self.width, self.height);
                self.live = false;
            }
        }
        self.generation += 1;
    }

    pub fn clear(&mut self) {
        self.show(None);
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn is_placeholder(&self) -> bool {
        !self.live
    }

    /// Bumped on every change; lets the view skip re-uploading an unchanged image
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
