use crate::capture::CaptureDevice;
use crate::controller::{CaptureController, Toggled};
use crate::error::CaptureError;
use crate::folder;
use egui::{Align2, ColorImage, TextureHandle, TextureOptions};
use image::RgbImage;
use std::time::{Duration, Instant};

/// Message shown in a small dialog until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
struct Notice {
    title: String,
    body: String,
    is_error: bool,
}

impl Notice {
    fn info(title: &str, body: impl Into<String>) -> Self {
        Self {
            title: title.to_owned(),
            body: body.into(),
            is_error: false,
        }
    }
}

impl From<CaptureError> for Notice {
    fn from(err: CaptureError) -> Self {
        Self {
            title: err.title().to_owned(),
            body: err.to_string(),
            is_error: true,
        }
    }
}

enum Action {
    Toggle,
    Capture,
    OpenFolder,
}

pub struct WebcamApp<D: CaptureDevice> {
    controller: CaptureController<D>,
    refresh_interval: Duration,
    last_refresh: Option<Instant>,
    texture: Option<TextureHandle>,
    texture_generation: Option<u64>,
    notice: Option<Notice>,
}

impl<D: CaptureDevice> WebcamApp<D> {
    pub fn new(controller: CaptureController<D>, refresh_interval: Duration) -> Self {
        Self {
            controller,
            refresh_interval,
            last_refresh: None,
            texture: None,
            texture_generation: None,
            notice: None,
        }
    }

    fn handle(&mut self, action: Action) {
        let notice = match action {
            Action::Toggle => match self.controller.toggle() {
                Ok(Toggled::Started) => {
                    self.last_refresh = None;
                    Some(Notice::info("Webcam Started", "Webcam is now running."))
                }
                Ok(Toggled::Stopped) => None,
                Err(e) => Some(e.into()),
            },
            Action::Capture => match self.controller.capture_image() {
                Ok(path) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    Some(Notice::info(
                        "Image Saved",
                        format!("Your image is saved as '{}'", name),
                    ))
                }
                Err(e) => Some(e.into()),
            },
            Action::OpenFolder => folder::open_folder(self.controller.snapshots().dir())
                .err()
                .map(Notice::from),
        };

        if let Some(notice) = notice {
            if notice.is_error {
                tracing::warn!("{}: {}", notice.title, notice.body);
            }
            self.notice = Some(notice);
        }
    }

    /// Run the periodic read when it is due and schedule the next one
    fn refresh(&mut self, ctx: &egui::Context) {
        if !self.controller.is_running() {
            return;
        }

        let due = self
            .last_refresh
            .map_or(true, |last| last.elapsed() >= self.refresh_interval);
        if due {
            self.controller.tick();
            self.last_refresh = Some(Instant::now());
        }
        ctx.request_repaint_after(self.refresh_interval);
    }

    fn sync_texture(&mut self, ctx: &egui::Context) {
        let display = self.controller.display();
        if self.texture.is_some() && self.texture_generation == Some(display.generation()) {
            return;
        }

        let image = to_color_image(display.image());
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::LINEAR),
            None => self.texture = Some(ctx.load_texture("video", image, TextureOptions::LINEAR)),
        }
        self.texture_generation = Some(display.generation());
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(notice.title.as_str())
            .id(egui::Id::new("notice"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                if notice.is_error {
                    let color = ui.visuals().error_fg_color;
                    ui.colored_label(color, notice.body.as_str());
                } else {
                    ui.label(notice.body.as_str());
                }
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.notice = None;
        }
    }
}

impl<D: CaptureDevice> eframe::App for WebcamApp<D> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.refresh(ctx);
        self.sync_texture(ctx);

        let running = self.controller.is_running();
        let mut action = None;

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                if ui.button(if running { "Stop" } else { "Start" }).clicked() {
                    action = Some(Action::Toggle);
                }
                if ui.button("Open Folder").clicked() {
                    action = Some(Action::OpenFolder);
                }
                if ui.button("Capture Image").clicked() {
                    action = Some(Action::Capture);
                }
            });
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(texture) = &self.texture {
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Image::new(texture).shrink_to_fit());
                });
            }
        });

        self.show_notice(ctx);

        if let Some(action) = action {
            self.handle(action);
            ctx.request_repaint();
        }
    }
}

fn to_color_image(frame: &RgbImage) -> ColorImage {
    ColorImage::from_rgb(
        [frame.width() as usize, frame.height() as usize],
        frame.as_raw(),
    )
}
