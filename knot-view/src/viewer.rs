//! eframe application hosting the bouncing-knot [`Scene`].
//!
//! Every egui frame the viewer gathers input as scene commands, lets the
//! scene draw itself through a [`PainterSurface`], and closes the window
//! once the scene stops working.

use crate::{canvas::PainterSurface, input, profile::FrameProfiler};
use eframe::App;
use knot_core::scene::Scene;
use std::time::Instant;

pub struct Viewer {
    scene: Scene,
    profiler: Option<FrameProfiler>,
    closing: bool,
}

impl Viewer {
    pub fn new(scene: Scene, profiler: Option<FrameProfiler>) -> Self {
        Self {
            scene,
            profiler,
            closing: false,
        }
    }

    /// Runs one scene frame on a borderless canvas filling the window.
    fn ui_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                let commands = input::collect_commands(ctx, rect.min);
                let mut surface = PainterSurface::new(&painter, rect.min);

                let started = Instant::now();
                let working = self.scene.frame(commands, &mut surface);
                if working && let Some(profiler) = &mut self.profiler {
                    profiler.record(started.elapsed());
                }

                if !working {
                    self.shut_down(ctx);
                }
            });
    }

    fn shut_down(&mut self, ctx: &egui::Context) {
        if self.closing {
            return;
        }
        self.closing = true;
        log::info!("session ended after {} frames", self.scene.frames());
        if let Some(profiler) = &self.profiler {
            profiler.report();
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

impl App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_canvas(ctx);
    }
}
