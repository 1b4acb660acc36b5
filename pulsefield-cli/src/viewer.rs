//! Interactive viewer for the pulsefield simulation.
//!
//! Hosts the world in an egui repaint loop: one simulation step per painted
//! frame while playing, pointer position fed from the hover state, and a
//! full world rebuild whenever the canvas size changes.

use eframe::egui;
use pulsefield_core::{SimConfig, Visual, World};
use rand::rngs::ThreadRng;

/// How far the canvas size may drift (in points) before the world is
/// rebuilt. Absorbs sub-pixel jitter from DPI rounding.
const RESIZE_TOLERANCE: f32 = 0.5;

pub struct ViewerApp {
    world: World,
    rng: ThreadRng,
    playing: bool,
    last_error: Option<String>,
}

impl ViewerApp {
    pub fn new(config: SimConfig, _cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            world: World::new(config),
            rng: rand::thread_rng(),
            playing: true,
            last_error: None,
        }
    }

    /// Rebuild the world when the drawable area changes size. Also performs
    /// the initial population on the first painted frame, when the world
    /// still has zero bounds.
    fn sync_surface(&mut self, rect: egui::Rect) {
        let resized = (rect.width() - self.world.width).abs() > RESIZE_TOLERANCE
            || (rect.height() - self.world.height).abs() > RESIZE_TOLERANCE;
        if resized {
            self.rebuild(rect.width(), rect.height());
        }
    }

    fn rebuild(&mut self, width: f32, height: f32) {
        match self.world.reinitialize(width, height, &mut self.rng) {
            Ok(()) => {
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                self.playing = false;
            }
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }

                if ui.button("⏮ Reset").clicked() {
                    let (w, h) = (self.world.width, self.world.height);
                    if w > 0.0 && h > 0.0 {
                        self.rebuild(w, h);
                    }
                }

                if ui.button("⏭ Step").clicked() {
                    self.world.step();
                }

                ui.separator();
                ui.label(format!("Particles: {}", self.world.particles().len()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            self.sync_surface(rect);

            // World coordinates are canvas-relative, so the pointer position
            // is translated by the canvas origin before it reaches the core.
            if let Some(hover) = ctx.input(|i| i.pointer.hover_pos()) {
                if rect.contains(hover) {
                    let local = hover - rect.min;
                    self.world.set_pointer(local.x, local.y);
                }
            }

            if self.playing {
                self.world.step();
            }

            let painter = ui.painter();
            for particle in self.world.particles() {
                let center = rect.min + egui::vec2(particle.pos.x, particle.pos.y);
                match particle.visual {
                    Visual::Color([r, g, b]) => {
                        painter.circle_filled(
                            center,
                            particle.radius,
                            egui::Color32::from_rgb(r, g, b),
                        );
                    }
                    Visual::Image(_) => {
                        // The viewer has no texture table yet; image-backed
                        // particles render as an outline placeholder.
                        painter.circle_stroke(
                            center,
                            particle.radius,
                            egui::Stroke::new(1.0, egui::Color32::GRAY),
                        );
                    }
                }
            }

            if let Some(ref error) = self.last_error {
                ui.vertical_centered(|ui| {
                    ui.add_space(rect.height() * 0.4);
                    ui.label(
                        egui::RichText::new(format!("Error: {}", error))
                            .color(egui::Color32::RED)
                            .size(16.0),
                    );
                });
            }
        });

        // Keep frames coming while the simulation is live; pausing stops the
        // repaint requests and with them the stepping.
        if self.playing {
            ctx.request_repaint();
        }
    }
}
