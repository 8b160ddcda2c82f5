//! Per-frame orchestration of the bouncing-knot session.
//!
//! A frame runs, in order:
//! 1. apply the pending [`Command`]s,
//! 2. clear the surface,
//! 3. advance the [`HueCycle`] for the curve colour,
//! 4. draw the control points,
//! 5. rebuild the curve and draw it as a closed loop,
//! 6. draw the help overlay if it is visible,
//! 7. present,
//! 8. move the points unless paused.
//!
//! Once a quit command has been handled the current frame still renders;
//! every later call to [`Scene::frame`] does nothing.

use crate::{
    color::{HueCycle, Rgb},
    config::Config,
    curve::Knot,
    motion,
    points::{ControlPoints, VelocitySource},
    render::{Font, Surface},
};
use glam::Vec2;

/// Discrete user input understood by the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Restart,
    TogglePause,
    ToggleHelp,
    IncreaseSteps,
    DecreaseSteps,
    /// Place a control point at canvas pixel `(x, y)`.
    AddPoint { x: i32, y: i32 },
}

/// Command names and their key bindings, in overlay order.
pub const KEY_BINDINGS: [(&str, &str); 6] = [
    ("Show Help", "F1"),
    ("Restart", "R"),
    ("Pause/Play", "P"),
    ("More points", "Num+"),
    ("Less points", "Num-"),
    ("Quit", "Esc"),
];

const HELP_ORIGIN: Vec2 = Vec2::new(100.0, 100.0);
const HELP_COMMAND_X: f32 = 200.0;
const HELP_ROW_HEIGHT: f32 = 30.0;
const HELP_FONT_SIZE: f32 = 24.0;
const HELP_BORDER_WIDTH: f32 = 5.0;
const HELP_TEXT: Rgb = Rgb(128, 128, 255);

/// Top-level session state.
#[derive(Debug)]
pub struct Scene {
    cfg: Config,
    points: ControlPoints,
    knot: Knot,
    hue: HueCycle,
    curve_color: Rgb,
    velocities: VelocitySource,

    working: bool,
    paused: bool,
    show_help: bool,
    frames: u64,
}

impl Scene {
    pub fn new(cfg: Config, velocities: VelocitySource) -> Self {
        Self {
            cfg,
            points: ControlPoints::new(),
            knot: Knot::new(cfg.steps),
            hue: HueCycle::new(),
            curve_color: Rgb::WHITE,
            velocities,
            working: true,
            paused: cfg.start_paused,
            show_help: false,
            frames: 0,
        }
    }

    /// Updates session state for one input command.
    ///
    /// Commands arriving after a quit are ignored.
    pub fn apply(&mut self, cmd: Command) {
        if !self.working {
            return;
        }
        match cmd {
            Command::Quit => {
                log::info!("quit requested after {} frames", self.frames);
                self.working = false;
            }
            Command::Restart => self.restart(),
            Command::TogglePause => {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "paused" } else { "running" });
            }
            Command::ToggleHelp => {
                self.show_help = !self.show_help;
                log::debug!("help overlay visible = {}", self.show_help);
            }
            Command::IncreaseSteps => {
                self.knot.increase_steps();
                log::info!("steps = {}", self.knot.steps().get());
            }
            Command::DecreaseSteps => {
                if self.knot.decrease_steps() {
                    log::info!("steps = {}", self.knot.steps().get());
                } else {
                    log::debug!("steps already at minimum");
                }
            }
            Command::AddPoint { x, y } => self.add_point(Vec2::new(x as f32, y as f32)),
        }
    }

    /// Appends a control point with a fresh velocity from the source.
    pub fn add_point(&mut self, pos: Vec2) {
        let velocity = self.velocities.next_velocity();
        self.points.push(pos, velocity);
        log::debug!(
            "point #{} at {pos} with velocity {velocity}",
            self.points.len()
        );
    }

    /// Drops every control point, velocity and curve vertex.
    pub fn restart(&mut self) {
        self.points.clear();
        self.knot.clear();
        log::info!("restart");
    }

    /// Runs one frame and returns whether the session is still working.
    pub fn frame<S: Surface>(
        &mut self,
        commands: impl IntoIterator<Item = Command>,
        surface: &mut S,
    ) -> bool {
        if !self.working {
            return false;
        }

        for cmd in commands {
            self.apply(cmd);
        }

        surface.clear(Rgb::BLACK);

        self.curve_color = Rgb::from_hue(self.hue.next_hue());

        self.draw_points(surface);
        self.knot.recompute(self.points.positions());
        self.draw_curve(surface);

        if self.show_help {
            self.draw_help(surface);
        }

        surface.present();
        self.frames += 1;

        if !self.paused {
            motion::step_points(&mut self.points, &self.cfg.bounds);
        }

        self.working
    }

    fn draw_points<S: Surface>(&self, surface: &mut S) {
        for &p in self.points.positions() {
            surface.circle_filled(p, self.cfg.marker_radius, Rgb::WHITE);
        }
    }

    fn draw_curve<S: Surface>(&self, surface: &mut S) {
        for (a, b) in self.knot.polyline().closed_segments() {
            surface.line_segment(a, b, self.cfg.line_width, self.curve_color);
        }
    }

    /// Overlay rows as `(command, key)` pairs, followed by the live counters.
    pub fn help_entries(&self) -> Vec<(String, String)> {
        KEY_BINDINGS
            .iter()
            .map(|&(command, key)| (command.to_owned(), key.to_owned()))
            .chain([
                (
                    "Current steps".to_owned(),
                    self.knot.steps().get().to_string(),
                ),
                ("Current points".to_owned(), self.points.len().to_string()),
            ])
            .collect()
    }

    fn draw_help<S: Surface>(&self, surface: &mut S) {
        let bounds = self.cfg.bounds;
        surface.clear(Rgb::GRAY);
        surface.rect_stroke(
            Vec2::ZERO,
            Vec2::new(bounds.width, bounds.height),
            HELP_BORDER_WIDTH,
            Rgb::RED,
        );

        for (i, (command, key)) in self.help_entries().iter().enumerate() {
            let y = HELP_ORIGIN.y + HELP_ROW_HEIGHT * i as f32;
            surface.text(
                Vec2::new(HELP_ORIGIN.x, y),
                key,
                Font::Monospace,
                HELP_FONT_SIZE,
                HELP_TEXT,
            );
            surface.text(
                Vec2::new(HELP_COMMAND_X, y),
                command,
                Font::Proportional,
                HELP_FONT_SIZE,
                HELP_TEXT,
            );
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn points(&self) -> &ControlPoints {
        &self.points
    }

    pub fn knot(&self) -> &Knot {
        &self.knot
    }

    pub fn curve_color(&self) -> Rgb {
        self.curve_color
    }

    pub fn is_working(&self) -> bool {
        self.working
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn help_visible(&self) -> bool {
        self.show_help
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
