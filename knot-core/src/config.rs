use crate::steps::StepCount;

/// Reflecting rectangle the control points bounce around in.
///
/// Spans `[0, width] x [0, height]` in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn outside_x(&self, x: f32) -> bool {
        x > self.width || x < 0.0
    }

    #[inline]
    pub fn outside_y(&self, y: f32) -> bool {
        y > self.height || y < 0.0
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(820.0, 640.0)
    }
}

/// Session configuration, fixed once the scene is built.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub bounds: Bounds,
    pub steps: StepCount,
    /// Upper (exclusive) limit of each randomly sampled velocity component.
    pub max_speed: f32,
    pub marker_radius: f32,
    pub line_width: f32,
    pub start_paused: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            steps: StepCount::DEFAULT,
            max_speed: 2.0,
            marker_radius: 3.0,
            line_width: 3.0,
            start_paused: true,
        }
    }
}
