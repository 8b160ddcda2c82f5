//! Closed smooth curve through a cyclic set of control points.
//!
//! The control points are walked as overlapping triples `(a, b, c)`, wrapping
//! around the end of the list. Each triple becomes a short local section
//! with sub-points `[mid(a, b), b, mid(b, c)]`, sampled with [`blend`] at
//! `steps` evenly spaced parameters in `[0, 1)`. A section ends where the
//! next one starts (`mid(b, c)`), so concatenating the sections gives one
//! continuous closed loop.

use crate::{polyline::Polyline, steps::StepCount, vector::midpoint};
use glam::Vec2;

/// Fewest control points that produce a curve.
pub const MIN_CONTROL_POINTS: usize = 3;

/// Recursive linear blend of `points[..=degree]` at parameter `alpha`.
///
/// `blend(p, a, 0) = p[0]` and
/// `blend(p, a, d) = p[d] * a + blend(p, a, d - 1) * (1 - a)`.
///
/// ### Panics
/// Panics if `degree >= points.len()`.
pub fn blend(points: &[Vec2], alpha: f32, degree: usize) -> Vec2 {
    if degree == 0 {
        return points[0];
    }
    points[degree] * alpha + blend(points, alpha, degree - 1) * (1.0 - alpha)
}

/// Local sub-points of the section built around `b`.
#[inline]
pub fn section_points(a: Vec2, b: Vec2, c: Vec2) -> [Vec2; 3] {
    [midpoint(a, b), b, midpoint(b, c)]
}

/// Samples one section at `alpha = i / steps` for `i` in `0..steps`.
pub fn sample_section(sub_points: &[Vec2], steps: StepCount) -> impl Iterator<Item = Vec2> + '_ {
    let n = steps.get();
    let degree = sub_points.len() - 1;
    (0..n).map(move |i| blend(sub_points, i as f32 / n as f32, degree))
}

/// Writes the closed curve through `points` into `out`, replacing its
/// contents.
///
/// With fewer than [`MIN_CONTROL_POINTS`] points `out` is left empty.
/// Otherwise it holds exactly `steps * points.len()` vertices, starting at
/// `mid(points[0], points[1])`.
pub fn generate_into(points: &[Vec2], steps: StepCount, out: &mut Polyline) {
    out.clear();
    let n = points.len();
    if n < MIN_CONTROL_POINTS {
        return;
    }

    for i in 0..n {
        let sub = section_points(points[i], points[(i + 1) % n], points[(i + 2) % n]);
        for vertex in sample_section(&sub, steps) {
            out.push(vertex);
        }
    }
}

/// Convenience wrapper around [`generate_into`].
pub fn generate(points: &[Vec2], steps: StepCount) -> Polyline {
    let mut out = Polyline::with_capacity(points.len() * steps.get() as usize);
    generate_into(points, steps, &mut out);
    out
}

/// The rendered curve: its smoothness setting and the most recently
/// generated vertices.
#[derive(Debug, Default)]
pub struct Knot {
    steps: StepCount,
    polyline: Polyline,
}

impl Knot {
    pub fn new(steps: StepCount) -> Self {
        Self {
            steps,
            polyline: Polyline::new(),
        }
    }

    pub fn steps(&self) -> StepCount {
        self.steps
    }

    pub fn increase_steps(&mut self) {
        self.steps.increase();
    }

    /// Returns `false` when the count is already at its minimum.
    pub fn decrease_steps(&mut self) -> bool {
        self.steps.decrease()
    }

    /// Rebuilds the vertices from the current control-point positions.
    pub fn recompute(&mut self, points: &[Vec2]) -> &Polyline {
        generate_into(points, self.steps, &mut self.polyline);
        &self.polyline
    }

    pub fn polyline(&self) -> &Polyline {
        &self.polyline
    }

    pub fn clear(&mut self) {
        self.polyline.clear();
    }
}
