//! Bounce simulation for the control points.
//!
//! Each step moves every point by its velocity and then flips the velocity
//! component whose coordinate ended up outside the [`Bounds`]. The test is
//! on the moved position, so a point can sit one frame past the edge before
//! it turns around.

use crate::{config::Bounds, points::ControlPoints};
use glam::Vec2;

/// Advances `positions[i]` by `velocities[i]` and reflects on the bounds.
///
/// ### Panics
/// Panics if the two slices have different lengths.
pub fn step(positions: &mut [Vec2], velocities: &mut [Vec2], bounds: &Bounds) {
    assert_eq!(positions.len(), velocities.len());
    for (pos, vel) in positions.iter_mut().zip(velocities.iter_mut()) {
        *pos += *vel;
        if bounds.outside_x(pos.x) {
            vel.x = -vel.x;
        }
        if bounds.outside_y(pos.y) {
            vel.y = -vel.y;
        }
    }
}

/// Runs [`step`] over a [`ControlPoints`] set.
pub fn step_points(points: &mut ControlPoints, bounds: &Bounds) {
    let (positions, velocities) = points.split_mut();
    step(positions, velocities, bounds);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(100.0, 50.0)
    }

    #[test]
    fn moves_by_velocity_inside_bounds() {
        let mut pos = [Vec2::new(10.0, 10.0)];
        let mut vel = [Vec2::new(1.5, 0.5)];

        step(&mut pos, &mut vel, &bounds());

        assert_eq!(pos[0], Vec2::new(11.5, 10.5));
        assert_eq!(vel[0], Vec2::new(1.5, 0.5));
    }

    #[test]
    fn crossing_right_edge_flips_only_x() {
        let mut pos = [Vec2::new(99.5, 20.0)];
        let mut vel = [Vec2::new(1.0, 0.0)];

        step(&mut pos, &mut vel, &bounds());

        // The point is allowed one frame outside before it turns around.
        assert_eq!(pos[0], Vec2::new(100.5, 20.0));
        assert_eq!(vel[0], Vec2::new(-1.0, 0.0));

        step(&mut pos, &mut vel, &bounds());
        assert_eq!(pos[0], Vec2::new(99.5, 20.0));
        assert_eq!(vel[0], Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn crossing_top_and_left_edges_flips_both() {
        let mut pos = [Vec2::new(0.5, 0.5)];
        let mut vel = [Vec2::new(-1.0, -1.0)];

        step(&mut pos, &mut vel, &bounds());

        assert_eq!(pos[0], Vec2::new(-0.5, -0.5));
        assert_eq!(vel[0], Vec2::new(1.0, 1.0));
    }

    #[test]
    fn sitting_on_the_edge_does_not_bounce() {
        let mut pos = [Vec2::new(99.0, 49.0)];
        let mut vel = [Vec2::new(1.0, 1.0)];

        step(&mut pos, &mut vel, &bounds());

        assert_eq!(pos[0], Vec2::new(100.0, 50.0));
        assert_eq!(vel[0], Vec2::new(1.0, 1.0));
    }

    #[test]
    fn step_points_updates_every_point() {
        let mut points = ControlPoints::new();
        points.push(Vec2::new(1.0, 1.0), Vec2::new(1.0, 0.0));
        points.push(Vec2::new(5.0, 5.0), Vec2::new(0.0, 2.0));

        step_points(&mut points, &bounds());

        assert_eq!(points.positions(), &[Vec2::new(2.0, 1.0), Vec2::new(5.0, 7.0)]);
    }

    #[test]
    #[should_panic]
    fn step_panics_on_mismatched_lengths() {
        let mut pos = [Vec2::ZERO; 2];
        let mut vel = [Vec2::ZERO; 1];
        step(&mut pos, &mut vel, &bounds());
    }
}
