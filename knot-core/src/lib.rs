//! Bouncing control points and the closed smooth curve drawn through them.
//!
//! Main components:
//! - [`vector`] — 2-D vector alias and helpers.
//! - [`config`] — simulation bounds and session settings.
//! - [`steps`] — the curve smoothness setting.
//! - [`points`] — control points, their velocities and the velocity source.
//! - [`motion`] — per-frame movement with edge reflection.
//! - [`polyline`] — drawable vertex sequences.
//! - [`curve`] — closed-curve generation from control points.
//! - [`color`] — hue cycling and RGB colours.
//! - [`render`] — the drawing surface trait.
//! - [`scene`] — per-frame orchestration of all of the above.

pub mod color;
pub mod config;
pub mod curve;
pub mod motion;
pub mod points;
pub mod polyline;
pub mod render;
pub mod scene;
pub mod steps;
pub mod vector;
