use glam::Vec2;

/// 2-D point / vector used throughout the crate.
///
/// Addition, subtraction, scaling, in-place translation and magnitude come
/// straight from [`glam::Vec2`]: `a + b`, `a - b`, `v * k`, `v += d` and
/// `v.length()`.
pub type Vector2 = Vec2;

/// Point halfway between `a` and `b`.
#[inline]
pub fn midpoint(a: Vector2, b: Vector2) -> Vector2 {
    (a + b) * 0.5
}
