use glam::Vec2;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// User-placed control points and their velocities.
///
/// `positions[i]` moves with `velocities[i]`; both sequences always have
/// the same length.
#[derive(Debug, Default)]
pub struct ControlPoints {
    positions: Vec<Vec2>,
    velocities: Vec<Vec2>,
}

impl ControlPoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point together with its velocity.
    pub fn push(&mut self, pos: Vec2, velocity: Vec2) {
        self.positions.push(pos);
        self.velocities.push(velocity);
    }

    /// Removes the point at `index` and returns its `(position, velocity)`.
    pub fn remove(&mut self, index: usize) -> Option<(Vec2, Vec2)> {
        if index >= self.positions.len() {
            return None;
        }
        Some((self.positions.remove(index), self.velocities.remove(index)))
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.velocities.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec2] {
        &self.velocities
    }

    /// Mutable views of both sequences at once, for the motion step.
    pub fn split_mut(&mut self) -> (&mut [Vec2], &mut [Vec2]) {
        (&mut self.positions, &mut self.velocities)
    }
}

/// Produces the initial velocity for every newly placed control point.
#[derive(Debug)]
pub enum VelocitySource {
    /// Each component sampled uniformly from `[0, max_speed)`.
    Random { rng: StdRng, max_speed: f32 },
    /// Always the same velocity.
    Fixed(Vec2),
}

impl VelocitySource {
    /// Random source seeded from the operating system.
    pub fn random(max_speed: f32) -> Self {
        Self::Random {
            rng: StdRng::from_os_rng(),
            max_speed,
        }
    }

    /// Random source with a reproducible sequence.
    pub fn seeded(seed: u64, max_speed: f32) -> Self {
        Self::Random {
            rng: StdRng::seed_from_u64(seed),
            max_speed,
        }
    }

    pub fn fixed(velocity: Vec2) -> Self {
        Self::Fixed(velocity)
    }

    pub fn next_velocity(&mut self) -> Vec2 {
        match self {
            Self::Random { rng, max_speed } => random_velocity(rng, *max_speed),
            Self::Fixed(v) => *v,
        }
    }
}

fn random_velocity(rng: &mut impl Rng, max_speed: f32) -> Vec2 {
    if max_speed <= 0.0 {
        return Vec2::ZERO;
    }
    let x = rng.random_range(0.0..max_speed);
    let y = rng.random_range(0.0..max_speed);
    Vec2::new(x, y)
}
