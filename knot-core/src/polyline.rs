use glam::Vec2;

/// Ordered vertex sequence ready to be drawn as connected line segments.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Polyline {
    vertices: Vec<Vec2>,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn push(&mut self, vertex: Vec2) {
        self.vertices.push(vertex);
    }

    /// Segments of the closed loop through all vertices.
    ///
    /// Yields `(v[n-1], v[0])` first, then `(v[i-1], v[i])` for the rest,
    /// so every vertex is joined to its predecessor and the last one wraps
    /// back to the first.
    pub fn closed_segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[(i + n - 1) % n], self.vertices[i]))
    }
}

impl From<Vec<Vec2>> for Polyline {
    fn from(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }
}
