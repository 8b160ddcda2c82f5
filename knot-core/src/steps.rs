/// Number of vertices sampled per control-point section of the curve.
///
/// Always at least 1. Updates that would drop it below 1 are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepCount(u32);

impl StepCount {
    pub const DEFAULT: StepCount = StepCount(15);

    /// Returns `None` for `0`.
    pub fn new(value: u32) -> Option<Self> {
        (value >= 1).then_some(Self(value))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Sets the count, returning `false` (and leaving it unchanged) when
    /// `value` is below 1.
    pub fn set(&mut self, value: u32) -> bool {
        match Self::new(value) {
            Some(v) => {
                *self = v;
                true
            }
            None => false,
        }
    }

    pub fn increase(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Decrements by one unless already at 1. Returns whether it changed.
    pub fn decrease(&mut self) -> bool {
        self.set(self.0 - 1)
    }
}

impl Default for StepCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}
