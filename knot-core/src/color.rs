/// Plain 8-bit RGB colour handed to a [`crate::render::Surface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const GRAY: Rgb = Rgb(128, 128, 128);
    pub const RED: Rgb = Rgb(255, 0, 0);

    /// Fully saturated, mid-lightness colour for `hue` degrees
    /// (HSL `hue, 100%, 50%`). Hues wrap modulo 360.
    pub fn from_hue(hue: u16) -> Self {
        let h = f32::from(hue % 360) / 60.0;
        // Secondary component ramps up and down inside each 60 degree sector.
        let x = 1.0 - ((h % 2.0) - 1.0).abs();
        let (r, g, b) = match h as u8 {
            0 => (1.0, x, 0.0),
            1 => (x, 1.0, 0.0),
            2 => (0.0, 1.0, x),
            3 => (0.0, x, 1.0),
            4 => (x, 0.0, 1.0),
            _ => (1.0, 0.0, x),
        };
        let to_byte = |c: f32| (c * 255.0).round() as u8;
        Rgb(to_byte(r), to_byte(g), to_byte(b))
    }
}

/// Endless hue generator driving the curve colour.
///
/// Every call to [`HueCycle::next_hue`] advances an internal counter and
/// returns it modulo 360, so the first hue is `1`.
#[derive(Debug, Default)]
pub struct HueCycle {
    counter: u64,
}

impl HueCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_hue(&mut self) -> u16 {
        self.counter = self.counter.wrapping_add(1);
        (self.counter % 360) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_starts_at_one_and_wraps() {
        let mut cycle = HueCycle::new();
        assert_eq!(cycle.next_hue(), 1);
        assert_eq!(cycle.next_hue(), 2);

        for _ in 2..359 {
            cycle.next_hue();
        }
        assert_eq!(cycle.next_hue(), 0);
        assert_eq!(cycle.next_hue(), 1);
    }

    #[test]
    fn hue_stays_below_360() {
        let mut cycle = HueCycle::new();
        assert!((0..2000).all(|_| cycle.next_hue() < 360));
    }

    #[test]
    fn primary_and_secondary_hues() {
        assert_eq!(Rgb::from_hue(0), Rgb(255, 0, 0));
        assert_eq!(Rgb::from_hue(60), Rgb(255, 255, 0));
        assert_eq!(Rgb::from_hue(120), Rgb(0, 255, 0));
        assert_eq!(Rgb::from_hue(180), Rgb(0, 255, 255));
        assert_eq!(Rgb::from_hue(240), Rgb(0, 0, 255));
        assert_eq!(Rgb::from_hue(300), Rgb(255, 0, 255));
        assert_eq!(Rgb::from_hue(360), Rgb::from_hue(0));
    }

    #[test]
    fn intermediate_hue_blends_neighbours() {
        // Halfway between red and yellow.
        assert_eq!(Rgb::from_hue(30), Rgb(255, 128, 0));
    }
}
