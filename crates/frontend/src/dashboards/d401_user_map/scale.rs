//! Choropleth color scale

pub const NO_DATA: &str = "#F3F4F6";
pub const LOW: &str = "#E0F2FE";
pub const MID: &str = "#0EA5E9";
pub const HIGH: &str = "#0369A1";
pub const HOVER: &str = "#FBBF24";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#RRGGBB` or `RRGGBB`
    pub fn parse_hex(hex: &str) -> Option<Rgb> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// Per-channel linear blend, `t` clamped to `[0, 1]`
    pub fn lerp(&self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }
}

/// Min/max of the positive counts in one dataset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorScale {
    pub min: i64,
    pub max: i64,
}

impl ColorScale {
    /// Scale over the positive values; negatives count as zero
    pub fn from_counts(counts: impl IntoIterator<Item = i64>) -> Self {
        let mut bounds: Option<(i64, i64)> = None;
        for c in counts.into_iter().filter(|c| *c > 0) {
            bounds = Some(match bounds {
                None => (c, c),
                Some((lo, hi)) => (lo.min(c), hi.max(c)),
            });
        }
        let (min, max) = bounds.unwrap_or((0, 0));
        Self { min, max }
    }

    /// No positive count in the dataset
    pub fn is_empty(&self) -> bool {
        self.max <= 0
    }

    pub fn color_for(&self, count: i64) -> String {
        if count <= 0 {
            return NO_DATA.to_string();
        }
        if self.max == self.min {
            return MID.to_string();
        }
        let n = (count - self.min) as f64 / (self.max - self.min) as f64;
        let (Some(low), Some(mid), Some(high)) =
            (Rgb::parse_hex(LOW), Rgb::parse_hex(MID), Rgb::parse_hex(HIGH))
        else {
            return MID.to_string();
        };
        if n < 0.5 {
            low.lerp(mid, n * 2.0).to_hex()
        } else {
            mid.lerp(high, (n - 0.5) * 2.0).to_hex()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(Rgb::parse_hex("#0EA5E9"), Some(Rgb(0x0E, 0xA5, 0xE9)));
        assert_eq!(Rgb::parse_hex("e0f2fe"), Some(Rgb(0xE0, 0xF2, 0xFE)));
        assert_eq!(Rgb::parse_hex("#FFF"), None);
        assert_eq!(Rgb::parse_hex("#GG0000"), None);
        assert_eq!(Rgb(3, 105, 161).to_hex(), HIGH);
    }

    #[test]
    fn three_region_dataset() {
        let scale = ColorScale::from_counts([0, 5, 15]);
        assert_eq!(scale, ColorScale { min: 5, max: 15 });
        assert_eq!(scale.color_for(0), NO_DATA);
        assert_eq!(scale.color_for(5), LOW);
        assert_eq!(scale.color_for(15), HIGH);
        assert_eq!(scale.color_for(10), MID);
    }

    #[test]
    fn empty_dataset_is_all_no_data() {
        let scale = ColorScale::from_counts(Vec::<i64>::new());
        assert!(scale.is_empty());
        assert_eq!(scale.color_for(0), NO_DATA);
    }

    #[test]
    fn single_region_and_equal_counts_render_mid() {
        let scale = ColorScale::from_counts([0, 7, 0]);
        assert_eq!(scale.color_for(7), MID);
        let flat = ColorScale::from_counts([4, 4, 4]);
        assert_eq!(flat.color_for(4), MID);
    }

    #[test]
    fn negative_counts_are_ignored() {
        let scale = ColorScale::from_counts([-3, 2, 6]);
        assert_eq!(scale.min, 2);
        assert_eq!(scale.color_for(-3), NO_DATA);
    }

    #[test]
    fn blending_is_monotonic_without_overshoot() {
        let scale = ColorScale::from_counts([1, 101]);
        let (low, high) = (Rgb::parse_hex(LOW).unwrap(), Rgb::parse_hex(HIGH).unwrap());
        let mut previous = low;
        for count in 1..=101 {
            let c = Rgb::parse_hex(&scale.color_for(count)).unwrap();
            // every channel only moves from LOW toward HIGH
            for (p, cur, lo, hi) in [
                (previous.0, c.0, low.0, high.0),
                (previous.1, c.1, low.1, high.1),
                (previous.2, c.2, low.2, high.2),
            ] {
                assert!(cur <= p, "count {count}: {cur} > {p}");
                assert!(cur >= hi.min(lo) && cur <= lo.max(hi));
            }
            previous = c;
        }
        assert_eq!(previous, high);
    }
}
