/// An HSL color with fixed saturation/lightness so derived colors stay soft
/// and legible against the rendered bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Hsl {
    pub hue: u16, // 0..360
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub fn to_css(self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Deterministic string-to-color mapping. The recurrence is
/// `h = h*31 + code mod 2^32` over the seed's char code points; hue is
/// `h mod 360`. No platform string hashing, no randomness.
pub fn derive_color(seed: &str) -> Hsl {
    let mut h: u32 = 0;
    for c in seed.chars() {
        h = h.wrapping_mul(31).wrapping_add(c as u32);
    }
    Hsl {
        hue: (h % 360) as u16,
        saturation: 65,
        lightness: 60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_color() {
        assert_eq!(derive_color("Emily Dickinson"), derive_color("Emily Dickinson"));
        assert_eq!(derive_color(""), derive_color(""));
    }

    #[test]
    fn matches_rolling_hash_recurrence() {
        // "ab": h = (0*31 + 97)*31 + 98 = 3105; 3105 % 360 = 225.
        assert_eq!(derive_color("ab").hue, 225);
        assert_eq!(derive_color("a").hue, 97);
        assert_eq!(derive_color("").hue, 0);
    }

    #[test]
    fn saturation_and_lightness_are_fixed() {
        let c = derive_color("Unknown");
        assert_eq!(c.saturation, 65);
        assert_eq!(c.lightness, 60);
        assert!(c.hue < 360);
    }

    #[test]
    fn css_rendering() {
        let c = Hsl {
            hue: 120,
            saturation: 65,
            lightness: 60,
        };
        assert_eq!(c.to_css(), "hsl(120, 65%, 60%)");
    }
}
