//! Two-stop color ramp for cell fills and legend swatches.

use std::fmt;

use super::scale::LinearScale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// CSS named colors the default palette and the theme refer to.
const NAMED: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("darkblue", Rgb::new(0, 0, 139)),
    ("navy", Rgb::new(0, 0, 128)),
    ("steelblue", Rgb::new(70, 130, 180)),
    ("crimson", Rgb::new(220, 20, 60)),
    ("darkred", Rgb::new(139, 0, 0)),
    ("orange", Rgb::new(255, 165, 0)),
    ("gold", Rgb::new(255, 215, 0)),
];

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Accepts `#rgb`, `#rrggbb` and the names in [`NAMED`] (case-insensitive).
    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex);
        }
        let lowered = value.to_ascii_lowercase();
        NAMED
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, rgb)| *rgb)
    }

    /// Channel-wise linear blend; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(Rgb::new(digits.next()??, digits.next()??, digits.next()??))
        }
        6 => Some(Rgb::new(
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        _ => None,
    }
}

/// Maps a numeric domain onto a gradient between `cold` and `warm`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    scale: LinearScale,
    pub cold: Rgb,
    pub warm: Rgb,
}

impl ColorScale {
    pub fn new(domain: (f64, f64), cold: Rgb, warm: Rgb) -> Self {
        Self {
            scale: LinearScale::new(domain, (0.0, 1.0)),
            cold,
            warm,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.scale.domain
    }

    pub fn color_at(&self, value: f64) -> Rgb {
        self.cold.lerp(self.warm, self.scale.map(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_names() {
        assert_eq!(Rgb::parse("#fff"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::parse("#dc143c"), Some(Rgb::new(220, 20, 60)));
        assert_eq!(Rgb::parse("DarkBlue"), Some(Rgb::new(0, 0, 139)));
        assert_eq!(Rgb::parse("#12"), None);
        assert_eq!(Rgb::parse("chartreuse-ish"), None);
    }

    #[test]
    fn ramp_endpoints_match_stops() {
        let cold = Rgb::new(0, 0, 139);
        let warm = Rgb::new(220, 20, 60);
        let ramp = ColorScale::new((-6.0, 5.0), cold, warm);
        assert_eq!(ramp.color_at(-6.0), cold);
        assert_eq!(ramp.color_at(5.0), warm);
        assert_eq!(ramp.color_at(-0.5), Rgb::new(110, 10, 100));
    }

    #[test]
    fn out_of_domain_values_clamp() {
        let ramp = ColorScale::new((0.0, 1.0), Rgb::new(0, 0, 0), Rgb::new(200, 200, 200));
        assert_eq!(ramp.color_at(-4.0), Rgb::new(0, 0, 0));
        assert_eq!(ramp.color_at(9.0), Rgb::new(200, 200, 200));
    }

    #[test]
    fn renders_css_rgb() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "rgb(1, 2, 3)");
        assert_eq!(Rgb::new(0, 0, 139).to_hex(), "#00008b");
    }
}
