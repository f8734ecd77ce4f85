use std::str::FromStr;

use palette::{encoding, white_point::D65, FromColor, Hsl, Lab, LinSrgb, Srgb};

use crate::error::PickError;

/// CIE Lab under D65, the perceptual space every distance is measured in.
pub type PerceptualLab = Lab<D65, f64>;

/// CIE76 distance calculation for perceptually uniform color differences
pub fn delta_e(a: PerceptualLab, b: PerceptualLab) -> f64 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Convert sRGB u8 values to CIE Lab color space
pub fn srgb_u8_to_lab(rgb: Srgb<u8>) -> PerceptualLab {
    let srgb_f: Srgb<f64> = rgb.into_format();
    let linear: LinSrgb<f64> = srgb_f.into_linear();
    Lab::from_color(linear)
}

/// HSL saturation and lightness of an sRGB colour, both in `0..=1`.
pub fn saturation_lightness(rgb: Srgb<u8>) -> (f64, f64) {
    let srgb_f: Srgb<f64> = rgb.into_format();
    let hsl: Hsl<encoding::Srgb, f64> = Hsl::from_color(srgb_f);
    (hsl.saturation, hsl.lightness)
}

/// Generate a coarse grid of sRGB colors (6 levels per channel = 216 candidates)
pub fn candidate_srgb_grid() -> Vec<String> {
    let levels: [u8; 6] = [16, 64, 112, 160, 208, 255];
    let mut v = Vec::with_capacity(216);
    for &r in &levels {
        for &g in &levels {
            for &b in &levels {
                v.push(format!("#{r:02X}{g:02X}{b:02X}"));
            }
        }
    }
    v
}

/// A candidate colour, identified by the hex code it was given as.
///
/// Everything the pipeline needs from colour science is computed once here:
/// the Lab coordinates for distances and the HSL saturation/lightness for
/// filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Colour {
    hex: String,
    rgb: Srgb<u8>,
    lab: PerceptualLab,
    saturation: f64,
    lightness: f64,
}

impl Colour {
    /// Parse a `#RRGGBB` (or `#RGB`, `#` optional) code. Surrounding
    /// whitespace is dropped and not part of the identity.
    pub fn parse(code: &str) -> Result<Self, PickError> {
        let code = code.trim();
        let rgb: Srgb<u8> = code
            .parse()
            .map_err(|source| PickError::InvalidColour {
                input: code.to_string(),
                source,
            })?;
        let (saturation, lightness) = saturation_lightness(rgb);
        Ok(Self {
            hex: code.to_string(),
            rgb,
            lab: srgb_u8_to_lab(rgb),
            saturation,
            lightness,
        })
    }

    /// The code as supplied by the caller, minus surrounding whitespace.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Srgb<u8> {
        self.rgb
    }

    pub fn lab(&self) -> PerceptualLab {
        self.lab
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }
}

impl FromStr for Colour {
    type Err = PickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colour::parse(s)
    }
}

/// Parse every code, stopping at the first malformed one.
pub fn parse_palette<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Colour>, PickError> {
    codes.iter().map(|c| Colour::parse(c.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn parses_with_and_without_hash() {
        let a = Colour::parse("#FF0000").unwrap();
        let b = Colour::parse("ff0000").unwrap();
        assert_eq!(a.rgb(), Srgb::new(255, 0, 0));
        assert_eq!(a.rgb(), b.rgb());
        assert_eq!(a.hex(), "#FF0000");
        assert_eq!(b.hex(), "ff0000");
    }

    #[test]
    fn surrounding_whitespace_is_not_kept() {
        let c = Colour::parse(" #00FF00 \t").unwrap();
        assert_eq!(c.hex(), "#00FF00");
        assert_eq!(c.rgb(), Srgb::new(0, 255, 0));
    }

    #[test]
    fn rejects_malformed_codes() {
        for bad in ["", "#", "#12345", "#GG0000", "red"] {
            match Colour::parse(bad) {
                Err(PickError::InvalidColour { input, .. }) => assert_eq!(input, bad),
                other => panic!("expected InvalidColour for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn lab_of_reference_colours() {
        let white = srgb_u8_to_lab(Srgb::new(255, 255, 255));
        assert!(approx(white.l, 100.0, 0.01));
        assert!(approx(white.a, 0.0, 0.01));
        assert!(approx(white.b, 0.0, 0.01));

        let red = srgb_u8_to_lab(Srgb::new(255, 0, 0));
        assert!(approx(red.l, 53.24, 0.1));
        assert!(approx(red.a, 80.09, 0.2));
        assert!(approx(red.b, 67.20, 0.2));
    }

    #[test]
    fn delta_e_is_symmetric_and_zero_on_self() {
        let a = srgb_u8_to_lab(Srgb::new(12, 200, 99));
        let b = srgb_u8_to_lab(Srgb::new(240, 8, 150));
        assert_eq!(delta_e(a, a), 0.0);
        assert_eq!(delta_e(a, b), delta_e(b, a));
        assert!(delta_e(a, b) > 0.0);
    }

    #[test]
    fn saturation_and_lightness() {
        let red = Colour::parse("#FF0000").unwrap();
        assert!(approx(red.saturation(), 1.0, 1e-9));
        assert!(approx(red.lightness(), 0.5, 1e-9));

        let white = Colour::parse("#FFFFFF").unwrap();
        assert!(approx(white.saturation(), 0.0, 1e-9));
        assert!(approx(white.lightness(), 1.0, 1e-9));

        let black = Colour::parse("#000000").unwrap();
        assert!(approx(black.lightness(), 0.0, 1e-9));
    }

    #[test]
    fn grid_has_216_unique_parseable_codes() {
        let grid = candidate_srgb_grid();
        assert_eq!(grid.len(), 216);
        let unique: std::collections::HashSet<_> = grid.iter().collect();
        assert_eq!(unique.len(), 216);
        assert!(parse_palette(&grid).is_ok());
    }

    #[test]
    fn parse_palette_reports_first_bad_code() {
        let err = parse_palette(&["#000000", "nope", "#zz"]).unwrap_err();
        match err {
            PickError::InvalidColour { input, .. } => assert_eq!(input, "nope"),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
