//! Per-country color assignment
//!
//! Every distinct country gets one random color pair when the dataset loads.
//! The pair never changes afterwards, so a country keeps its color as the
//! years advance.

use indexmap::IndexMap;
use rand::Rng;
use serde::Serialize;

use crate::data::record::PopulationRecord;

/// Opacity used for bar fills
pub const FILL_ALPHA: &str = "0.2";

/// Color used when a country has no assignment
pub const FALLBACK_RGB: Rgb = Rgb::new(75, 192, 192);

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Three independent uniform draws in [0, 255]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
        }
    }

    /// `rgba(R, G, B, 0.2)`
    pub fn to_fill_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, FILL_ALPHA)
    }

    /// `rgb(R, G, B)`
    pub fn to_stroke_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Parse an `rgb(...)` or `rgba(...)` string back into its channels
    ///
    /// Returns None for anything else, including channels outside [0, 255]
    /// or an alpha outside [0, 1].
    pub fn parse_css(css: &str) -> Option<Self> {
        let css = css.trim();
        let (inner, expected_parts) = if let Some(rest) = css.strip_prefix("rgba(") {
            (rest.strip_suffix(')')?, 4)
        } else if let Some(rest) = css.strip_prefix("rgb(") {
            (rest.strip_suffix(')')?, 3)
        } else {
            return None;
        };

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != expected_parts {
            return None;
        }

        let r = parts[0].parse::<u8>().ok()?;
        let g = parts[1].parse::<u8>().ok()?;
        let b = parts[2].parse::<u8>().ok()?;

        if expected_parts == 4 {
            let alpha = parts[3].parse::<f32>().ok()?;
            if !(0.0..=1.0).contains(&alpha) {
                return None;
            }
        }

        Some(Self { r, g, b })
    }
}

/// Fill and stroke color for one country
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAssignment {
    pub background_color: String,
    pub border_color: String,
    #[serde(skip)]
    pub rgb: Rgb,
}

impl ColorAssignment {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            background_color: rgb.to_fill_css(),
            border_color: rgb.to_stroke_css(),
            rgb,
        }
    }

    /// `rgba(75, 192, 192, 0.2)` / `rgb(75, 192, 192)`
    pub fn fallback() -> Self {
        Self::from_rgb(FALLBACK_RGB)
    }
}

/// Country name to color pair, in first-seen order
pub type ColorMap = IndexMap<String, ColorAssignment>;

/// Assign one random color pair to each distinct country in `records`
///
/// Countries are visited in dataset order; repeat occurrences keep the color
/// drawn on first sight and consume no randomness.
pub fn assign_colors<R: Rng + ?Sized>(records: &[PopulationRecord], rng: &mut R) -> ColorMap {
    let mut colors = ColorMap::new();
    for record in records {
        if !colors.contains_key(&record.country_name) {
            let assignment = ColorAssignment::from_rgb(Rgb::random(rng));
            colors.insert(record.country_name.clone(), assignment);
        }
    }
    colors
}
