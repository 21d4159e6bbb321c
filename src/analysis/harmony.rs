use crate::common::color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

const COMPLEMENTARY_MIN_DEG: f32 = 160.0;
const COMPLEMENTARY_MAX_DEG: f32 = 200.0;
const ANALOGOUS_RANGE_DEG: f32 = 60.0;
const TRIADIC_RANGE_DEG: f32 = 120.0;

/// Categorical label for the hue relationship among a set of colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Harmony {
    Complementary,
    Analogous,
    Triadic,
    Monochrome,
    Diverse,
}

impl Harmony {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Monochrome => "monochrome",
            Self::Diverse => "diverse",
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a set of colors by their hue relationships. Deterministic and
/// order-independent.
///
/// A single opposing pair is enough to label the whole set complementary;
/// that check runs before the range-based labels on purpose, so a set that
/// would also qualify as diverse still reads as complementary.
pub fn classify(colors: &[Color]) -> Harmony {
    if colors.len() < 2 {
        return Harmony::Monochrome;
    }

    let hues: Vec<f32> = colors.iter().map(|c| c.hue()).collect();

    for i in 0..hues.len() {
        for j in (i + 1)..hues.len() {
            let diff = (hues[i] - hues[j]).abs();
            if (COMPLEMENTARY_MIN_DEG..=COMPLEMENTARY_MAX_DEG).contains(&diff) {
                return Harmony::Complementary;
            }
        }
    }

    let min = hues.iter().cloned().fold(f32::MAX, f32::min);
    let max = hues.iter().cloned().fold(f32::MIN, f32::max);
    let range = max - min;

    if range <= ANALOGOUS_RANGE_DEG {
        Harmony::Analogous
    } else if range <= TRIADIC_RANGE_DEG {
        Harmony::Triadic
    } else {
        Harmony::Diverse
    }
}

/// Hue spread of a color set normalized to [0, 1], rounded to two decimals.
pub fn hue_diversity(colors: &[Color]) -> f32 {
    if colors.len() < 2 {
        return 0.0;
    }
    let hues: Vec<f32> = colors.iter().map(|c| c.hue()).collect();
    let min = hues.iter().cloned().fold(f32::MAX, f32::min);
    let max = hues.iter().cloned().fold(f32::MIN, f32::max);
    (((max - min) / 360.0) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::new(255, 0, 0)
    }

    fn cyan() -> Color {
        Color::new(0, 255, 255)
    }

    #[test]
    fn empty_and_single_are_monochrome() {
        assert_eq!(classify(&[]), Harmony::Monochrome);
        assert_eq!(classify(&[red()]), Harmony::Monochrome);
    }

    #[test]
    fn opposing_hues_are_complementary() {
        // Red at 0 degrees, cyan at 180.
        assert_eq!(classify(&[red(), cyan()]), Harmony::Complementary);
    }

    #[test]
    fn complementary_wins_over_range_labels() {
        // Green at 120 puts the hue range at 180 (diverse territory), but
        // the red/cyan pair still decides the label.
        let colors = [red(), cyan(), Color::new(0, 255, 0)];
        assert_eq!(classify(&colors), Harmony::Complementary);
    }

    #[test]
    fn narrow_range_is_analogous() {
        // Red (0), orange (~30), yellow (60).
        let colors = [red(), Color::new(255, 128, 0), Color::new(255, 255, 0)];
        assert_eq!(classify(&colors), Harmony::Analogous);
    }

    #[test]
    fn medium_range_is_triadic() {
        // Red (0) and green (120).
        let colors = [red(), Color::new(0, 255, 0)];
        assert_eq!(classify(&colors), Harmony::Triadic);
    }

    #[test]
    fn wide_range_without_opposition_is_diverse() {
        // Red (0), green (120), violet (~275): widest pair sits at 275,
        // outside the complementary band.
        let colors = [red(), Color::new(0, 255, 0), Color::new(150, 0, 255)];
        assert_eq!(classify(&colors), Harmony::Diverse);
    }

    #[test]
    fn diversity_is_zero_for_single_color() {
        assert_eq!(hue_diversity(&[red()]), 0.0);
    }

    #[test]
    fn diversity_scales_with_hue_range() {
        assert_eq!(hue_diversity(&[red(), cyan()]), 0.5);
    }
}
