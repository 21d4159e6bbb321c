use crate::analysis::harmony::Harmony;
use crate::common::tags::Occasion;

pub const SCORE_FLOOR: u32 = 65;
pub const SCORE_CEILING: u32 = 95;

// Table default for harmony labels outside the base table. The label enum
// is closed, so today every label has a row; the constant documents the
// fallback row all the same.
pub const DEFAULT_BASE_SCORE: u32 = 70;

/// Base compatibility score for a harmony label.
pub fn base_score(harmony: Harmony) -> u32 {
    match harmony {
        Harmony::Complementary => 95,
        Harmony::Analogous => 90,
        Harmony::Triadic => 85,
        Harmony::Monochrome => 80,
        Harmony::Diverse => 75,
    }
}

/// Occasion multiplier, conditioned on the harmony label. Occasions outside
/// the table sit on the 0.9 default row.
pub fn occasion_multiplier(occasion: Occasion, harmony: Harmony) -> f64 {
    match occasion {
        Occasion::Formal => match harmony {
            Harmony::Complementary | Harmony::Monochrome => 0.90,
            _ => 0.80,
        },
        Occasion::Party => match harmony {
            Harmony::Complementary | Harmony::Diverse => 0.95,
            _ => 0.85,
        },
        Occasion::Casual => match harmony {
            Harmony::Analogous | Harmony::Triadic => 0.95,
            _ => 0.90,
        },
        Occasion::Business => match harmony {
            Harmony::Monochrome | Harmony::Analogous => 0.85,
            _ => 0.80,
        },
        Occasion::Sport => match harmony {
            Harmony::Triadic | Harmony::Diverse => 0.95,
            _ => 0.90,
        },
        Occasion::Other => 0.90,
    }
}

/// Final integer score, clamped to [65, 95]. The clamp keeps every result
/// in the "reasonably good" band regardless of the table extremes.
pub fn score(harmony: Harmony, occasion: Occasion) -> u32 {
    let raw = base_score(harmony) as f64 * occasion_multiplier(occasion, harmony);
    (raw.round() as u32).clamp(SCORE_FLOOR, SCORE_CEILING)
}

/// Star rating derived from the score: floor(score / 20) + 1, clamped to
/// [1, 5].
pub fn rating(score: u32) -> u8 {
    (score / 20 + 1).clamp(1, 5) as u8
}
