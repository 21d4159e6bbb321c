use crate::analysis::harmony::Harmony;
use crate::common::tags::{ClothingType, ColorPreference, Occasion};
use indexmap::IndexMap;

/// Deterministic phrase lookup for the generated description fields. One
/// phrase per label, no randomness.
#[derive(Debug, Clone)]
pub struct TextGenerator {
    harmony_phrases: IndexMap<Harmony, &'static str>,
    occasion_phrases: IndexMap<Occasion, &'static str>,
}

impl Default for TextGenerator {
    fn default() -> Self {
        let mut harmony_phrases = IndexMap::new();
        harmony_phrases.insert(
            Harmony::Complementary,
            "Opposing hues play off each other for a bold, high-contrast pairing.",
        );
        harmony_phrases.insert(
            Harmony::Analogous,
            "Neighboring hues keep the palette soft and cohesive.",
        );
        harmony_phrases.insert(
            Harmony::Triadic,
            "An evenly spread trio of hues gives the outfit a lively balance.",
        );
        harmony_phrases.insert(
            Harmony::Monochrome,
            "A single-tone palette reads clean and intentional.",
        );
        harmony_phrases.insert(
            Harmony::Diverse,
            "A wide color mix makes for an eclectic, playful look.",
        );

        let mut occasion_phrases = IndexMap::new();
        occasion_phrases.insert(Occasion::Casual, "Easy to wear day to day.");
        occasion_phrases.insert(Occasion::Formal, "Polished enough for a formal setting.");
        occasion_phrases.insert(Occasion::Party, "Made to stand out after dark.");
        occasion_phrases.insert(Occasion::Business, "Keeps things sharp for the office.");
        occasion_phrases.insert(Occasion::Sport, "Built to move with you.");
        occasion_phrases.insert(Occasion::Other, "Versatile enough for most occasions.");

        Self {
            harmony_phrases,
            occasion_phrases,
        }
    }
}

impl TextGenerator {
    pub fn color_analysis(&self, harmony: Harmony, color_names: &[String]) -> String {
        let phrase = self
            .harmony_phrases
            .get(&harmony)
            .copied()
            .unwrap_or("The colors sit together comfortably.");
        if color_names.is_empty() {
            phrase.to_string()
        } else {
            format!("{} Dominant tones: {}.", phrase, color_names.join(", "))
        }
    }

    pub fn style_notes(
        &self,
        occasion: Occasion,
        preferred_type: Option<ClothingType>,
    ) -> String {
        let phrase = self
            .occasion_phrases
            .get(&occasion)
            .copied()
            .unwrap_or("Versatile enough for most occasions.");
        match preferred_type {
            Some(clothing_type) if clothing_type != ClothingType::Unknown => {
                format!(
                    "{} Lean on the {} as the anchor piece.",
                    phrase, clothing_type
                )
            }
            _ => phrase.to_string(),
        }
    }

    pub fn recommendation(
        &self,
        harmony: Harmony,
        occasion: Occasion,
        preferred_type: Option<ClothingType>,
        color_preference: Option<&ColorPreference>,
    ) -> String {
        let mut text = format!(
            "A {} combination for a {} occasion. {}",
            harmony,
            occasion,
            self.style_notes(occasion, preferred_type)
        );
        if let Some(preference) = color_preference {
            if !preference.as_str().trim().is_empty() {
                text.push_str(&format!(
                    " It also ties in your preference for {}.",
                    preference.as_str().trim()
                ));
            }
        }
        text
    }
}
