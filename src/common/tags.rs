use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Casual,
    Formal,
    Party,
    Business,
    Sport,
    Other,
}

impl Occasion {
    // Lenient parse: anything outside the known set scores with the
    // default multiplier row.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "casual" => Self::Casual,
            "formal" => Self::Formal,
            "party" => Self::Party,
            "business" => Self::Business,
            "sport" | "sports" => Self::Sport,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Formal => "formal",
            Self::Party => "party",
            Self::Business => "business",
            Self::Sport => "sport",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingType {
    Top,
    Bottom,
    Dress,
    Outerwear,
    Shoes,
    Accessory,
    Unknown,
}

impl ClothingType {
    /// Keyword lookup over the original filename. Anything unmatched is
    /// `Unknown`, which is also the processing-failure fallback.
    pub fn infer_from_name(name: &str) -> Self {
        let name = name.to_lowercase();
        const KEYWORDS: &[(&str, ClothingType)] = &[
            ("shirt", ClothingType::Top),
            ("tee", ClothingType::Top),
            ("blouse", ClothingType::Top),
            ("top", ClothingType::Top),
            ("pant", ClothingType::Bottom),
            ("jean", ClothingType::Bottom),
            ("trouser", ClothingType::Bottom),
            ("skirt", ClothingType::Bottom),
            ("short", ClothingType::Bottom),
            ("dress", ClothingType::Dress),
            ("gown", ClothingType::Dress),
            ("jacket", ClothingType::Outerwear),
            ("coat", ClothingType::Outerwear),
            ("hoodie", ClothingType::Outerwear),
            ("sweater", ClothingType::Outerwear),
            ("shoe", ClothingType::Shoes),
            ("sneaker", ClothingType::Shoes),
            ("boot", ClothingType::Shoes),
            ("heel", ClothingType::Shoes),
            ("hat", ClothingType::Accessory),
            ("scarf", ClothingType::Accessory),
            ("belt", ClothingType::Accessory),
            ("bag", ClothingType::Accessory),
            ("watch", ClothingType::Accessory),
        ];
        KEYWORDS
            .iter()
            .find(|(keyword, _)| name.contains(keyword))
            .map(|(_, clothing_type)| *clothing_type)
            .unwrap_or(ClothingType::Unknown)
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "dress" => Self::Dress,
            "outerwear" => Self::Outerwear,
            "shoes" => Self::Shoes,
            "accessory" => Self::Accessory,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Dress => "dress",
            Self::Outerwear => "outerwear",
            Self::Shoes => "shoes",
            Self::Accessory => "accessory",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ClothingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form color preference from the request, kept verbatim for the text
/// generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPreference(pub String);

impl ColorPreference {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occasion_parse_is_lenient() {
        assert_eq!(Occasion::parse("Formal"), Occasion::Formal);
        assert_eq!(Occasion::parse(" party "), Occasion::Party);
        assert_eq!(Occasion::parse("wedding"), Occasion::Other);
    }

    #[test]
    fn clothing_type_from_filename_keywords() {
        assert_eq!(
            ClothingType::infer_from_name("blue_shirt.png"),
            ClothingType::Top
        );
        assert_eq!(
            ClothingType::infer_from_name("Skinny-Jeans.JPG"),
            ClothingType::Bottom
        );
        assert_eq!(
            ClothingType::infer_from_name("winter_coat.webp"),
            ClothingType::Outerwear
        );
        assert_eq!(
            ClothingType::infer_from_name("IMG_2041.jpg"),
            ClothingType::Unknown
        );
    }
}
