use crate::common::color::Color;
use crate::common::color_names;
use crate::common::tags::ClothingType;
use crate::pipeline::context::ImageContext;
use chrono::{DateTime, Utc};
use image::DynamicImage;
use std::sync::Arc;
use uuid::Uuid;

/// An analyzed clothing image in the working set. Immutable once built;
/// removal from the wardrobe discards it.
#[derive(Clone)]
pub struct WardrobeItem {
    pub id: Uuid,
    pub original_name: String,
    pub stored_name: String,
    pub image: Option<Arc<DynamicImage>>,
    pub colors: Vec<Color>,
    pub color_names: Vec<String>,
    pub clothing_type: ClothingType,
    pub uploaded_at: DateTime<Utc>,
}

impl WardrobeItem {
    /// Builds an item from an enriched pipeline context. The stored name is
    /// keyed by the item id, so collisions are impossible by construction.
    pub fn from_context(context: &ImageContext, extension: &str) -> Self {
        let color_names = color_names::names_of(&context.colors);
        Self {
            id: context.id,
            original_name: context.original_name.clone(),
            stored_name: format!("{}.{}", context.id, extension),
            image: context.image.clone(),
            colors: context.colors.clone(),
            color_names,
            clothing_type: context.clothing_type.unwrap_or(ClothingType::Unknown),
            uploaded_at: Utc::now(),
        }
    }
}
