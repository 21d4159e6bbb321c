use crate::common::color::Color;
use crate::common::tags::ClothingType;
use image::DynamicImage;
use std::sync::Arc;
use std::time::Instant;

/// Per-image state that flows through the enrichment pipeline. `image` is
/// `None` when the upload payload could not be decoded; steps degrade to
/// fallback values instead of failing.
pub struct ImageContext {
    pub id: uuid::Uuid,
    pub original_name: String,
    pub image: Option<Arc<DynamicImage>>,
    pub colors: Vec<Color>,
    pub clothing_type: Option<ClothingType>,
    pub processing_start: Instant,
}

impl ImageContext {
    pub fn new(original_name: String, image: Option<DynamicImage>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            original_name,
            image: image.map(Arc::new),
            colors: Vec::new(),
            clothing_type: None,
            processing_start: Instant::now(),
        }
    }
}
