use crate::error::AppError;
use serde::Deserialize;

const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub max_upload_bytes: usize,
    pub allowed_extensions: Vec<String>,
    pub colors_per_image: usize,
    pub harmony_colors_per_item: usize,
    pub kmeans_seed: u64,
    pub kmeans_restarts: usize,
    pub kmeans_max_iterations: usize,
    pub max_combinations: usize,
    pub min_combination_items: usize,
    pub max_combination_items: usize,
    pub wardrobe_buffer_size: usize,
    pub default_occasion: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_upload_bytes: MAX_UPLOAD_BYTES,
            allowed_extensions: ["png", "jpg", "jpeg", "gif", "bmp", "webp"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            colors_per_image: 5,
            harmony_colors_per_item: 2,
            kmeans_seed: 42,
            kmeans_restarts: 3,
            kmeans_max_iterations: 20,
            max_combinations: 6,
            min_combination_items: 2,
            max_combination_items: 4,
            wardrobe_buffer_size: 64,
            default_occasion: "casual".to_string(),
        }
    }
}

impl Settings {
    // Reads `stylebot.*` from the working directory when present, then lets
    // STYLEBOT_-prefixed environment variables override individual keys.
    pub fn load() -> Result<Self, AppError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("stylebot").required(false))
            .add_source(config::Environment::with_prefix("STYLEBOT").try_parsing(true))
            .build()?
            .try_deserialize::<Settings>()?;
        Ok(settings)
    }
}
