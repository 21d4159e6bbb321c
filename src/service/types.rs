use crate::analysis::harmony::Harmony;
use crate::common::tags::ClothingType;
use crate::error::{AppError, ValidationError};
use crate::wardrobe::item::WardrobeItem;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One file of a multipart upload, already read into memory by the
/// transport.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub files: Vec<UploadFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDto {
    pub id: Uuid,
    pub filename: String,
    pub original_name: String,
    pub colors: Vec<String>,
    pub color_names: Vec<String>,
    pub clothing_type: ClothingType,
    pub url: String,
}

impl ImageDto {
    pub fn from_item(item: &WardrobeItem) -> Self {
        Self {
            id: item.id,
            filename: item.stored_name.clone(),
            original_name: item.original_name.clone(),
            colors: item.colors.iter().map(|c| c.to_hex()).collect(),
            color_names: item.color_names.clone(),
            clothing_type: item.clothing_type,
            url: format!("/uploads/{}", item.stored_name),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub images: Vec<ImageDto>,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub images: Vec<Uuid>,
    pub occasion: String,
    #[serde(rename = "clothingType", default)]
    pub clothing_type: Option<String>,
    #[serde(rename = "colorPreference", default)]
    pub color_preference: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CombinationDto {
    pub id: usize,
    pub images: Vec<ImageDto>,
    pub score: u32,
    pub rating: u8,
    pub harmony: Harmony,
    pub style_notes: String,
    pub color_analysis: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub combinations: Vec<CombinationDto>,
    pub total_combinations: usize,
}

#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageAnalysisDto {
    pub colors: Vec<String>,
    pub color_names: Vec<String>,
    pub clothing_type: ClothingType,
    pub dimensions: Dimensions,
    pub dominant_color: String,
    pub color_diversity: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: ImageAnalysisDto,
}

#[derive(Debug, Clone)]
pub struct HealthRequest;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// Body for the 400-style replies a transport layer would send.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&ValidationError> for ErrorResponse {
    fn from(error: &ValidationError) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
