use crate::analysis::extractor::ColorExtractor;
use crate::analysis::harmony;
use crate::common::color_names;
use crate::common::tags::ClothingType;
use crate::config::Settings;
use crate::error::{AppError, ValidationError};
use crate::service::types::{AnalyzeRequest, AnalyzeResponse, Dimensions, ImageAnalysisDto};
use image::GenericImageView;
use std::sync::Arc;
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tower::Service;
use tracing::warn;

/// One-shot analysis of a single image, without touching the wardrobe.
pub struct AnalyzeService {
    extractor: ColorExtractor,
    allowed_extensions: Arc<Vec<String>>,
    max_upload_bytes: usize,
}

impl AnalyzeService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            extractor: ColorExtractor::new(
                settings.colors_per_image,
                settings.kmeans_seed,
                settings.kmeans_restarts,
                settings.kmeans_max_iterations,
            ),
            allowed_extensions: Arc::new(settings.allowed_extensions.clone()),
            max_upload_bytes: settings.max_upload_bytes,
        }
    }

    fn analyze(extractor: &ColorExtractor, request: &AnalyzeRequest) -> ImageAnalysisDto {
        let (colors, dimensions) = match image::load_from_memory(&request.bytes) {
            Ok(img) => {
                let (width, height) = img.dimensions();
                (extractor.extract(&img), Dimensions { width, height })
            }
            Err(e) => {
                warn!("Failed to decode '{}': {}", request.name, e);
                (
                    ColorExtractor::fallback_colors(),
                    Dimensions {
                        width: 0,
                        height: 0,
                    },
                )
            }
        };

        let dominant_color = colors
            .first()
            .map(|c| c.to_hex())
            .unwrap_or_else(|| "000000".to_string());

        ImageAnalysisDto {
            color_names: color_names::names_of(&colors),
            clothing_type: ClothingType::infer_from_name(&request.name),
            dominant_color,
            color_diversity: harmony::hue_diversity(&colors),
            colors: colors.iter().map(|c| c.to_hex()).collect(),
            dimensions,
        }
    }
}

impl Service<AnalyzeRequest> for AnalyzeService {
    type Response = AnalyzeResponse;
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), AppError>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: AnalyzeRequest) -> Self::Future {
        if request.bytes.len() > self.max_upload_bytes {
            let error = ValidationError::PayloadTooLarge {
                actual: request.bytes.len(),
                limit: self.max_upload_bytes,
            };
            return Box::pin(async move { Err(error.into()) });
        }

        let extension = request
            .name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase());
        let allowed = matches!(extension, Some(ref ext) if self.allowed_extensions.contains(ext));
        if !allowed {
            let error = ValidationError::UnsupportedExtension(request.name.clone());
            return Box::pin(async move { Err(error.into()) });
        }

        let analysis = Self::analyze(&self.extractor, &request);
        Box::pin(async move {
            Ok(AnalyzeResponse {
                success: true,
                analysis,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, Rgb};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(
            width,
            height,
            Rgb(rgb),
        ));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[tokio::test]
    async fn analyzes_dimensions_and_dominant_color() {
        let mut service = AnalyzeService::new(&Settings::default());
        let request = AnalyzeRequest {
            name: "green_dress.png".to_string(),
            bytes: png_bytes(20, 10, [0, 200, 0]),
        };
        let response = service.call(request).await.unwrap();
        let analysis = response.analysis;
        assert_eq!(analysis.dimensions.width, 20);
        assert_eq!(analysis.dimensions.height, 10);
        assert_eq!(analysis.dominant_color, "00c800");
        assert_eq!(analysis.clothing_type, ClothingType::Dress);
        assert_eq!(analysis.color_diversity, 0.0);
    }

    #[tokio::test]
    async fn rejects_unsupported_extension() {
        let mut service = AnalyzeService::new(&Settings::default());
        let request = AnalyzeRequest {
            name: "document.pdf".to_string(),
            bytes: vec![1, 2, 3],
        };
        let error = service.call(request).await.unwrap_err();
        assert!(matches!(
            error,
            AppError::Validation(ValidationError::UnsupportedExtension(_))
        ));
    }

    #[tokio::test]
    async fn undecodable_bytes_degrade_to_the_fallback_analysis() {
        let mut service = AnalyzeService::new(&Settings::default());
        let request = AnalyzeRequest {
            name: "broken.jpg".to_string(),
            bytes: vec![0xff; 32],
        };
        let response = service.call(request).await.unwrap();
        let analysis = response.analysis;
        assert_eq!(analysis.colors, vec!["000000", "ffffff"]);
        assert_eq!(analysis.dimensions.width, 0);
        assert_eq!(analysis.dominant_color, "000000");
    }
}
