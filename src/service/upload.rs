use crate::analysis::extractor::ColorExtractor;
use crate::config::Settings;
use crate::error::{AppError, ValidationError};
use crate::pipeline::{
    ColorExtractionStep, ImageContext, ProcessingPipeline, TypeInferenceStep,
};
use crate::service::types::{ImageDto, UploadRequest, UploadResponse};
use crate::wardrobe::{WardrobeHandle, WardrobeItem};
use std::sync::Arc;
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tower::Service;
use tracing::{info, warn};

/// Validates and analyzes an upload batch, then adds the resulting items to
/// the wardrobe. Individual bad files are skipped; the request only fails
/// when nothing valid remains.
pub struct UploadService {
    wardrobe: WardrobeHandle,
    extractor: ColorExtractor,
    allowed_extensions: Arc<Vec<String>>,
    max_upload_bytes: usize,
}

impl UploadService {
    pub fn new(settings: &Settings, wardrobe: WardrobeHandle) -> Self {
        Self {
            wardrobe,
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

    fn allowed_extension(name: &str, allowed: &[String]) -> Option<String> {
        let (_, extension) = name.rsplit_once('.')?;
        let extension = extension.to_lowercase();
        allowed.contains(&extension).then_some(extension)
    }
}

impl Service<UploadRequest> for UploadService {
    type Response = UploadResponse;
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), AppError>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: UploadRequest) -> Self::Future {
        let wardrobe = self.wardrobe.clone();
        let extractor = self.extractor.clone();
        let allowed = self.allowed_extensions.clone();
        let max_upload_bytes = self.max_upload_bytes;

        Box::pin(async move {
            let total: usize = request.files.iter().map(|f| f.bytes.len()).sum();
            if total > max_upload_bytes {
                return Err(ValidationError::PayloadTooLarge {
                    actual: total,
                    limit: max_upload_bytes,
                }
                .into());
            }

            let mut images = Vec::new();
            for file in request.files {
                let Some(extension) = Self::allowed_extension(&file.name, &allowed) else {
                    warn!("Skipping '{}': unsupported extension", file.name);
                    continue;
                };

                let decoded = match image::load_from_memory(&file.bytes) {
                    Ok(img) => Some(img),
                    Err(e) => {
                        warn!("Failed to decode '{}': {}", file.name, e);
                        None
                    }
                };

                let mut context = ImageContext::new(file.name, decoded);
                let mut pipeline = ProcessingPipeline::new()
                    .add_step(Box::new(ColorExtractionStep::new(extractor.clone())))
                    .add_step(Box::new(TypeInferenceStep));
                pipeline.process(&mut context).await?;

                let item = WardrobeItem::from_context(&context, &extension);
                wardrobe.add_item(item.clone()).await?;
                images.push(ImageDto::from_item(&item));
            }

            if images.is_empty() {
                return Err(ValidationError::EmptyUpload.into());
            }

            info!("Uploaded and analyzed {} image(s)", images.len());
            let message = format!("{} image(s) analyzed", images.len());
            Ok(UploadResponse {
                success: true,
                images,
                message,
            })
        })
    }
}
