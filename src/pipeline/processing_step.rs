use crate::error::AppError;
use crate::pipeline::context::ImageContext;
use async_trait::async_trait;

/// Chain of Responsibility seam for the image enrichment pipeline.
#[async_trait]
pub trait ProcessingStep: Send + Sync {
    async fn process(&mut self, context: &mut ImageContext) -> Result<(), AppError>;
    fn name(&self) -> &'static str;
}
