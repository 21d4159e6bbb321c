use crate::common::tags::ClothingType;
use crate::error::AppError;
use crate::pipeline::context::ImageContext;
use crate::pipeline::processing_step::ProcessingStep;
use async_trait::async_trait;

/// Tags the context with a clothing type inferred from the original
/// filename. Unmatched names fall back to `Unknown`.
pub struct TypeInferenceStep;

#[async_trait]
impl ProcessingStep for TypeInferenceStep {
    async fn process(&mut self, context: &mut ImageContext) -> Result<(), AppError> {
        context.clothing_type = Some(ClothingType::infer_from_name(&context.original_name));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "type_inference"
    }
}
