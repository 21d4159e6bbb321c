use crate::analysis::extractor::ColorExtractor;
use crate::error::AppError;
use crate::pipeline::context::ImageContext;
use crate::pipeline::processing_step::ProcessingStep;
use async_trait::async_trait;
use tracing::warn;

/// Fills `context.colors` with the representative colors of the decoded
/// image, or the fallback pair when there is nothing to analyze.
pub struct ColorExtractionStep {
    extractor: ColorExtractor,
}

impl ColorExtractionStep {
    pub fn new(extractor: ColorExtractor) -> Self {
        Self { extractor }
    }
}

#[async_trait]
impl ProcessingStep for ColorExtractionStep {
    async fn process(&mut self, context: &mut ImageContext) -> Result<(), AppError> {
        context.colors = match &context.image {
            Some(image) => self.extractor.extract(image),
            None => {
                warn!(
                    "No decoded image for '{}', using fallback colors",
                    context.original_name
                );
                ColorExtractor::fallback_colors()
            }
        };
        Ok(())
    }

    fn name(&self) -> &'static str {
        "color_extraction"
    }
}
