use crate::error::AppError;
use crate::pipeline::context::ImageContext;
use crate::pipeline::processing_step::ProcessingStep;

/// A pipeline that enriches an image context through a chain of steps.
pub struct ProcessingPipeline {
    steps: Vec<Box<dyn ProcessingStep>>,
}

impl ProcessingPipeline {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn add_step(mut self, step: Box<dyn ProcessingStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub async fn process(&mut self, context: &mut ImageContext) -> Result<(), AppError> {
        for step in &mut self.steps {
            tracing::debug!("Processing step: {}", step.name());
            step.process(context).await?;
        }
        Ok(())
    }
}

impl Default for ProcessingPipeline {
    fn default() -> Self {
        Self::new()
    }
}
