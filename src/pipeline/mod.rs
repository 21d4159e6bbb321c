pub mod context;
pub mod processing_pipeline;
pub mod processing_step;
pub mod steps;

pub use context::ImageContext;
pub use processing_pipeline::ProcessingPipeline;
pub use processing_step::ProcessingStep;
pub use steps::{ColorExtractionStep, TypeInferenceStep};
