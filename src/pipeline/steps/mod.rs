mod color_extraction_step;
mod type_inference_step;

pub use color_extraction_step::ColorExtractionStep;
pub use type_inference_step::TypeInferenceStep;
