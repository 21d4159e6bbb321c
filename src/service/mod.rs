pub mod analyze;
pub mod generate;
pub mod health;
pub mod sequence;
pub mod types;
pub mod upload;

pub use analyze::AnalyzeService;
pub use generate::{GenerateOutcome, GenerateService};
pub use health::HealthService;
pub use sequence::RequestSequence;
pub use upload::UploadService;
