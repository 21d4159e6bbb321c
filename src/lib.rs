pub mod analysis;
pub mod common;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod pipeline;
pub mod service;
pub mod wardrobe;

pub use config::Settings;
pub use coordinator::{AppCoordinator, CoordinatorBuilder};
pub use error::{AppError, ValidationError, WardrobeError};
