pub mod color;
pub mod color_names;
pub mod tags;

pub use color::Color;
pub use tags::{ClothingType, ColorPreference, Occasion};
