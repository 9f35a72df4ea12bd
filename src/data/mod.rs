pub mod color;
pub mod config;
pub mod palette;

pub use color::Color;
pub use config::SceneConfig;
