pub mod config;
pub mod pipeline;
pub mod step;

pub use config::{GalleryConfig, PresetConfig, CONFIG_ENV_VAR};
pub use pipeline::Pipeline;
pub use step::Step;
