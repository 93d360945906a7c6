pub mod utils;
pub mod pipeline;
pub mod config;
pub mod helper;
pub mod modules;

pub use config::config::PipelineConfig;
pub use modules::classifier::{classify, GestureClassifier};
pub use modules::frame::LandmarkFrame;
pub use modules::gesture::Gesture;
pub use modules::gesture_store::GestureStore;
pub use modules::image_display::ImageDisplay;
pub use pipeline::pipeline::GesturePipeline;
pub use utils::coordinate::Landmark;
