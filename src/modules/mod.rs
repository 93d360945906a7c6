pub mod classifier;
pub mod frame;
pub mod gesture;
pub mod gesture_store;
pub mod image_display;
