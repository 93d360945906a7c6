pub mod coordinate;
pub mod landmark_index;
pub mod utils;
