use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A normalized landmark emitted by the holistic detector.
///
/// `x` and `y` are relative to the frame dimensions, `y` grows downward.
/// `z` is carried through but never used for geometry.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Landmark { x, y, z: None }
    }

    pub fn with_depth(x: f64, y: f64, z: f64) -> Self {
        Landmark { x, y, z: Some(z) }
    }

    /// to_vector returns the planar part of the landmark.
    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// distance_to calculates the 2D euclidean distance to another landmark.
    ///
    /// # Arguments
    /// * `other` - &Landmark
    ///
    /// # Returns
    /// * `f64`
    pub fn distance_to(&self, other: &Landmark) -> f64 {
        (other.to_vector() - self.to_vector()).norm()
    }
}
