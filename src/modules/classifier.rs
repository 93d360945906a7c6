use crate::config::config::ClassifierConfig;
use crate::helper::gesture_helper::{detect_hands_up, detect_smile};
use crate::modules::frame::LandmarkFrame;
use crate::modules::gesture::Gesture;

/// classify derives the gesture of a single frame with the default threshold.
///
/// Hands up wins over a smile, a frame with any landmarks otherwise reads as
/// serious. Returns `None` only when the frame holds neither face nor pose
/// landmarks. Present sequences must contain every index read by the checks.
///
/// # Arguments
/// * `frame` - &LandmarkFrame
///
/// # Returns
/// * `Option<Gesture>`
pub fn classify(frame: &LandmarkFrame) -> Option<Gesture> {
    GestureClassifier::default().classify(frame)
}

/// Stateless classifier with a configurable smile threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureClassifier {
    pub smile_threshold: f64,
}

impl GestureClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        GestureClassifier {
            smile_threshold: config.smile_threshold,
        }
    }

    pub fn classify(&self, frame: &LandmarkFrame) -> Option<Gesture> {
        if detect_hands_up(frame) {
            return Some(Gesture::Eureca)
        }

        if detect_smile(frame, self.smile_threshold) {
            return Some(Gesture::Smile)
        }

        if !frame.has_landmarks() {
            return None
        }
        Some(Gesture::Serious)
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}
