use crate::modules::frame::LandmarkFrame;
use crate::utils::coordinate::Landmark;
use crate::utils::landmark_index::{
    LOWER_LIP_CENTER, MOUTH_LEFT_CORNER, MOUTH_RIGHT_CORNER, UPPER_LIP_CENTER, WRIST_SHOULDER_PAIRS,
};

/// calculate_distance returns the 2D euclidean distance between two landmarks.
pub fn calculate_distance(point1: &Landmark, point2: &Landmark) -> f64 {
    point1.distance_to(point2)
}

/// mouth_aspect_ratio computes the lip separation over the mouth corner separation.
///
/// Returns `None` when the mouth corners coincide.
///
/// # Arguments
/// * `face` - face mesh landmarks, at least 468 points
///
/// # Returns
/// * `Option<f64>`
pub fn mouth_aspect_ratio(face: &[Landmark]) -> Option<f64> {
    let mouth_width = calculate_distance(&face[MOUTH_RIGHT_CORNER], &face[MOUTH_LEFT_CORNER]);
    let mouth_height = calculate_distance(&face[UPPER_LIP_CENTER], &face[LOWER_LIP_CENTER]);

    if mouth_width == 0.0 {
        return None
    }
    Some(mouth_height / mouth_width)
}

/// detect_hands_up checks whether either wrist sits above its own shoulder.
///
/// Only the vertical coordinate is compared, image `y` grows downward.
/// Frames without pose landmarks never count as hands up.
pub fn detect_hands_up(frame: &LandmarkFrame) -> bool {
    let pose = match &frame.pose_landmarks {
        None => return false,
        Some(pose) => pose,
    };

    WRIST_SHOULDER_PAIRS
        .iter()
        .any(|&(wrist, shoulder)| pose[wrist].y < pose[shoulder].y)
}

/// detect_smile checks whether the mouth aspect ratio exceeds `threshold`.
///
/// # Arguments
/// * `frame` - &LandmarkFrame
/// * `threshold` - smile threshold on the mouth aspect ratio
///
/// # Returns
/// * `bool`
pub fn detect_smile(frame: &LandmarkFrame, threshold: f64) -> bool {
    let face = match &frame.face_landmarks {
        None => return false,
        Some(face) => face,
    };

    match mouth_aspect_ratio(face) {
        None => false,
        Some(ratio) => ratio > threshold,
    }
}
