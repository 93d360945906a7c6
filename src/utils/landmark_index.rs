//! Fixed landmark indices of the holistic detector output.

// Face mesh (468 points)
pub const FACE_MESH_LEN: usize = 468;
pub const UPPER_LIP_CENTER: usize = 13;
pub const LOWER_LIP_CENTER: usize = 14;
pub const MOUTH_LEFT_CORNER: usize = 61;
pub const MOUTH_RIGHT_CORNER: usize = 291;

// Pose (33 points)
pub const POSE_LEN: usize = 33;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;

/// (wrist, shoulder) pairs compared by the hands-up check
pub const WRIST_SHOULDER_PAIRS: [(usize, usize); 2] = [
    (LEFT_WRIST, LEFT_SHOULDER),
    (RIGHT_WRIST, RIGHT_SHOULDER),
];
