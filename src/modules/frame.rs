//! Per-frame landmark snapshot handed over by the holistic detector.

use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use crate::utils::coordinate::Landmark;
use crate::utils::landmark_index::{FACE_MESH_LEN, POSE_LEN};
use crate::utils::utils::f32_to_landmark_vec;

/// Immutable snapshot of one detector result.
///
/// Either sequence may be missing when the detector lost track of the face
/// or the body on that frame. Other fields of the detector result (image,
/// hand landmarks, segmentation mask) are ignored on decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_landmarks: Option<Vec<Landmark>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pose_landmarks: Option<Vec<Landmark>>,
}

impl LandmarkFrame {
    pub fn new(face_landmarks: Option<Vec<Landmark>>, pose_landmarks: Option<Vec<Landmark>>) -> Self {
        LandmarkFrame {
            face_landmarks,
            pose_landmarks,
        }
    }

    /// from_json decodes a detector result serialized as JSON.
    ///
    /// # Arguments
    /// * `s` - JSON object with optional `faceLandmarks` and `poseLandmarks`
    ///
    /// # Returns
    /// * `Result<LandmarkFrame, Error>`
    pub fn from_json(s: &str) -> Result<Self, Error> {
        let frame: LandmarkFrame = serde_json::from_str(s)?;
        Ok(frame)
    }

    /// from_flat builds a frame from flat x, y, z buffers.
    ///
    /// # Arguments
    /// * `face` - optional flat face mesh buffer
    /// * `pose` - optional flat pose buffer
    ///
    /// # Returns
    /// * `Result<LandmarkFrame, Error>`
    pub fn from_flat(face: Option<&[f32]>, pose: Option<&[f32]>) -> Result<Self, Error> {
        let face_landmarks = face.map(f32_to_landmark_vec).transpose()?;
        let pose_landmarks = pose.map(f32_to_landmark_vec).transpose()?;
        Ok(LandmarkFrame::new(face_landmarks, pose_landmarks))
    }

    pub fn has_landmarks(&self) -> bool {
        self.face_landmarks.is_some() || self.pose_landmarks.is_some()
    }

    /// validate checks that present sequences hold every index the classifier reads.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(face) = &self.face_landmarks {
            if face.len() < FACE_MESH_LEN {
                return Err(Error::msg(format!(
                    "face landmarks too short: {} (expected at least {})", face.len(), FACE_MESH_LEN
                )))
            }
        }
        if let Some(pose) = &self.pose_landmarks {
            if pose.len() < POSE_LEN {
                return Err(Error::msg(format!(
                    "pose landmarks too short: {} (expected at least {})", pose.len(), POSE_LEN
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::utils::coordinate::Landmark;
    use crate::utils::landmark_index::*;

    /// pose with both wrists below their shoulders
    pub(crate) fn pose_hands_down() -> Vec<Landmark> {
        let mut pose = vec![Landmark::new(0.5, 0.5); POSE_LEN];
        pose[LEFT_SHOULDER] = Landmark::new(0.6, 0.4);
        pose[RIGHT_SHOULDER] = Landmark::new(0.4, 0.4);
        pose[LEFT_WRIST] = Landmark::new(0.65, 0.8);
        pose[RIGHT_WRIST] = Landmark::new(0.35, 0.8);
        pose
    }

    /// face whose mouth spans `width` between the corners and `height` between the lips
    pub(crate) fn face_with_mouth(width: f64, height: f64) -> Vec<Landmark> {
        let mut face = vec![Landmark::new(0.5, 0.5); FACE_MESH_LEN];
        face[MOUTH_LEFT_CORNER] = Landmark::new(0.5 - width / 2.0, 0.6);
        face[MOUTH_RIGHT_CORNER] = Landmark::new(0.5 + width / 2.0, 0.6);
        face[UPPER_LIP_CENTER] = Landmark::new(0.5, 0.6 - height / 2.0);
        face[LOWER_LIP_CENTER] = Landmark::new(0.5, 0.6 + height / 2.0);
        face
    }
}
