use anyhow::{Error, Result};
use ndarray::{Array2, ArrayView2};
use crate::utils::coordinate::Landmark;

/// Number of values per landmark in a flat detector buffer (x, y, z).
pub const LANDMARK_STRIDE: usize = 3;

/// flat_to_array2 reshapes a flat detector buffer into a `(n, 3)` array.
///
/// # Arguments
/// * `v` - flat slice of x, y, z triples
///
/// # Returns
/// * `Result<Array2<f32>, Error>`
pub fn flat_to_array2(v: &[f32]) -> Result<Array2<f32>, Error> {
    if v.len() % LANDMARK_STRIDE != 0 {
        return Err(Error::msg(format!(
            "invalid landmark buffer length: {} (expected a multiple of {})",
            v.len(),
            LANDMARK_STRIDE
        )))
    }

    let arr = Array2::from_shape_vec((v.len() / LANDMARK_STRIDE, LANDMARK_STRIDE), v.to_vec())?;
    Ok(arr)
}

/// array2_to_landmarks converts the rows of a `(n, 3)` array into landmarks.
pub fn array2_to_landmarks(arr: ArrayView2<f32>) -> Vec<Landmark> {
    arr.rows()
        .into_iter()
        .map(|row| Landmark::with_depth(f64::from(row[0]), f64::from(row[1]), f64::from(row[2])))
        .collect()
}

/// f32_to_landmark_vec decodes a flat x, y, z buffer into a landmark sequence.
///
/// # Arguments
/// * `v` - flat slice of x, y, z triples
///
/// # Returns
/// * `Result<Vec<Landmark>, Error>`
pub fn f32_to_landmark_vec(v: &[f32]) -> Result<Vec<Landmark>, Error> {
    let arr = flat_to_array2(v)?;
    Ok(array2_to_landmarks(arr.view()))
}
