//! Helpers for label images, shared by the measurement routines.
//!
//! A label image is an array where each connected region of interest holds a
//! distinct positive integer and 0 denotes background.

#[allow(unused_imports)]
use rten_tensor::prelude::*;
use rten_tensor::NdTensorView;

/// Return the distinct positive labels present in `image`, in ascending
/// order.
///
/// Background (0) is never included. Works for both planar (rank 2) and
/// volumetric (rank 3) label images.
pub fn find_labels<const N: usize>(image: NdTensorView<u32, N>) -> Vec<u32> {
    let mut labels: Vec<u32> = image.iter().copied().filter(|&label| label > 0).collect();
    labels.sort_unstable();
    labels.dedup();
    labels
}

/// Return the `[z, y, x]` coordinates of all voxels of `image` holding
/// `label`, in raster-scan order.
pub fn label_coords_3d(image: NdTensorView<u32, 3>, label: u32) -> Vec<[usize; 3]> {
    let [depth, height, width] = image.shape();
    let mut coords = Vec::new();
    for z in 0..depth {
        for y in 0..height {
            for x in 0..width {
                if image[[z, y, x]] == label {
                    coords.push([z, y, x]);
                }
            }
        }
    }
    coords
}
