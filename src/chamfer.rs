//! Geodesic chamfer distance propagation.
//!
//! Chamfer distances approximate euclidean distances by propagating fixed
//! per-step costs across the grid in raster-order sweeps. Propagation starts
//! from a marker set (distance 0) and is constrained to a foreground mask:
//! paths never cross background, so the result is a geodesic distance within
//! the mask.

#[allow(unused_imports)]
use rten_tensor::prelude::*;
use rten_tensor::{NdTensor, NdTensorView};

use crate::errors::MeasureError;

/// Element type of a chamfer distance map.
///
/// Implemented for `f32` (real-valued weights, eg. quasi-euclidean) and for
/// `u32` / `i32` (integer weights such as the 3-4 Borgefors pair, where the
/// result is exact integer arithmetic).
pub trait ChamferWeight: Copy + PartialOrd {
    /// Distance assigned to marker voxels.
    const ZERO: Self;

    /// Sentinel held by voxels outside the mask, and by foreground voxels
    /// unreachable from any marker.
    const UNREACHABLE: Self;

    /// Add a step weight to a distance, saturating at [`UNREACHABLE`] so
    /// integer propagation cannot wrap.
    ///
    /// [`UNREACHABLE`]: ChamferWeight::UNREACHABLE
    fn add_weight(self, weight: Self) -> Self;
}

impl ChamferWeight for f32 {
    const ZERO: Self = 0.;
    const UNREACHABLE: Self = f32::INFINITY;

    fn add_weight(self, weight: Self) -> Self {
        self + weight
    }
}

impl ChamferWeight for u32 {
    const ZERO: Self = 0;
    const UNREACHABLE: Self = u32::MAX;

    fn add_weight(self, weight: Self) -> Self {
        self.saturating_add(weight)
    }
}

impl ChamferWeight for i32 {
    const ZERO: Self = 0;
    const UNREACHABLE: Self = i32::MAX;

    fn add_weight(self, weight: Self) -> Self {
        self.saturating_add(weight)
    }
}

/// Step costs for 2D chamfer propagation over the 8-connected neighborhood.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChamferWeights<T> {
    /// Cost of a diagonal step.
    pub diag: T,
    /// Cost of an orthogonal (horizontal or vertical) step.
    pub ortho: T,
}

impl<T> ChamferWeights<T> {
    pub fn new(diag: T, ortho: T) -> ChamferWeights<T> {
        ChamferWeights { diag, ortho }
    }
}

impl ChamferWeights<f32> {
    /// Weights √2 and 1, approximating the euclidean metric.
    pub fn quasi_euclidean() -> ChamferWeights<f32> {
        ChamferWeights {
            diag: std::f32::consts::SQRT_2,
            ortho: 1.,
        }
    }
}

impl Default for ChamferWeights<f32> {
    fn default() -> Self {
        Self::quasi_euclidean()
    }
}

/// Step costs for 3D chamfer propagation over the 26-connected neighborhood.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChamferWeights3d<T> {
    /// Cost of an axis-aligned step.
    pub ortho: T,
    /// Cost of an in-plane diagonal step (two coordinates change).
    pub diag2: T,
    /// Cost of a cube diagonal step (three coordinates change).
    pub diag3: T,
}

impl<T> ChamferWeights3d<T> {
    pub fn new(ortho: T, diag2: T, diag3: T) -> ChamferWeights3d<T> {
        ChamferWeights3d {
            ortho,
            diag2,
            diag3,
        }
    }
}

impl ChamferWeights3d<f32> {
    /// Weights 1, √2 and √3, approximating the euclidean metric.
    pub fn quasi_euclidean() -> ChamferWeights3d<f32> {
        ChamferWeights3d {
            ortho: 1.,
            diag2: std::f32::consts::SQRT_2,
            diag3: 3f32.sqrt(),
        }
    }
}

impl Default for ChamferWeights3d<f32> {
    fn default() -> Self {
        Self::quasi_euclidean()
    }
}

/// Compute the chamfer distance from `markers` within the foreground `mask`.
///
/// Every foreground voxel of the result holds the minimal weighted length of
/// an 8-connected path to the nearest marker, where paths stay within the
/// mask. Marker voxels hold exactly [`ChamferWeight::ZERO`]; voxels outside
/// the mask, and foreground voxels unreachable from any marker, hold
/// [`ChamferWeight::UNREACHABLE`].
///
/// Forward and backward raster sweeps are repeated until no value changes.
/// A single forward/backward pair suffices for convex masks; concave masks
/// (spirals, U shapes) need more sweeps for geodesic distances to settle.
/// Termination is guaranteed since values only decrease and are bounded
/// below by zero.
///
/// Errors with [`MeasureError::ShapeMismatch`] if the inputs have different
/// shapes, and [`MeasureError::MarkerOutsideMask`] if a marker voxel is not
/// foreground.
pub fn chamfer_distance_2d<T: ChamferWeight>(
    mask: NdTensorView<bool, 2>,
    markers: NdTensorView<bool, 2>,
    weights: ChamferWeights<T>,
) -> Result<NdTensor<T, 2>, MeasureError> {
    if mask.shape() != markers.shape() {
        return Err(MeasureError::ShapeMismatch);
    }
    let [rows, cols] = mask.shape();

    let mut dist = NdTensor::full([rows, cols], T::UNREACHABLE);
    for y in 0..rows {
        for x in 0..cols {
            if markers[[y, x]] {
                if !mask[[y, x]] {
                    return Err(MeasureError::MarkerOutsideMask);
                }
                dist[[y, x]] = T::ZERO;
            }
        }
    }

    // Neighbors already visited in forward scan order, and their step costs.
    let forward = [
        (-1, -1, weights.diag),
        (-1, 0, weights.ortho),
        (-1, 1, weights.diag),
        (0, -1, weights.ortho),
    ];
    let backward = [
        (1, 1, weights.diag),
        (1, 0, weights.ortho),
        (1, -1, weights.diag),
        (0, 1, weights.ortho),
    ];

    let mut relax = |y: usize, x: usize, offsets: &[(i32, i32, T); 4]| -> bool {
        let mut modified = false;
        let current = dist[[y, x]];
        let mut best = current;
        for &(dy, dx, weight) in offsets {
            let ny = y as i32 + dy;
            let nx = x as i32 + dx;
            if ny < 0 || nx < 0 || ny >= rows as i32 || nx >= cols as i32 {
                continue;
            }
            let candidate = dist[[ny as usize, nx as usize]].add_weight(weight);
            if candidate < best {
                best = candidate;
            }
        }
        if best < current {
            dist[[y, x]] = best;
            modified = true;
        }
        modified
    };

    loop {
        let mut modified = false;
        for y in 0..rows {
            for x in 0..cols {
                if mask[[y, x]] {
                    modified |= relax(y, x, &forward);
                }
            }
        }
        for y in (0..rows).rev() {
            for x in (0..cols).rev() {
                if mask[[y, x]] {
                    modified |= relax(y, x, &backward);
                }
            }
        }
        if !modified {
            break;
        }
    }

    Ok(dist)
}

/// Volumetric variant of [`chamfer_distance_2d`] over the 26-connected
/// neighborhood.
///
/// Validation, sentinel and sweep semantics match the 2D routine.
pub fn chamfer_distance_3d<T: ChamferWeight>(
    mask: NdTensorView<bool, 3>,
    markers: NdTensorView<bool, 3>,
    weights: ChamferWeights3d<T>,
) -> Result<NdTensor<T, 3>, MeasureError> {
    if mask.shape() != markers.shape() {
        return Err(MeasureError::ShapeMismatch);
    }
    let [depth, rows, cols] = mask.shape();

    let mut dist = NdTensor::full([depth, rows, cols], T::UNREACHABLE);
    for z in 0..depth {
        for y in 0..rows {
            for x in 0..cols {
                if markers[[z, y, x]] {
                    if !mask[[z, y, x]] {
                        return Err(MeasureError::MarkerOutsideMask);
                    }
                    dist[[z, y, x]] = T::ZERO;
                }
            }
        }
    }

    // Half of the 26-neighborhood that precedes the current voxel in raster
    // scan order, with per-step costs by the number of moving coordinates.
    let mut forward = Vec::with_capacity(13);
    for dz in -1i32..=1 {
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                let before = dz < 0 || (dz == 0 && (dy < 0 || (dy == 0 && dx < 0)));
                if !before {
                    continue;
                }
                let moving = (dz != 0) as u32 + (dy != 0) as u32 + (dx != 0) as u32;
                let weight = match moving {
                    1 => weights.ortho,
                    2 => weights.diag2,
                    _ => weights.diag3,
                };
                forward.push((dz, dy, dx, weight));
            }
        }
    }
    let backward: Vec<_> = forward
        .iter()
        .map(|&(dz, dy, dx, weight)| (-dz, -dy, -dx, weight))
        .collect();

    let mut relax = |z: usize, y: usize, x: usize, offsets: &[(i32, i32, i32, T)]| -> bool {
        let current = dist[[z, y, x]];
        let mut best = current;
        for &(dz, dy, dx, weight) in offsets {
            let nz = z as i32 + dz;
            let ny = y as i32 + dy;
            let nx = x as i32 + dx;
            if nz < 0
                || ny < 0
                || nx < 0
                || nz >= depth as i32
                || ny >= rows as i32
                || nx >= cols as i32
            {
                continue;
            }
            let candidate = dist[[nz as usize, ny as usize, nx as usize]].add_weight(weight);
            if candidate < best {
                best = candidate;
            }
        }
        if best < current {
            dist[[z, y, x]] = best;
            true
        } else {
            false
        }
    };

    loop {
        let mut modified = false;
        for z in 0..depth {
            for y in 0..rows {
                for x in 0..cols {
                    if mask[[z, y, x]] {
                        modified |= relax(z, y, x, &forward);
                    }
                }
            }
        }
        for z in (0..depth).rev() {
            for y in (0..rows).rev() {
                for x in (0..cols).rev() {
                    if mask[[z, y, x]] {
                        modified |= relax(z, y, x, &backward);
                    }
                }
            }
        }
        if !modified {
            break;
        }
    }

    Ok(dist)
}
