//! Rasterization of synthetic shapes into binary masks.
//!
//! These routines build test phantoms for the measurement functions: a voxel
//! belongs to a shape iff its center (at integer coordinates) lies inside
//! the continuous shape. Shape parameters are passed as flat vectors and
//! validated for exact length.

use nalgebra::Vector3;
#[allow(unused_imports)]
use rten_tensor::prelude::*;
use rten_tensor::{MatrixLayout, NdTensor, NdTensorViewMut};

use crate::ellipsoid::euler_rotation;
use crate::errors::MeasureError;
use crate::math::Vec3;
use crate::shapes::Rect;

fn check_params(params: &[f32], expected: usize) -> Result<(), MeasureError> {
    if params.len() != expected {
        return Err(MeasureError::InvalidParams {
            expected,
            actual: params.len(),
        });
    }
    Ok(())
}

/// Fill all points inside `rect` in `mask` with `value`.
pub fn fill_rect<T: Copy>(mut mask: NdTensorViewMut<T, 2>, rect: Rect, value: T) {
    let bounds = Rect::from_hw(mask.rows() as i32, mask.cols() as i32);
    let clamped = rect.clamp(bounds);
    for y in clamped.top()..clamped.bottom() {
        for x in clamped.left()..clamped.right() {
            mask[[y as usize, x as usize]] = value;
        }
    }
}

/// Rasterize a disc into a planar mask of `shape` (rows, cols).
///
/// `params` is `[cx, cy, r]`: center X and Y, then radius.
pub fn discrete_disc(shape: [usize; 2], params: &[f32]) -> Result<NdTensor<bool, 2>, MeasureError> {
    check_params(params, 3)?;
    let (cx, cy, r) = (params[0], params[1], params[2]);

    let [rows, cols] = shape;
    let mut mask = NdTensor::full(shape, false);
    for y in 0..rows {
        for x in 0..cols {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if dx * dx + dy * dy <= r * r {
                mask[[y, x]] = true;
            }
        }
    }
    Ok(mask)
}

/// Rasterize a ball into a volumetric mask of `shape` (depth, rows, cols).
///
/// `params` is `[cx, cy, cz, r]`: center X, Y and Z, then radius.
pub fn discrete_ball(shape: [usize; 3], params: &[f32]) -> Result<NdTensor<bool, 3>, MeasureError> {
    check_params(params, 4)?;
    let (cx, cy, cz, r) = (params[0], params[1], params[2], params[3]);

    let [depth, rows, cols] = shape;
    let mut mask = NdTensor::full(shape, false);
    for z in 0..depth {
        for y in 0..rows {
            for x in 0..cols {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                let dz = z as f32 - cz;
                if dx * dx + dy * dy + dz * dz <= r * r {
                    mask[[z, y, x]] = true;
                }
            }
        }
    }
    Ok(mask)
}

/// Rasterize a solid ellipsoid into a volumetric mask of `shape`
/// (depth, rows, cols).
///
/// `params` is `[cx, cy, cz, rx, ry, rz, phi, theta, psi]`: center, semi-axis
/// radii, then Euler angles in degrees using the same convention as
/// [`Ellipsoid`](crate::Ellipsoid).
pub fn discrete_ellipsoid(
    shape: [usize; 3],
    params: &[f32],
) -> Result<NdTensor<bool, 3>, MeasureError> {
    check_params(params, 9)?;
    let center = Vector3::new(params[0] as f64, params[1] as f64, params[2] as f64);
    let radii = [params[3] as f64, params[4] as f64, params[5] as f64];
    let rot = euler_rotation(params[6] as f64, params[7] as f64, params[8] as f64);

    let [depth, rows, cols] = shape;
    let mut mask = NdTensor::full(shape, false);
    for z in 0..depth {
        for y in 0..rows {
            for x in 0..cols {
                let p = Vector3::new(x as f64, y as f64, z as f64);
                // Map into the ellipsoid frame and test against the unit
                // ball.
                let u = rot.transpose() * (p - center);
                let norm = (u.x / radii[0]).powi(2)
                    + (u.y / radii[1]).powi(2)
                    + (u.z / radii[2]).powi(2);
                if norm <= 1. {
                    mask[[z, y, x]] = true;
                }
            }
        }
    }
    Ok(mask)
}

/// Rasterize a capsule (a segment swept by a ball) into a volumetric mask of
/// `shape` (depth, rows, cols).
///
/// `params` is `[x1, y1, z1, x2, y2, z2, r]`: the two endpoints of the axis
/// segment, then the radius.
pub fn discrete_capsule(
    shape: [usize; 3],
    params: &[f32],
) -> Result<NdTensor<bool, 3>, MeasureError> {
    check_params(params, 7)?;
    let start = Vec3::from_xyz(params[0], params[1], params[2]);
    let end = Vec3::from_xyz(params[3], params[4], params[5]);
    let r = params[6];

    let [depth, rows, cols] = shape;
    let mut mask = NdTensor::full(shape, false);
    for z in 0..depth {
        for y in 0..rows {
            for x in 0..cols {
                let p = Vec3::from_xyz(x as f32, y as f32, z as f32);
                if p.segment_distance(start, end) <= r {
                    mask[[z, y, x]] = true;
                }
            }
        }
    }
    Ok(mask)
}
