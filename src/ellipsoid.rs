//! Per-label inertia ellipsoid estimation.
//!
//! The inertia ellipsoid of a region is the ellipsoid whose second moments
//! of mass match those of the region, used as a compact shape descriptor.

use nalgebra::{Matrix3, SymmetricEigen, Vector3};
#[allow(unused_imports)]
use rten_tensor::prelude::*;
use rten_tensor::NdTensorView;

use crate::errors::MeasureError;
use crate::labels::{find_labels, label_coords_3d};

/// Moment-matching ellipsoid of a voxel region.
///
/// Angles use the convention `R = Rz(psi) · Ry(theta) · Rx(phi)`, mapping
/// ellipsoid-frame coordinates (axes sorted by descending radius) to world
/// XYZ coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde_traits", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsoid {
    /// Center in physical units, as (x, y, z).
    pub center: [f64; 3],
    /// Semi-axis radii, in descending order.
    pub radii: [f64; 3],
    /// Euler angles (phi, theta, psi) in degrees.
    pub angles: [f64; 3],
}

/// Compute the inertia ellipsoid of each labeled region in `labels`.
///
/// `spacing` gives the physical size of a voxel along (x, y, z); pass
/// `[1., 1., 1.]` for results in voxel units. Returns one [`Ellipsoid`] per
/// distinct positive label, together with the ascending label list.
///
/// Errors with [`MeasureError::EmptyInput`] if the image contains no
/// positive label.
pub fn inertia_ellipsoids(
    labels: NdTensorView<u32, 3>,
    spacing: [f64; 3],
) -> Result<(Vec<Ellipsoid>, Vec<u32>), MeasureError> {
    let label_list = find_labels(labels);
    if label_list.is_empty() {
        return Err(MeasureError::EmptyInput);
    }

    let ellipsoids = label_list
        .iter()
        .map(|&label| ellipsoid_of_coords(&label_coords_3d(labels, label), spacing))
        .collect();

    Ok((ellipsoids, label_list))
}

/// Compute the inertia ellipsoid of the single region given by a binary
/// mask.
///
/// Errors with [`MeasureError::EmptyInput`] if the mask has no foreground
/// voxel.
pub fn inertia_ellipsoid(
    mask: NdTensorView<bool, 3>,
    spacing: [f64; 3],
) -> Result<Ellipsoid, MeasureError> {
    let [depth, height, width] = mask.shape();
    let mut coords = Vec::new();
    for z in 0..depth {
        for y in 0..height {
            for x in 0..width {
                if mask[[z, y, x]] {
                    coords.push([z, y, x]);
                }
            }
        }
    }
    if coords.is_empty() {
        return Err(MeasureError::EmptyInput);
    }
    Ok(ellipsoid_of_coords(&coords, spacing))
}

/// Estimate the moment-matching ellipsoid of a voxel coordinate cloud.
///
/// `coords` holds `[z, y, x]` voxel indices and must be non-empty.
fn ellipsoid_of_coords(coords: &[[usize; 3]], spacing: [f64; 3]) -> Ellipsoid {
    let [sx, sy, sz] = spacing;
    let count = coords.len() as f64;

    // Physical coordinates and centroid.
    let points: Vec<Vector3<f64>> = coords
        .iter()
        .map(|&[z, y, x]| Vector3::new(x as f64 * sx, y as f64 * sy, z as f64 * sz))
        .collect();
    let centroid = points
        .iter()
        .fold(Vector3::zeros(), |acc, point| acc + point)
        / count;

    // Covariance of recentered coordinates. Recentering before accumulating
    // keeps the sums small relative to the coordinate magnitudes.
    let mut cov = Matrix3::zeros();
    for point in &points {
        let d = point - centroid;
        cov += d * d.transpose();
    }
    cov /= count;

    // Each voxel is a unit cell with uniformly distributed mass, which
    // contributes spacing^2 / 12 per axis to the second moments. This also
    // keeps a single-voxel region non-degenerate.
    cov[(0, 0)] += sx * sx / 12.;
    cov[(1, 1)] += sy * sy / 12.;
    cov[(2, 2)] += sz * sz / 12.;

    let eigen = SymmetricEigen::new(cov);

    // Sort eigenpairs by descending eigenvalue.
    let mut order = [0, 1, 2];
    order.sort_by(|&a, &b| eigen.eigenvalues[b].total_cmp(&eigen.eigenvalues[a]));

    // A uniform solid ellipsoid with semi-axis r has second moment r^2 / 5
    // along that axis, hence the sqrt(5) scaling.
    let radii = order.map(|i| (5. * eigen.eigenvalues[i].max(0.)).sqrt());

    let mut rot = Matrix3::from_columns(&[
        eigen.eigenvectors.column(order[0]).into_owned(),
        eigen.eigenvectors.column(order[1]).into_owned(),
        eigen.eigenvectors.column(order[2]).into_owned(),
    ]);

    // Keep a right-handed frame.
    if rot.determinant() < 0. {
        for i in 0..3 {
            rot[(i, 2)] = -rot[(i, 2)];
        }
    }
    // Orient the first axis toward positive x, re-negating the third column
    // to preserve the determinant.
    if rot[(0, 0)] < 0. {
        rot = -rot;
        for i in 0..3 {
            rot[(i, 2)] = -rot[(i, 2)];
        }
    }

    Ellipsoid {
        center: [centroid.x, centroid.y, centroid.z],
        radii,
        angles: euler_angles_deg(&rot),
    }
}

/// Extract Euler angles (phi, theta, psi) in degrees from a rotation matrix,
/// for the convention `R = Rz(psi) · Ry(theta) · Rx(phi)`.
///
/// When the rotation projected onto the first two axes is near zero (`cy`
/// below the threshold), psi is no longer determined independently of phi;
/// the fallback fixes psi = 0 and extracts phi from the second row.
fn euler_angles_deg(rot: &Matrix3<f64>) -> [f64; 3] {
    let cy = rot[(0, 0)].hypot(rot[(1, 0)]);

    let (phi, theta, psi);
    if cy > 16. * f64::EPSILON {
        phi = rot[(2, 1)].atan2(rot[(2, 2)]);
        theta = (-rot[(2, 0)]).atan2(cy);
        psi = rot[(1, 0)].atan2(rot[(0, 0)]);
    } else {
        phi = (-rot[(1, 2)]).atan2(rot[(1, 1)]);
        theta = (-rot[(2, 0)]).atan2(cy);
        psi = 0.;
    }

    [phi.to_degrees(), theta.to_degrees(), psi.to_degrees()]
}

/// Build the rotation matrix for Euler angles (phi, theta, psi) in degrees,
/// inverse of [`euler_angles_deg`].
pub(crate) fn euler_rotation(phi: f64, theta: f64, psi: f64) -> Matrix3<f64> {
    let (sp, cp) = phi.to_radians().sin_cos();
    let (st, ct) = theta.to_radians().sin_cos();
    let (ss, cs) = psi.to_radians().sin_cos();

    let rx = Matrix3::new(1., 0., 0., 0., cp, -sp, 0., sp, cp);
    let ry = Matrix3::new(ct, 0., st, 0., 1., 0., -st, 0., ct);
    let rz = Matrix3::new(cs, -ss, 0., ss, cs, 0., 0., 0., 1.);

    rz * ry * rx
}
