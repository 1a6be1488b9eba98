//! Provides geometric measurement and analysis functions for 2D and 3D
//! binary images.
//!
//! This includes:
//!
//! - 2D and 3D vectors and related math
//! - 2D shapes and associated predicates: [Point], [Line], [Rect]
//! - Chamfer distance transforms over binary masks, constrained to remain
//!   inside the mask ([chamfer_distance_2d], [chamfer_distance_3d])
//! - Connected component labeling of graphs and merging of node selections
//!   ([label_nodes], [merge_nodes])
//! - Equivalent inertia ellipsoids of labeled regions ([inertia_ellipsoids])
//! - Topological and metric measures: Euler numbers and Crofton perimeter
//!   ([euler_number_2d], [euler_number_3d], [perimeter_2d])
//! - Rasterization of synthetic shapes for building test images
//!   ([discrete_disc], [discrete_ball], [discrete_ellipsoid],
//!   [discrete_capsule])

mod chamfer;
mod ellipsoid;
mod errors;
mod generate;
mod graph;
mod labels;
mod math;
mod measures;
mod shapes;

pub use chamfer::{
    chamfer_distance_2d, chamfer_distance_3d, ChamferWeight, ChamferWeights, ChamferWeights3d,
};
pub use ellipsoid::{inertia_ellipsoid, inertia_ellipsoids, Ellipsoid};
pub use errors::MeasureError;
pub use generate::{
    discrete_ball, discrete_capsule, discrete_disc, discrete_ellipsoid, fill_rect,
};
pub use graph::{label_nodes, merge_nodes};
pub use labels::{find_labels, label_coords_3d};
pub use math::{Vec2, Vec3};
pub use measures::{euler_number_2d, euler_number_3d, perimeter_2d, Connectivity, PerimeterDirs};
pub use shapes::{Coord, Line, LineF, Point, PointF, Rect, RectF};
