use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// Errors reported when validating inputs to measurement routines.
///
/// Every fallible function in this crate fails fast with one of these
/// variants and produces no partial output.
#[derive(Clone, Debug, PartialEq)]
pub enum MeasureError {
    /// Arrays that must be co-sized have different shapes.
    ShapeMismatch,
    /// A shape parameter vector has the wrong number of elements.
    InvalidParams { expected: usize, actual: usize },
    /// An operation requiring at least one element received none.
    EmptyInput,
    /// A marker voxel lies outside the foreground mask.
    MarkerOutsideMask,
    /// A graph edge or node selection references a node index that is out
    /// of range.
    InvalidEdge,
}

impl Display for MeasureError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ShapeMismatch => write!(fmt, "input arrays must have the same shape"),
            Self::InvalidParams { expected, actual } => {
                write!(
                    fmt,
                    "shape parameter vector has {} elements, expected {}",
                    actual, expected
                )
            }
            Self::EmptyInput => write!(fmt, "input must contain at least one element"),
            Self::MarkerOutsideMask => {
                write!(fmt, "marker voxels must be a subset of the foreground mask")
            }
            Self::InvalidEdge => write!(fmt, "node index is out of range"),
        }
    }
}

impl Error for MeasureError {}
