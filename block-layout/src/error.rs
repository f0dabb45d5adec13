use thiserror::Error;

use crate::geometry::Integer;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LayoutError {
    /// A block extent must be strictly positive along both axes.
    #[error("invalid extent {w}x{h}: width and height must both be positive")]
    InvalidExtent { w: Integer, h: Integer },

    #[error("invalid size '{0}', expected WIDTHxHEIGHT e.g. 2x3")]
    InvalidSizeSpec(String),

    #[error("size catalog is empty")]
    EmptyCatalog,
}
