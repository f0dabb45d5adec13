//! Synthetic block layouts: uniquely named rectangles placed one at a time on an integer grid,
//! filling gaps inside the current bounding box before growing it, plus a plain text dump of which
//! block occupies each cell.

pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod layout;
pub mod placement;
pub mod rectangle;
pub mod source;

pub use config::GeneratorArgs;
pub use error::LayoutError;
pub use generator::{run, Generator};
pub use geometry::{Geometry, Integer, Size};
pub use layout::Layout;
pub use rectangle::Rectangle;
pub use source::{CatalogSizeSource, FixedSizeSource, NameGenerator, SequentialNames, SizeSource};
