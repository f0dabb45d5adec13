use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::debug;

use crate::geometry::{Integer, Size};
use crate::placement::{self, Placement};
use crate::rectangle::Rectangle;

/// Dump token for a cell no block covers.
pub const EMPTY_CELL: &str = "0";

/// Layout is the ordered set of placed blocks. Insertion order is placement order and blocks are
/// never removed or moved, so the layout only ever grows.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Layout {
    rectangles: Vec<Rectangle>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    /// Bounding box width, 0 for an empty layout. Recomputed on every call.
    pub fn width(&self) -> Integer {
        let min_x = self.rectangles.iter().map(Rectangle::x).min();
        let max_x = self.rectangles.iter().map(|r| r.geometry().right()).max();
        match (min_x, max_x) {
            (Some(min_x), Some(max_x)) => max_x - min_x,
            _ => 0,
        }
    }

    /// Bounding box height, 0 for an empty layout. Recomputed on every call.
    pub fn height(&self) -> Integer {
        let min_y = self.rectangles.iter().map(Rectangle::y).min();
        let max_y = self.rectangles.iter().map(|r| r.geometry().bottom()).max();
        match (min_y, max_y) {
            (Some(min_y), Some(max_y)) => max_y - min_y,
            _ => 0,
        }
    }

    /// Place a new block without overlapping any earlier one and return it. Always succeeds:
    /// growing the bounding box is the fallback when no gap inside it fits. Names are not checked
    /// for uniqueness.
    pub fn place(&mut self, name: impl Into<String>, size: Size) -> &Rectangle {
        let name = name.into();
        let placement = placement::plan(&self.rectangles, self.width(), self.height(), size);
        match &placement {
            Placement::Interior(geometry) => {
                debug!("block {} ({}) placed in a gap at {:?}", name, size, geometry)
            }
            Placement::Extended(extension) => debug!(
                "block {} ({}) extends {:?} {:?} to {}x{}",
                name,
                size,
                extension.direction,
                extension.orientation,
                extension.bounding_width,
                extension.bounding_height
            ),
        }
        let index = self.rectangles.len();
        self.rectangles.push(Rectangle::new(name, placement.geometry()));
        &self.rectangles[index]
    }

    /// Name of the earliest placed block covering cell (x, y), if any.
    pub fn name_at(&self, x: Integer, y: Integer) -> Option<&str> {
        self.rectangles
            .iter()
            .find(|rectangle| rectangle.contains(x, y))
            .map(Rectangle::name)
    }

    /// One row per x in [0, width), each holding the space separated cell tokens for y in
    /// [0, height). Empty layouts produce no rows.
    pub fn dump(&self) -> Vec<String> {
        let height = self.height();
        (0..self.width())
            .map(|x| {
                (0..height)
                    .map(|y| self.name_at(x, y).unwrap_or(EMPTY_CELL))
                    .join(" ")
            })
            .collect()
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.dump().join("\n"))
    }
}
