//! placement decides where the next block goes, given the blocks already placed and the current
//! bounding box. It never moves an earlier block.
//!
//! 1.  Interior first-fit: walk top-left corners (cx, cy) inside the bounding box with cx as the
//!     outer loop, trying the block as given and then rotated at each corner. The first candidate
//!     that overlaps nothing wins. A winning candidate may stick out past the bounding box, only its
//!     corner has to be inside.
//! 2.  Otherwise grow the bounding box, to the right or downwards, as given or rotated, choosing
//!     whichever of the four keeps the longest side of the new bounding box smallest.

use itertools::Itertools;
use log::trace;

use crate::geometry::{Geometry, Integer, Size};
use crate::rectangle::Rectangle;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    Original,
    Rotated,
}

impl Orientation {
    pub fn apply(&self, size: Size) -> Size {
        match self {
            Orientation::Original => size,
            Orientation::Rotated => size.rotated(),
        }
    }
}

/// Orientations in the order they are tried at each position.
const ORIENTATIONS: [Orientation; 2] = [Orientation::Original, Orientation::Rotated];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Right,
    Down,
}

/// A way of appending a block outside the current bounding box, together with the bounding box
/// size it would leave behind.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Extension {
    pub direction: Direction,
    pub orientation: Orientation,
    pub geometry: Geometry,
    pub bounding_width: Integer,
    pub bounding_height: Integer,
}

impl Extension {
    /// Longest side of the resulting bounding box. Lower keeps the layout closer to square.
    pub fn badness(&self) -> Integer {
        self.bounding_width.max(self.bounding_height)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Placement {
    Interior(Geometry),
    Extended(Extension),
}

impl Placement {
    pub fn geometry(&self) -> Geometry {
        match self {
            Placement::Interior(geometry) => *geometry,
            Placement::Extended(extension) => extension.geometry,
        }
    }
}

pub fn fits(placed: &[Rectangle], candidate: &Geometry) -> bool {
    !placed.iter().any(|rectangle| rectangle.overlaps(candidate))
}

pub fn find_interior_fit(placed: &[Rectangle], width: Integer, height: Integer, size: Size) -> Option<Geometry> {
    (0..width)
        .cartesian_product(0..height)
        .flat_map(|(cx, cy)| {
            ORIENTATIONS
                .iter()
                .map(move |orientation| Geometry::new(cx, cy, orientation.apply(size)))
        })
        .find(|candidate| fits(placed, candidate))
}

/// The four ways to grow a `width` x `height` bounding box, in tie-break order: right as given,
/// right rotated, down as given, down rotated.
pub fn extension_candidates(width: Integer, height: Integer, size: Size) -> [Extension; 4] {
    let extend = |direction: Direction, orientation: Orientation| {
        let oriented = orientation.apply(size);
        let (x, y, bounding_width, bounding_height) = match direction {
            Direction::Right => (width, 0, width + oriented.w(), height.max(oriented.h())),
            Direction::Down => (0, height, width.max(oriented.w()), height + oriented.h()),
        };
        Extension {
            direction,
            orientation,
            geometry: Geometry::new(x, y, oriented),
            bounding_width,
            bounding_height,
        }
    };
    [
        extend(Direction::Right, Orientation::Original),
        extend(Direction::Right, Orientation::Rotated),
        extend(Direction::Down, Orientation::Original),
        extend(Direction::Down, Orientation::Rotated),
    ]
}

/// Candidate with the smallest badness; the earliest candidate wins a tie.
pub fn choose_extension(width: Integer, height: Integer, size: Size) -> Extension {
    let [first, rest @ ..] = extension_candidates(width, height, size);
    trace!("extension candidate {:?} badness {}", first, first.badness());
    rest.into_iter().fold(first, |best, candidate| {
        trace!("extension candidate {:?} badness {}", candidate, candidate.badness());
        if candidate.badness() < best.badness() {
            candidate
        } else {
            best
        }
    })
}

pub fn plan(placed: &[Rectangle], width: Integer, height: Integer, size: Size) -> Placement {
    match find_interior_fit(placed, width, height, size) {
        Some(geometry) => Placement::Interior(geometry),
        None => Placement::Extended(choose_extension(width, height, size)),
    }
}
