use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::LayoutError;

pub type Integer = i64;

/// Extent of a block. Both components are strictly positive, checked when the value is built so
/// nothing downstream ever sees a degenerate block.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Size {
    w: Integer,
    h: Integer,
}

impl Size {
    pub fn new(w: Integer, h: Integer) -> Result<Self, LayoutError> {
        if w <= 0 || h <= 0 {
            return Err(LayoutError::InvalidExtent { w, h });
        }
        Ok(Self { w, h })
    }

    pub fn w(&self) -> Integer {
        self.w
    }

    pub fn h(&self) -> Integer {
        self.h
    }

    /// The same block turned by 90 degrees.
    pub fn rotated(&self) -> Self {
        Self { w: self.h, h: self.w }
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

impl FromStr for Size {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LayoutError::InvalidSizeSpec(s.to_string());
        let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let w = w.trim().parse::<Integer>().map_err(|_| invalid())?;
        let h = h.trim().parse::<Integer>().map_err(|_| invalid())?;
        Size::new(w, h)
    }
}

/// Geometry is a block's top-left corner plus its extent. Cells covered are the half-open ranges
/// [x, x + w) and [y, y + h).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Geometry {
    pub x: Integer,
    pub y: Integer,
    pub w: Integer,
    pub h: Integer,
}

impl Geometry {
    pub fn new(x: Integer, y: Integer, size: Size) -> Self {
        Self {
            x,
            y,
            w: size.w,
            h: size.h,
        }
    }

    pub fn right(&self) -> Integer {
        self.x + self.w
    }

    pub fn bottom(&self) -> Integer {
        self.y + self.h
    }

    /// True unless one rectangle lies entirely left of, right of, above or below the other.
    /// Shared edges do not count as overlap.
    pub fn overlaps(&self, other: &Geometry) -> bool {
        !(self.right() <= other.x
            || other.right() <= self.x
            || self.bottom() <= other.y
            || other.bottom() <= self.y)
    }

    pub fn contains(&self, px: Integer, py: Integer) -> bool {
        self.x <= px && px < self.right() && self.y <= py && py < self.bottom()
    }
}
