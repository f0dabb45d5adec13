use crate::geometry::{Geometry, Integer};

/// A named block that has been placed. Rectangles are created by `Layout::place` and never move
/// afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rectangle {
    name: String,
    geometry: Geometry,
}

impl Rectangle {
    pub(crate) fn new(name: String, geometry: Geometry) -> Self {
        Self { name, geometry }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn x(&self) -> Integer {
        self.geometry.x
    }

    pub fn y(&self) -> Integer {
        self.geometry.y
    }

    pub fn w(&self) -> Integer {
        self.geometry.w
    }

    pub fn h(&self) -> Integer {
        self.geometry.h
    }

    pub fn overlaps(&self, candidate: &Geometry) -> bool {
        self.geometry.overlaps(candidate)
    }

    pub fn contains(&self, px: Integer, py: Integer) -> bool {
        self.geometry.contains(px, py)
    }
}
