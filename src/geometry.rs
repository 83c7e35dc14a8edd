use crate::error::{Error, Result};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A straight line drawn by the turtle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub p1: DVec2,
    pub p2: DVec2,
}

impl Segment {
    pub fn new(p1: DVec2, p2: DVec2) -> Self {
        Self { p1, p2 }
    }
}

/// Axis-aligned bounding box over every segment endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// `(min_x, min_y, max_x, max_y)`
    pub fn to_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min.x, self.min.y, self.max.x, self.max.y)
    }
}

/// The segments produced by one interpretation pass, in draw order.
///
/// Draw order is significant: the rasterizer derives each segment's colour from
/// its index, so segments are only ever appended.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryBuffer {
    segments: Vec<Segment>,
}

impl GeometryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Bounding box of all endpoints. Fails with [`Error::EmptyGeometry`] when nothing was drawn.
    pub fn bounds(&self) -> Result<Bounds> {
        let first = self.segments.first().ok_or(Error::EmptyGeometry)?;
        let init = Bounds {
            min: first.p1.min(first.p2),
            max: first.p1.max(first.p2),
        };
        Ok(self.segments[1..].iter().fold(init, |b, s| Bounds {
            min: b.min.min(s.p1).min(s.p2),
            max: b.max.max(s.p1).max(s.p2),
        }))
    }
}

impl<'a> IntoIterator for &'a GeometryBuffer {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
