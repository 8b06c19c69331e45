use geo::{Coord, Euclidean, Length, Line, Rect};

/// a transient slice of one segment's centerline, the unit of distance
/// sampling. produced by [`crate::algorithm::sampling::sample_polyline`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubSegment {
    pub start: Coord<f64>,
    pub end: Coord<f64>,
}

impl SubSegment {
    pub fn new(start: Coord<f64>, end: Coord<f64>) -> SubSegment {
        SubSegment { start, end }
    }

    pub fn to_line(&self) -> Line<f64> {
        Line::new(self.start, self.end)
    }

    pub fn length(&self) -> f64 {
        Euclidean.length(&self.to_line())
    }

    /// axis-aligned bounds of the sub-segment expanded by `margin` on every
    /// side, the query window for proximity probes.
    pub fn expanded_bounds(&self, margin: f64) -> Rect<f64> {
        let min = Coord {
            x: self.start.x.min(self.end.x) - margin,
            y: self.start.y.min(self.end.y) - margin,
        };
        let max = Coord {
            x: self.start.x.max(self.end.x) + margin,
            y: self.start.y.max(self.end.y) + margin,
        };
        Rect::new(min, max)
    }
}
