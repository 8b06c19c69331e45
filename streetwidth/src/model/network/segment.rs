use super::{SegmentFunction, SegmentId};
use geo::{BoundingRect, LineString, Rect};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a directed piece of road geometry represented by its centerline polyline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub segment_id: SegmentId,
    pub centerline: LineString<f64>,
    /// whether general (private vehicle) traffic is allowed on this segment.
    pub allows_vehicles: bool,
    pub function: SegmentFunction,
}

impl Segment {
    pub fn new(
        segment_id: SegmentId,
        centerline: LineString<f64>,
        allows_vehicles: bool,
        function: SegmentFunction,
    ) -> Segment {
        Segment {
            segment_id,
            centerline,
            allows_vehicles,
            function,
        }
    }

    /// axis-aligned bounding box of the centerline, if it has any points.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.centerline.bounding_rect()
    }

    /// segments eligible for direct width sampling. internal connector
    /// segments receive widths by propagation instead, even when they
    /// carry a vehicle allowance.
    pub fn is_drivable(&self) -> bool {
        self.allows_vehicles && !self.function.is_internal()
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let traffic = if self.allows_vehicles {
            "allowing vehicles"
        } else {
            "closed to vehicles"
        };
        write!(
            f,
            "Segment '{}', a {} segment with {} centerline points, {}",
            self.segment_id,
            self.function,
            self.centerline.0.len(),
            traffic
        )
    }
}
