use super::FootprintId;
use geo::{BoundingRect, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// a 2-D boundary polygon from the polygon dataset, used as a proxy for
/// "where the street ends". immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footprint {
    pub footprint_id: FootprintId,
    /// free-form category tag from the source dataset, such as
    /// "building" or "building.industrial".
    pub category: String,
    pub boundary: Polygon<f64>,
}

impl Footprint {
    pub fn new(footprint_id: FootprintId, category: String, boundary: Polygon<f64>) -> Footprint {
        Footprint {
            footprint_id,
            category,
            boundary,
        }
    }

    /// only footprints tagged as buildings participate in width estimation.
    pub fn is_building(&self) -> bool {
        self.category.contains("building")
    }

    /// axis-aligned bounding box of the boundary, if it has any points.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.boundary.bounding_rect()
    }
}
