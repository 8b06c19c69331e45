use super::Footprint;
use crate::model::WidthError;
use geo::Rect;
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{RTree, AABB};
use wkt::ToWkt;

type FootprintEnvelope = GeomWithData<Rectangle<(f64, f64)>, usize>;

/// immutable spatial index over building footprints. answers "which
/// footprints might lie within a window" in sublinear time; results may
/// include false positives that the caller must distance-filter, since
/// only bounding boxes are indexed.
pub struct FootprintIndex {
    rtree: RTree<FootprintEnvelope>,
    footprints: Vec<Footprint>,
}

impl FootprintIndex {
    /// bulk-loads an R-tree over every footprint tagged as a building.
    /// built once, queried concurrently, never mutated.
    pub fn build(footprints: Vec<Footprint>) -> Result<FootprintIndex, WidthError> {
        let buildings = footprints
            .into_iter()
            .filter(|f| f.is_building())
            .collect::<Vec<_>>();
        let mut envelopes: Vec<FootprintEnvelope> = Vec::with_capacity(buildings.len());
        for (index, footprint) in buildings.iter().enumerate() {
            let rect = footprint.bounding_rect().ok_or_else(|| {
                WidthError::InvalidFootprintGeometry(
                    footprint.footprint_id.clone(),
                    format!(
                        "cannot get bounds of boundary '{}'",
                        footprint.boundary.to_wkt()
                    ),
                )
            })?;
            let envelope = Rectangle::from_corners(rect.min().x_y(), rect.max().x_y());
            envelopes.push(GeomWithData::new(envelope, index));
        }
        let rtree = RTree::bulk_load(envelopes);
        Ok(FootprintIndex {
            rtree,
            footprints: buildings,
        })
    }

    /// windowed query over indexed footprint bounding boxes. the caller is
    /// expected to expand the window by its search radius beforehand.
    pub fn query<'a>(&'a self, window: &Rect<f64>) -> impl Iterator<Item = &'a Footprint> + 'a {
        let envelope = AABB::from_corners(window.min().x_y(), window.max().x_y());
        self.rtree
            .locate_in_envelope_intersecting(&envelope)
            .map(|e| &self.footprints[e.data])
    }

    pub fn len(&self) -> usize {
        self.footprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.footprints.is_empty()
    }
}
