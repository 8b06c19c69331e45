use super::SubSegment;
use crate::model::footprint::FootprintIndex;
use geo::{Distance, Euclidean};

/// minimum Euclidean distance from a sub-segment to any boundary edge of
/// any nearby footprint, capped at `search_radius`. when nothing is within
/// the radius the radius itself is returned as a "no building nearby"
/// sentinel, which bounds probe cost on open stretches.
///
/// the index is passed explicitly on every call; it is shared and
/// read-only, so concurrent probes over it are safe.
pub fn min_distance(sub: &SubSegment, index: &FootprintIndex, search_radius: f64) -> f64 {
    let window = sub.expanded_bounds(search_radius);
    let sub_line = sub.to_line();
    let mut min_dist = search_radius;
    for footprint in index.query(&window) {
        // candidates are bounding-box matches only; distance against the
        // true boundary edges filters the false positives
        for edge in footprint.boundary.exterior().lines() {
            let dist = Euclidean.distance(&sub_line, &edge);
            if dist < min_dist {
                min_dist = dist;
            }
        }
    }
    min_dist
}
