use super::{Junction, Segment, SegmentId};
use crate::model::WidthError;
use itertools::Itertools;
use std::collections::HashMap;

/// in-memory road network covering both the base segments and the
/// internal-aware view of junction connector geometry. immutable once built.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    segments: HashMap<SegmentId, Segment>,
    junctions: Vec<Junction>,
}

impl RoadNetwork {
    pub fn new(segments: Vec<Segment>, junctions: Vec<Junction>) -> RoadNetwork {
        let segments = segments
            .into_iter()
            .map(|s| (s.segment_id.clone(), s))
            .collect::<HashMap<_, _>>();
        RoadNetwork {
            segments,
            junctions,
        }
    }

    pub fn n_segments(&self) -> usize {
        self.segments.len()
    }

    pub fn get_segment(&self, segment_id: &SegmentId) -> Result<&Segment, WidthError> {
        self.segments
            .get(segment_id)
            .ok_or_else(|| WidthError::NetworkMissingSegmentId(segment_id.clone()))
    }

    /// all segments ordered by id. sorted for algorithmic determinism, so
    /// that repeated runs visit segments in the same order regardless of
    /// hash map internals.
    pub fn segments_sorted(&self) -> Vec<&Segment> {
        self.segments
            .values()
            .sorted_by(|a, b| a.segment_id.cmp(&b.segment_id))
            .collect_vec()
    }

    /// junctions in their insertion order, which callers are expected to
    /// keep stable between runs.
    pub fn junctions(&self) -> &[Junction] {
        &self.junctions
    }
}
