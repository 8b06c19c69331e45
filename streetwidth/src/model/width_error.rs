use thiserror::Error;

use super::footprint::FootprintId;
use super::network::{JunctionId, SegmentId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WidthError {
    #[error("segment '{0}' has degenerate geometry: {1}")]
    DegenerateGeometry(SegmentId, String),
    #[error("width is undefined for segment '{0}': no sub-segment distance samples")]
    EmptySampleSet(SegmentId),
    #[error("attempting to get segment '{0}' not in network")]
    NetworkMissingSegmentId(SegmentId),
    #[error("attempting to get junction '{0}' not in network")]
    NetworkMissingJunctionId(JunctionId),
    #[error("footprint '{0}' has invalid geometry: {1}")]
    InvalidFootprintGeometry(FootprintId, String),
    #[error("invalid estimation configuration: {0}")]
    ConfigurationError(String),
    #[error("{0}")]
    InternalError(String),
}
