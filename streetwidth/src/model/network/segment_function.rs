use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// role of a segment in the network. internal segments are connector
/// geometry inside a junction; they only appear in the internal-aware view
/// of the network and inherit their width from adjacent normal segments.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentFunction {
    #[default]
    Normal,
    Internal,
}

impl SegmentFunction {
    pub fn is_internal(&self) -> bool {
        matches!(self, SegmentFunction::Internal)
    }
}

impl Display for SegmentFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentFunction::Normal => write!(f, "normal"),
            SegmentFunction::Internal => write!(f, "internal"),
        }
    }
}
