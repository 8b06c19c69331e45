use super::{JunctionId, SegmentId};
use serde::{Deserialize, Serialize};

/// a node of the network graph. outgoing segments are used to find adjacent
/// estimated widths; incoming internal segments come from the internal-aware
/// view and must inherit a width from those neighbors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Junction {
    pub junction_id: JunctionId,
    pub outgoing: Vec<SegmentId>,
    pub incoming_internal: Vec<SegmentId>,
}

impl Junction {
    pub fn new(
        junction_id: JunctionId,
        outgoing: Vec<SegmentId>,
        incoming_internal: Vec<SegmentId>,
    ) -> Junction {
        Junction {
            junction_id,
            outgoing,
            incoming_internal,
        }
    }
}
