mod junction;
mod junction_id;
mod road_network;
mod segment;
mod segment_function;
mod segment_id;

pub use junction::Junction;
pub use junction_id::JunctionId;
pub use road_network::RoadNetwork;
pub use segment::Segment;
pub use segment_function::SegmentFunction;
pub use segment_id::SegmentId;
