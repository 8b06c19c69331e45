mod sub_segment;

pub mod band;
pub mod estimation;
pub mod propagation;
pub mod proximity;
pub mod sampling;

pub use band::{build_band, build_network_bands, BandPolygon};
pub use estimation::{estimate_and_propagate, estimate_network_widths, estimate_width};
pub use propagation::propagate_internal_widths;
pub use proximity::min_distance;
pub use sampling::sample_polyline;
pub use sub_segment::SubSegment;
