pub mod footprint;
pub mod network;
mod width_error;
mod width_map;

pub use width_error::WidthError;
pub use width_map::{EstimationOutcome, EstimationSummary, WidthMap};
