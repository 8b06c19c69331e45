mod footprint;
mod footprint_id;
mod footprint_index;

pub use footprint::Footprint;
pub use footprint_id::FootprintId;
pub use footprint_index::FootprintIndex;
