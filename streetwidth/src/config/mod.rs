mod estimation;

pub use estimation::EstimationConfig;
