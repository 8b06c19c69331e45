use super::network::SegmentId;
use super::WidthError;
use std::collections::HashMap;
use std::fmt::Display;

/// estimated street widths keyed by segment id. covers directly-sampled
/// drivable segments and, after propagation, internal connector segments.
/// widths are always finite and non-negative.
pub type WidthMap = HashMap<SegmentId, f64>;

/// result of estimating widths across a network. per-segment failures are
/// local: one bad segment never aborts estimation for the rest, so callers
/// receive a partial width map plus the failed ids and reasons.
#[derive(Debug, Clone, Default)]
pub struct EstimationOutcome {
    pub widths: WidthMap,
    pub failures: Vec<(SegmentId, WidthError)>,
    /// statistics over the direct estimation pass, before propagation.
    pub summary: EstimationSummary,
}

/// counts and mean width over the directly-estimated segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimationSummary {
    pub n_estimated: usize,
    pub n_total: usize,
    pub mean_width: Option<f64>,
}

impl EstimationSummary {
    pub fn new(n_estimated: usize, n_total: usize, width_sum: f64) -> EstimationSummary {
        let mean_width = if n_estimated == 0 {
            None
        } else {
            Some(width_sum / n_estimated as f64)
        };
        EstimationSummary {
            n_estimated,
            n_total,
            mean_width,
        }
    }
}

impl Display for EstimationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mean_width {
            Some(mean) => write!(
                f,
                "estimated street width for {} of {} segments, avg was {:.3}",
                self.n_estimated, self.n_total, mean
            ),
            None => write!(
                f,
                "estimated street width for 0 of {} segments",
                self.n_total
            ),
        }
    }
}
