use super::{propagation, proximity, sampling};
use crate::config::EstimationConfig;
use crate::model::footprint::FootprintIndex;
use crate::model::network::{RoadNetwork, Segment, SegmentId};
use crate::model::{EstimationOutcome, EstimationSummary, WidthError, WidthMap};
use kdam::tqdm;
use rayon::prelude::*;

/// estimated corridor width from a segment's sampled distances: twice the
/// mean, since each sample measures the nearer side's building face from a
/// centerline assumed to run roughly midway between the two fronts.
///
/// an empty sample list means the width is undefined and is reported as an
/// explicit error, never as a numeric zero.
pub fn estimate_width(segment_id: &SegmentId, distances: &[f64]) -> Result<f64, WidthError> {
    if distances.is_empty() {
        return Err(WidthError::EmptySampleSet(segment_id.clone()));
    }
    let mean = distances.iter().sum::<f64>() / distances.len() as f64;
    Ok(2.0 * mean)
}

/// samples one segment's centerline and probes each sub-segment against the
/// footprint index.
fn estimate_segment(
    segment: &Segment,
    index: &FootprintIndex,
    config: &EstimationConfig,
) -> Result<f64, WidthError> {
    let sub_segments =
        sampling::sample_polyline(&segment.segment_id, &segment.centerline, config.max_sub_length)?;
    let distances = sub_segments
        .iter()
        .map(|sub| proximity::min_distance(sub, index, config.search_radius))
        .collect::<Vec<f64>>();
    estimate_width(&segment.segment_id, &distances)
}

/// estimates widths for every drivable, non-internal segment of the
/// network. per-segment failures are collected into the outcome rather than
/// aborting the run. segments are visited in id order; the parallel path
/// merges per-segment results after the join, so sequential and parallel
/// runs produce identical width maps.
pub fn estimate_network_widths(
    network: &RoadNetwork,
    index: &FootprintIndex,
    config: &EstimationConfig,
) -> Result<EstimationOutcome, WidthError> {
    config.validate()?;
    let drivable = network
        .segments_sorted()
        .into_iter()
        .filter(|s| s.is_drivable())
        .collect::<Vec<_>>();
    log::info!(
        "estimating street widths for {} drivable of {} total segments against {} footprints",
        drivable.len(),
        network.n_segments(),
        index.len()
    );

    let results: Vec<(SegmentId, Result<f64, WidthError>)> = if config.parallelize {
        drivable
            .par_iter()
            .map(|s| (s.segment_id.clone(), estimate_segment(s, index, config)))
            .collect()
    } else {
        let iter = tqdm!(
            drivable.iter(),
            total = drivable.len(),
            desc = "estimating street widths"
        );
        let collected = iter
            .map(|s| (s.segment_id.clone(), estimate_segment(s, index, config)))
            .collect();
        eprintln!();
        collected
    };

    let mut widths = WidthMap::new();
    let mut failures: Vec<(SegmentId, WidthError)> = vec![];
    let mut width_sum = 0.0;
    for (segment_id, result) in results.into_iter() {
        match result {
            Ok(width) => {
                width_sum += width;
                widths.insert(segment_id, width);
            }
            Err(e) => {
                log::warn!("failed to estimate width for segment '{segment_id}': {e}");
                failures.push((segment_id, e));
            }
        }
    }

    let summary = EstimationSummary::new(widths.len(), network.n_segments(), width_sum);
    log::info!("{summary}");
    Ok(EstimationOutcome {
        widths,
        failures,
        summary,
    })
}

/// full pipeline: direct estimation over drivable segments, then a single
/// propagation pass onto internal connector segments. propagation runs
/// strictly after estimation since it reads the complete width map.
pub fn estimate_and_propagate(
    network: &RoadNetwork,
    index: &FootprintIndex,
    config: &EstimationConfig,
) -> Result<EstimationOutcome, WidthError> {
    let mut outcome = estimate_network_widths(network, index, config)?;
    propagation::propagate_internal_widths(&mut outcome.widths, network)?;
    Ok(outcome)
}
