use super::SubSegment;
use crate::model::network::SegmentId;
use crate::model::WidthError;
use geo::{Coord, Euclidean, Length, Line, LineString};
use itertools::Itertools;

/// subdivides a centerline into sub-segments no longer than
/// `max_sub_length`, in traversal order, with no gaps or overlaps. each
/// consecutive vertex pair longer than the bound is split into the smallest
/// number of equal pieces that satisfies it; shorter pairs are kept whole
/// and zero-length pairs are skipped.
///
/// a polyline with fewer than 2 distinct consecutive points is a caller
/// precondition violation and fails fast, so that a legitimate width of 0
/// is never conflated with bad input geometry.
pub fn sample_polyline(
    segment_id: &SegmentId,
    centerline: &LineString<f64>,
    max_sub_length: f64,
) -> Result<Vec<SubSegment>, WidthError> {
    if max_sub_length <= 0.0 || !max_sub_length.is_finite() {
        return Err(WidthError::ConfigurationError(format!(
            "max_sub_length must be positive and finite, found {max_sub_length}"
        )));
    }
    let n_distinct = centerline.0.iter().dedup().count();
    if n_distinct < 2 {
        return Err(WidthError::DegenerateGeometry(
            segment_id.clone(),
            format!(
                "centerline has fewer than 2 distinct points ({} total)",
                centerline.0.len()
            ),
        ));
    }

    let mut sub_segments: Vec<SubSegment> = vec![];
    for (s0, s1) in centerline.0.iter().tuple_windows() {
        let edge_length = Euclidean.length(&Line::new(*s0, *s1));
        if edge_length == 0.0 {
            continue;
        }
        let n_pieces = if edge_length > max_sub_length {
            (edge_length / max_sub_length).ceil() as usize
        } else {
            1
        };
        let direction = Coord {
            x: (s1.x - s0.x) / edge_length,
            y: (s1.y - s0.y) / edge_length,
        };
        let piece_length = edge_length / n_pieces as f64;
        for piece in 0..n_pieces {
            let start = *s0 + direction * (piece_length * piece as f64);
            // snap the final piece onto the vertex so pieces partition the
            // edge exactly despite accumulated floating point error
            let end = if piece + 1 == n_pieces {
                *s1
            } else {
                *s0 + direction * (piece_length * (piece + 1) as f64)
            };
            sub_segments.push(SubSegment::new(start, end));
        }
    }

    Ok(sub_segments)
}
