use crate::model::network::{RoadNetwork, SegmentId};
use crate::model::{WidthError, WidthMap};
use geo::{Coord, LineString, Polygon};
use itertools::Itertools;
use std::f64::consts::PI;

/// closed band shape tracing a constant-width corridor around a centerline,
/// used to visually QA a width estimate. derived per segment and never
/// persisted in the width map.
#[derive(Debug, Clone, PartialEq)]
pub struct BandPolygon {
    pub polygon: Polygon<f64>,
    /// true when at least one corner offset hit the sharp-turn clamp.
    pub clamped: bool,
}

/// builds the band polygon for a centerline and width. the left and right
/// boundary sequences are built independently in a single pass over the
/// vertices, then glued (right side reversed) into one closed loop, giving
/// two boundary points per distinct centerline vertex.
///
/// interior corners use a miter offset along the angle bisector, scaled by
/// `(width/2) / sin(turn_angle/2)` so the band stays `width` wide measured
/// perpendicular to each edge. near a full reversal that scale diverges;
/// the offset magnitude is clamped to `offset_clamp_factor * width` and the
/// band is flagged instead of emitting non-finite coordinates.
pub fn build_band(
    segment_id: &SegmentId,
    centerline: &LineString<f64>,
    width: f64,
    offset_clamp_factor: f64,
) -> Result<BandPolygon, WidthError> {
    if width < 0.0 || !width.is_finite() {
        return Err(WidthError::ConfigurationError(format!(
            "band width must be non-negative and finite, found {width}"
        )));
    }
    let points = centerline.0.iter().copied().dedup().collect::<Vec<_>>();
    if points.len() < 2 {
        return Err(WidthError::DegenerateGeometry(
            segment_id.clone(),
            format!(
                "centerline has fewer than 2 distinct points ({} total)",
                centerline.0.len()
            ),
        ));
    }
    let directions = points
        .windows(2)
        .map(|pair| unit(pair[1] - pair[0]))
        .collect::<Vec<_>>();

    let half = 0.5 * width;
    let clamp_limit = offset_clamp_factor * width;
    let mut clamped = false;
    let mut left: Vec<Coord<f64>> = Vec::with_capacity(points.len());
    let mut right: Vec<Coord<f64>> = Vec::with_capacity(points.len());

    // first vertex: perpendicular offset on the first edge
    let first_normal = perpendicular(directions[0]);
    left.push(points[0] + first_normal * half);
    right.push(points[0] - first_normal * half);

    for i in 1..points.len() - 1 {
        let v_before = directions[i - 1];
        let v_in = directions[i];
        let difference = v_in - v_before;
        if difference == (Coord { x: 0.0, y: 0.0 }) {
            // colinear directions degenerate to the straight-segment rule
            let normal = perpendicular(v_in);
            left.push(points[i] + normal * half);
            right.push(points[i] - normal * half);
            continue;
        }
        // signed turn angle between the reversed incoming direction and the
        // outgoing direction, normalized to [0, 2*pi)
        let mut turn_angle = v_in.y.atan2(v_in.x) - (-v_before.y).atan2(-v_before.x);
        if turn_angle < 0.0 {
            turn_angle += 2.0 * PI;
        }
        let mut factor = (turn_angle / 2.0).sin();
        if turn_angle >= PI {
            // reflex turn: flip so the corner lands on the outer side
            factor = -factor;
        }
        let bisector = unit(difference);
        let raw_offset = half / factor;
        let offset = if raw_offset.is_finite() && raw_offset.abs() <= clamp_limit {
            raw_offset
        } else {
            clamped = true;
            log::warn!(
                "segment '{segment_id}': sharp turn at centerline vertex {i}, miter offset clamped to {clamp_limit}"
            );
            let sign = if factor < 0.0 { -1.0 } else { 1.0 };
            clamp_limit * sign
        };
        left.push(points[i] + bisector * offset);
        right.push(points[i] - bisector * offset);
    }

    // last vertex: perpendicular offset on the final edge
    let last_point = points[points.len() - 1];
    let last_normal = perpendicular(directions[directions.len() - 1]);
    left.push(last_point + last_normal * half);
    right.push(last_point - last_normal * half);

    // trace one side outbound and the other inbound to close the loop
    let mut boundary = left;
    right.reverse();
    boundary.extend(right);
    let polygon = Polygon::new(LineString::from(boundary), vec![]);
    Ok(BandPolygon { polygon, clamped })
}

/// builds band polygons for every base-model segment with an estimated
/// width, in id order. internal segments are skipped even though they carry
/// propagated widths: their connector geometry is not part of the base
/// model and is not visualized. failed segments are collected, not fatal.
pub fn build_network_bands(
    network: &RoadNetwork,
    widths: &WidthMap,
    offset_clamp_factor: f64,
) -> (Vec<(SegmentId, BandPolygon)>, Vec<(SegmentId, WidthError)>) {
    let mut bands: Vec<(SegmentId, BandPolygon)> = vec![];
    let mut failures: Vec<(SegmentId, WidthError)> = vec![];
    for segment in network.segments_sorted() {
        if segment.function.is_internal() {
            continue;
        }
        let width = match widths.get(&segment.segment_id) {
            Some(w) => *w,
            None => continue,
        };
        match build_band(
            &segment.segment_id,
            &segment.centerline,
            width,
            offset_clamp_factor,
        ) {
            Ok(band) => bands.push((segment.segment_id.clone(), band)),
            Err(e) => {
                log::warn!(
                    "failed to build band polygon for segment '{}': {e}",
                    segment.segment_id
                );
                failures.push((segment.segment_id.clone(), e));
            }
        }
    }
    (bands, failures)
}

/// rotate a unit direction 90 degrees clockwise.
fn perpendicular(direction: Coord<f64>) -> Coord<f64> {
    Coord {
        x: direction.y,
        y: -direction.x,
    }
}

fn unit(vector: Coord<f64>) -> Coord<f64> {
    let length = vector.x.hypot(vector.y);
    Coord {
        x: vector.x / length,
        y: vector.y / length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{line_string, Euclidean, Length, Line};

    fn sid() -> SegmentId {
        SegmentId::from("s1")
    }

    /// exterior boundary without the closing point geo appends.
    fn open_boundary(band: &BandPolygon) -> Vec<Coord<f64>> {
        let ring = &band.polygon.exterior().0;
        ring[..ring.len() - 1].to_vec()
    }

    #[test]
    fn test_straight_centerline_yields_a_rectangle() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 20.0, y: 0.0)];
        let band = build_band(&sid(), &line, 5.0, 10.0).unwrap();
        let corners = open_boundary(&band);
        assert_eq!(corners.len(), 4, "a 2-point centerline yields a rectangle");
        let mut side_lengths = corners
            .iter()
            .circular_tuple_windows()
            .map(|(a, b)| Euclidean.length(&Line::new(*a, *b)))
            .collect::<Vec<_>>();
        side_lengths.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!((side_lengths[0] - 5.0).abs() < 1e-9, "short sides of width 5");
        assert!((side_lengths[1] - 5.0).abs() < 1e-9);
        assert!((side_lengths[2] - 20.0).abs() < 1e-9, "long sides of length 20");
        assert!((side_lengths[3] - 20.0).abs() < 1e-9);
        assert!(!band.clamped);
    }

    #[test]
    fn test_right_angle_turn_uses_the_miter_offset() {
        let width = 4.0;
        let line = line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0)];
        let band = build_band(&sid(), &line, width, 10.0).unwrap();
        let corners = open_boundary(&band);
        assert_eq!(corners.len(), 6, "two boundary points per vertex");
        // corner points sit across the turn vertex at (W/2)/sin(45deg)
        let vertex = Coord { x: 10.0, y: 0.0 };
        let expected = width / 2.0_f64.sqrt();
        for corner in [corners[1], corners[4]] {
            let dist = Euclidean.length(&Line::new(vertex, corner));
            assert!(
                (dist - expected).abs() < 1e-9,
                "expected miter offset {expected}, found {dist}"
            );
        }
        assert!(!band.clamped);
    }

    #[test]
    fn test_colinear_interior_vertex_uses_the_straight_rule() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 5.0, y: 0.0), (x: 10.0, y: 0.0)];
        let band = build_band(&sid(), &line, 2.0, 10.0).unwrap();
        let corners = open_boundary(&band);
        assert_eq!(corners.len(), 6);
        assert_eq!(corners[1], Coord { x: 5.0, y: -1.0 });
        assert_eq!(corners[4], Coord { x: 5.0, y: 1.0 });
    }

    #[test]
    fn test_two_points_per_distinct_vertex() {
        let line = line_string![
            (x: 0.0, y: 0.0),
            (x: 10.0, y: 0.0),
            (x: 20.0, y: 5.0),
            (x: 30.0, y: 5.0)
        ];
        let band = build_band(&sid(), &line, 3.0, 10.0).unwrap();
        assert_eq!(open_boundary(&band).len(), 8);
    }

    #[test]
    fn test_near_reversal_is_clamped_to_finite_coordinates() {
        let line = line_string![
            (x: 0.0, y: 0.0),
            (x: 10.0, y: 0.0),
            (x: 0.0, y: 0.0001)
        ];
        let width = 4.0;
        let clamp_factor = 10.0;
        let band = build_band(&sid(), &line, width, clamp_factor).unwrap();
        assert!(band.clamped, "a near-reversal should trip the clamp");
        let vertex = Coord { x: 10.0, y: 0.0 };
        for coord in band.polygon.exterior().0.iter() {
            assert!(coord.x.is_finite() && coord.y.is_finite());
            let dist = Euclidean.length(&Line::new(vertex, *coord));
            assert!(
                dist <= clamp_factor * width + width,
                "clamped corners must stay within a bounded multiple of the width"
            );
        }
    }

    #[test]
    fn test_degenerate_centerline_fails_fast() {
        let line = line_string![(x: 3.0, y: 3.0), (x: 3.0, y: 3.0)];
        let result = build_band(&sid(), &line, 4.0, 10.0);
        assert!(matches!(result, Err(WidthError::DegenerateGeometry(_, _))));
    }

    #[test]
    fn test_negative_width_is_rejected() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)];
        let result = build_band(&sid(), &line, -1.0, 10.0);
        assert!(matches!(result, Err(WidthError::ConfigurationError(_))));
    }

    #[test]
    fn test_network_bands_skip_internal_segments() {
        use crate::model::network::{Segment, SegmentFunction};
        let network = RoadNetwork::new(
            vec![
                Segment::new(
                    SegmentId::from("street"),
                    line_string![(x: 0.0, y: 0.0), (x: 20.0, y: 0.0)],
                    true,
                    SegmentFunction::Normal,
                ),
                Segment::new(
                    SegmentId::from(":j0_0"),
                    line_string![(x: 20.0, y: 0.0), (x: 22.0, y: 0.0)],
                    true,
                    SegmentFunction::Internal,
                ),
            ],
            vec![],
        );
        let mut widths = WidthMap::new();
        widths.insert(SegmentId::from("street"), 6.0);
        widths.insert(SegmentId::from(":j0_0"), 6.0);
        let (bands, failures) = build_network_bands(&network, &widths, 10.0);
        assert_eq!(bands.len(), 1, "internal segment widths are not visualized");
        assert_eq!(bands[0].0, SegmentId::from("street"));
        assert!(failures.is_empty());
    }

    #[test]
    fn test_duplicate_vertices_are_merged_before_offsetting() {
        let line = line_string![
            (x: 0.0, y: 0.0),
            (x: 10.0, y: 0.0),
            (x: 10.0, y: 0.0),
            (x: 10.0, y: 10.0)
        ];
        let band = build_band(&sid(), &line, 4.0, 10.0).unwrap();
        assert_eq!(
            open_boundary(&band).len(),
            6,
            "duplicate vertices collapse to one boundary pair"
        );
    }
}
