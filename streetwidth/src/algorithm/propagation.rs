use crate::model::network::RoadNetwork;
use crate::model::{WidthError, WidthMap};

/// broadcasts junction-level widths onto internal connector segments: each
/// junction's incoming internal segments receive the maximum width among
/// its outgoing drivable segments, with missing entries treated as 0.
///
/// a single pass suffices since internal segments never feed further
/// propagation, and re-running on an already-propagated map is a no-op as
/// long as the drivable widths are unchanged. must run only after all
/// direct estimation has completed.
pub fn propagate_internal_widths(
    widths: &mut WidthMap,
    network: &RoadNetwork,
) -> Result<(), WidthError> {
    log::info!(
        "propagating street widths onto internal segments of {} junctions",
        network.junctions().len()
    );
    let mut n_propagated = 0;
    for junction in network.junctions().iter() {
        let mut max_width: f64 = 0.0;
        for segment_id in junction.outgoing.iter() {
            let width = widths.get(segment_id).copied().unwrap_or(0.0);
            if width > max_width {
                max_width = width;
            }
        }
        for internal_id in junction.incoming_internal.iter() {
            let segment = network.get_segment(internal_id)?;
            if !segment.function.is_internal() {
                return Err(WidthError::InternalError(format!(
                    "junction '{}' lists incoming internal segment '{}' but its function is '{}'",
                    junction.junction_id, internal_id, segment.function
                )));
            }
            widths.insert(internal_id.clone(), max_width);
            n_propagated += 1;
        }
    }
    log::info!("propagated widths onto {n_propagated} internal segments");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::{
        Junction, JunctionId, Segment, SegmentFunction, SegmentId,
    };
    use geo::line_string;

    fn segment(id: &str, function: SegmentFunction) -> Segment {
        Segment::new(
            SegmentId::from(id),
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)],
            true,
            function,
        )
    }

    fn junction_network() -> RoadNetwork {
        RoadNetwork::new(
            vec![
                segment("a", SegmentFunction::Normal),
                segment("b", SegmentFunction::Normal),
                segment(":j0_0", SegmentFunction::Internal),
                segment(":j0_1", SegmentFunction::Internal),
            ],
            vec![Junction::new(
                JunctionId::from("j0"),
                vec![SegmentId::from("a"), SegmentId::from("b")],
                vec![SegmentId::from(":j0_0"), SegmentId::from(":j0_1")],
            )],
        )
    }

    #[test]
    fn test_internal_segments_receive_the_max_outgoing_width() {
        let network = junction_network();
        let mut widths = WidthMap::new();
        widths.insert(SegmentId::from("a"), 4.0);
        widths.insert(SegmentId::from("b"), 6.0);
        propagate_internal_widths(&mut widths, &network).unwrap();
        assert_eq!(widths.get(&SegmentId::from(":j0_0")), Some(&6.0));
        assert_eq!(widths.get(&SegmentId::from(":j0_1")), Some(&6.0));
    }

    #[test]
    fn test_missing_outgoing_widths_default_to_zero() {
        let network = junction_network();
        let mut widths = WidthMap::new();
        widths.insert(SegmentId::from("a"), 4.0);
        propagate_internal_widths(&mut widths, &network).unwrap();
        assert_eq!(widths.get(&SegmentId::from(":j0_0")), Some(&4.0));
    }

    #[test]
    fn test_junction_without_outgoing_widths_propagates_zero() {
        let network = junction_network();
        let mut widths = WidthMap::new();
        propagate_internal_widths(&mut widths, &network).unwrap();
        assert_eq!(widths.get(&SegmentId::from(":j0_0")), Some(&0.0));
        assert_eq!(widths.get(&SegmentId::from(":j0_1")), Some(&0.0));
    }

    #[test]
    fn test_propagation_is_idempotent() {
        let network = junction_network();
        let mut widths = WidthMap::new();
        widths.insert(SegmentId::from("a"), 4.0);
        widths.insert(SegmentId::from("b"), 6.0);
        propagate_internal_widths(&mut widths, &network).unwrap();
        let after_first = widths.clone();
        propagate_internal_widths(&mut widths, &network).unwrap();
        assert_eq!(
            widths, after_first,
            "re-running propagation with unchanged drivable widths must not alter anything"
        );
    }

    #[test]
    fn test_unknown_internal_segment_id_is_an_error() {
        let network = RoadNetwork::new(
            vec![segment("a", SegmentFunction::Normal)],
            vec![Junction::new(
                JunctionId::from("j0"),
                vec![SegmentId::from("a")],
                vec![SegmentId::from(":missing_0")],
            )],
        );
        let mut widths = WidthMap::new();
        let result = propagate_internal_widths(&mut widths, &network);
        assert!(matches!(
            result,
            Err(WidthError::NetworkMissingSegmentId(_))
        ));
    }

    #[test]
    fn test_mistagged_internal_segment_is_an_error() {
        let network = RoadNetwork::new(
            vec![
                segment("a", SegmentFunction::Normal),
                segment("not_internal", SegmentFunction::Normal),
            ],
            vec![Junction::new(
                JunctionId::from("j0"),
                vec![SegmentId::from("a")],
                vec![SegmentId::from("not_internal")],
            )],
        );
        let mut widths = WidthMap::new();
        let result = propagate_internal_widths(&mut widths, &network);
        assert!(matches!(result, Err(WidthError::InternalError(_))));
    }
}
