//! Segment move gestures on routed connections

use ortho_connect::routing::{Axis, SegmentMoveContext};
use ortho_connect::{Connection, DragDelta, Point, RoutingError, SegmentMove, Shape};
use pretty_assertions::assert_eq;

fn s_connection() -> Connection {
    let source = Shape::rectangle(0.0, 0.0, 100.0, 100.0);
    let target = Shape::rectangle(300.0, 200.0, 100.0, 100.0);
    Connection::new(
        vec![
            Point::new(100.0, 50.0),
            Point::new(200.0, 50.0),
            Point::new(200.0, 250.0),
            Point::new(300.0, 250.0),
        ],
        source,
        target,
    )
    .unwrap()
}

fn moved_segment(ctx: &SegmentMoveContext) -> (Point, Point) {
    let i = ctx.new_segment_start_index();
    (ctx.waypoints()[i], ctx.waypoints()[i + 1])
}

#[test]
fn test_segment_moves_only_along_its_axis() {
    let mut segment_move = SegmentMove::new();
    segment_move.activate(s_connection(), Point::new(200.0, 150.0)).unwrap();

    let mut expected = 0.0;
    for delta in [DragDelta::new(10.0, 7.0), DragDelta::new(15.0, -30.0), DragDelta::new(-40.0, 2.0)] {
        segment_move.move_by(delta).unwrap();
        expected += delta.dx;

        let ctx = segment_move.context().unwrap();
        assert_eq!(ctx.axis(), Axis::X);
        assert_eq!(ctx.accumulated_delta(), expected);

        let (start, end) = moved_segment(ctx);
        assert_eq!(start.x, 200.0 + expected);
        assert_eq!(end.x, 200.0 + expected);
        assert_eq!(start.y, 50.0);
        assert_eq!(end.y, 250.0);
    }
}

#[test]
fn test_replaying_deltas_is_deterministic() {
    let deltas = [DragDelta::new(0.0, -20.0), DragDelta::new(3.0, -50.0), DragDelta::new(0.0, 30.0)];

    let run = || {
        let mut segment_move = SegmentMove::new();
        segment_move.activate(s_connection(), Point::new(150.0, 50.0)).unwrap();
        let mut snapshots = Vec::new();
        for delta in deltas {
            snapshots.push(segment_move.move_by(delta).unwrap().to_vec());
        }
        snapshots.push(segment_move.release().unwrap());
        snapshots
    };

    assert_eq!(run(), run());
}

#[test]
fn test_bendpoint_grab_picks_nearer_segment() {
    let mut segment_move = SegmentMove::new();

    let ctx = segment_move.activate(s_connection(), Point::new(203.0, 56.0)).unwrap();
    assert_eq!(ctx.segment_indices(), (1, 2));
    assert_eq!(ctx.axis(), Axis::X);

    let ctx = segment_move.activate(s_connection(), Point::new(195.0, 52.0)).unwrap();
    assert_eq!(ctx.segment_indices(), (0, 1));
    assert_eq!(ctx.axis(), Axis::Y);
}

#[test]
fn test_release_returns_docked_orthogonal_waypoints() {
    let connection = s_connection();
    let source = connection.source;
    let target = connection.target;

    let mut segment_move = SegmentMove::new();
    segment_move.activate(connection, Point::new(250.0, 250.0)).unwrap();
    segment_move.move_by(DragDelta::from_screen(0.0, 61.0, 2.0)).unwrap();
    let waypoints = segment_move.release().unwrap();

    assert!(!segment_move.is_active());
    for pair in waypoints.windows(2) {
        assert!(pair[0].x == pair[1].x || pair[0].y == pair[1].y, "{:?}", waypoints);
    }
    assert!(waypoints.iter().all(|p| p.x.fract() == 0.0 && p.y.fract() == 0.0));
    assert_eq!(waypoints[0].x, source.bounds.right());
    let last = waypoints[waypoints.len() - 1];
    assert_eq!(last.x, target.bounds.x);
    assert_eq!(last.y, 281.0);
}

#[test]
fn test_cancel_discards_the_move() {
    let mut segment_move = SegmentMove::new();
    segment_move.activate(s_connection(), Point::new(200.0, 150.0)).unwrap();
    segment_move.move_by(DragDelta::new(20.0, 0.0)).unwrap();
    segment_move.cancel();
    assert!(!segment_move.is_active());
    assert_eq!(segment_move.release().unwrap_err(), RoutingError::NotActive);
}
