//! Removing redundant bend-points

use super::geometry::{point_distance, points_on_line};
use super::types::{Axis, Point};

/// Remove bend-points that lie (nearly) on the line between their neighbours
///
/// A removed point's neighbours are snapped onto a shared x or y when they
/// are within `accuracy` of each other on that axis, so the surviving
/// segment stays axis-aligned. End points are never moved or removed: an
/// interior neighbour snaps onto them, and a point between two end points
/// that do not line up is kept. The result has no removable point left, so
/// simplifying it again changes nothing.
pub fn simplify(waypoints: &[Point], accuracy: f64) -> Vec<Point> {
    let mut points = waypoints.to_vec();
    let mut index = 1;

    while index + 1 < points.len() {
        let previous = points[index - 1];
        let point = points[index];
        let next = points[index + 1];

        let duplicate = point_distance(&point, &next) == 0.0 || point_distance(&point, &previous) == 0.0;
        let redundant = duplicate || points_on_line(&previous, &next, &point, accuracy);

        if redundant && (snap_neighbours(&mut points, index, accuracy) || duplicate) {
            points.remove(index);
            // snapped neighbours can make the two points before them redundant
            index = index.saturating_sub(2).max(1);
        } else {
            index += 1;
        }
    }

    points
}

/// Align the neighbours of `points[index]` ahead of its removal
///
/// Returns false, leaving the points untouched, when both neighbours are end
/// points that differ on the snapping axis.
fn snap_neighbours(points: &mut [Point], index: usize, accuracy: f64) -> bool {
    let previous = points[index - 1];
    let next = points[index + 1];

    let axis = if (previous.x - next.x).abs() <= accuracy {
        Axis::X
    } else if (previous.y - next.y).abs() <= accuracy {
        Axis::Y
    } else {
        return true;
    };

    let (from, to) = (axis.of(&previous), axis.of(&next));
    let value = match (index == 1, index + 2 == points.len()) {
        (true, true) => return from == to,
        (true, false) => from,
        (false, true) => to,
        (false, false) => to.round(),
    };

    points[index - 1] = axis.set(previous, value);
    points[index + 1] = axis.set(next, value);
    true
}

/// Remove exactly collinear points, keeping the first and last
pub fn without_redundant_points(waypoints: &[Point]) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::with_capacity(waypoints.len());

    for (index, point) in waypoints.iter().enumerate() {
        let redundant = match (points.last(), waypoints.get(index + 1)) {
            (Some(previous), Some(next)) => points_on_line(previous, next, point, 0.0),
            _ => false,
        };
        if !redundant {
            points.push(*point);
        }
    }

    points
}
