//! Locating points on polylines and outlines

use super::geometry::{mid_point, point_distance, Outline, PathIntersection};
use super::types::{ApproxIntersection, Point};

/// Default radius for hit-testing a polyline
pub const INTERSECTION_THRESHOLD: f64 = 10.0;

/// Two crossings closer than this are treated as one
const SAME_POINT_DISTANCE: f64 = 1.0;

/// Find the bend-point or segment of `waypoints` nearest to `reference`
pub fn approx_intersection(waypoints: &[Point], reference: Point) -> Option<ApproxIntersection> {
    approx_intersection_with_threshold(waypoints, reference, INTERSECTION_THRESHOLD)
}

/// Like [`approx_intersection`], with an explicit hit radius
///
/// Waypoints within the radius win over segments, earliest first. Otherwise
/// a circle of that radius around the reference is intersected with the
/// polyline: hits on one segment resolve to a point on it, hits on different
/// segments resolve to the bend-point between them.
pub fn approx_intersection_with_threshold(
    waypoints: &[Point],
    reference: Point,
    threshold: f64,
) -> Option<ApproxIntersection> {
    if let Some(index) = waypoints
        .iter()
        .position(|w| point_distance(w, &reference) <= threshold)
    {
        return Some(ApproxIntersection {
            point: waypoints[index],
            bendpoint: true,
            index,
        });
    }

    let circle = Outline::Circle {
        center: reference,
        radius: threshold,
    };
    let intersections = circle.intersections(waypoints);
    let first = intersections.first()?;
    let last = intersections.last()?;

    if intersections.len() == 1 || point_distance(&first.point, &last.point) < SAME_POINT_DISTANCE {
        return Some(ApproxIntersection {
            point: first.point.rounded(),
            bendpoint: false,
            index: first.segment + 1,
        });
    }

    if first.segment != last.segment {
        let index = first.segment.max(last.segment);
        return waypoints.get(index).map(|point| ApproxIntersection {
            point: *point,
            bendpoint: true,
            index,
        });
    }

    Some(ApproxIntersection {
        point: mid_point(&first.point, &last.point).rounded(),
        bendpoint: false,
        index: first.segment + 1,
    })
}

/// Where `path` crosses `outline`, for cropping a path end
///
/// With several crossings, those on earlier segments come first and, within
/// a segment, later crossings first; the first of that order is used when
/// cropping the start of the path, the last when cropping its end.
pub fn element_line_intersection(outline: &Outline, path: &[Point], crop_start: bool) -> Option<Point> {
    let mut intersections: Vec<PathIntersection> = outline.intersections(path);

    match intersections.len() {
        0 => return None,
        1 => return Some(intersections[0].point),
        2 if point_distance(&intersections[0].point, &intersections[1].point) < SAME_POINT_DISTANCE => {
            return Some(intersections[0].point);
        }
        _ => {}
    }

    intersections.sort_by(|a, b| a.segment.cmp(&b.segment).then(b.t.total_cmp(&a.t)));

    let chosen = if crop_start {
        intersections.first()
    } else {
        intersections.last()
    };
    chosen.map(|i| i.point)
}
