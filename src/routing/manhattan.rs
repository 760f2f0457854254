//! Manhattan (orthogonal) connection layout
//!
//! Routes connections between shapes as sequences of horizontal and vertical
//! segments. The layout is chosen from the relative orientation of the two
//! shapes and the caller's preferred layouts; explicit side headings (a
//! docking that flipped onto a top or bottom edge) are laid out as three
//! segments so the path leaves through the requested side.

use tracing::{debug, warn};

use super::config::RoutingConfig;
use super::crop::crop;
use super::error::RoutingError;
use super::geometry::{point_in_rect, points_aligned, points_all_aligned, point_distance, Alignment};
use super::orientation::get_orientation;
use super::simplify::{simplify, without_redundant_points};
use super::types::*;

/// Consecutive waypoints closer than this make a connection too cramped to repair
const MIN_REPAIR_SEGMENT_LENGTH: f64 = 3.0;

/// Route a connection between two shapes with default thresholds
pub fn route(
    source: &Shape,
    target: &Shape,
    start: Option<Point>,
    end: Option<Point>,
    hints: &Hints,
) -> Result<Vec<Point>, RoutingError> {
    route_with_config(source, target, start, end, hints, &RoutingConfig::default())
}

/// Route a connection between two shapes
///
/// `start` and `end` fix the connection ends; they default to the shape
/// centers. The result is simplified and cropped onto both shapes.
pub fn route_with_config(
    source: &Shape,
    target: &Shape,
    start: Option<Point>,
    end: Option<Point>,
    hints: &Hints,
    config: &RoutingConfig,
) -> Result<Vec<Point>, RoutingError> {
    source.validate()?;
    target.validate()?;

    let preferred = hints.preferred_layout();
    let padding = config.orientation_threshold(preferred);
    let orientation = get_orientation(&source.bounds, &target.bounds, padding);
    let layout = select_layout(orientation, preferred);

    debug!(%orientation, %preferred, %layout, "routing connection");

    let start = start.unwrap_or_else(|| source.mid());
    let end = end.unwrap_or_else(|| target.mid());

    let Some(directions) = layout.directions() else {
        return crop(&[start, end], source, Some(target));
    };

    let (start, start_heading) = dock_end(source, start, directions.start, orientation.invert());
    let (end, end_heading) = dock_end(target, end, directions.end, orientation);
    let directions = Directions::new(start_heading, end_heading);

    let waypoints = connect_points_with_config(start, end, directions, config);
    let waypoints = simplify(&waypoints, config.simplify_accuracy);
    crop(&waypoints, source, Some(target))
}

/// Route from a shape to a free point, such as the cursor while drawing
pub fn connect_shape_to_point(source: &Shape, point: Point, hints: &Hints) -> Result<Vec<Point>, RoutingError> {
    connect_shape_to_point_with_config(source, point, hints, &RoutingConfig::default())
}

/// Route from a shape to a free point; only the source end is cropped
pub fn connect_shape_to_point_with_config(
    source: &Shape,
    point: Point,
    hints: &Hints,
    config: &RoutingConfig,
) -> Result<Vec<Point>, RoutingError> {
    source.validate()?;

    let preferred = hints.preferred_layout();
    let orientation = get_orientation(&source.bounds, point, 0.0);
    let layout = select_layout(orientation, preferred);
    let start = source.mid();

    let Some(directions) = layout.directions() else {
        return Ok(vec![start, point]);
    };

    let (start, start_heading) = dock_end(source, start, directions.start, orientation.invert());
    let directions = Directions::new(start_heading, directions.end);

    let waypoints = connect_points_with_config(start, point, directions, config);
    let waypoints = simplify(&waypoints, config.simplify_accuracy);
    crop(&waypoints, source, None)
}

/// Choose the layout for two shapes in the given orientation
///
/// Overlapping shapes get a straight connector, stacked shapes `v:v`, shapes
/// side by side `h:h`. Diagonal neighbours get a single bend, leaving
/// vertically only when the preferred layout starts vertically.
pub fn select_layout(orientation: Orientation, preferred: Layout) -> Layout {
    match orientation {
        Orientation::Intersect => Layout::Straight,
        Orientation::Top | Orientation::Bottom => Layout::VerticalVertical,
        Orientation::Left | Orientation::Right => Layout::HorizontalHorizontal,
        _ => match preferred {
            Layout::VerticalVertical | Layout::VerticalHorizontal => Layout::VerticalHorizontal,
            _ => Layout::HorizontalVertical,
        },
    }
}

/// Dock one connection end, resolving an axis heading against the orientation
///
/// A docking that flips onto the top or bottom edge turns the heading into
/// that explicit side.
fn dock_end(shape: &Shape, point: Point, heading: Heading, orientation: Orientation) -> (Point, Heading) {
    let direction = heading.as_direction().unwrap_or_else(|| {
        if heading.is_horizontal() {
            orientation.horizontal().unwrap_or(Direction::Right)
        } else {
            orientation.vertical().unwrap_or(Direction::Bottom)
        }
    });

    match shape.dock(point, direction) {
        Ok(resolution) => match resolution.changed {
            Some((flipped, side)) => {
                debug!(requested = %direction, side = %side, "docking moved to corner side");
                (flipped, Heading::from(side))
            }
            None => (resolution.docking_point, heading),
        },
        Err(err) => {
            warn!(%err, "routing from undocked point");
            (point, heading)
        }
    }
}

/// Connect two points with orthogonal segments, default thresholds
pub fn connect_points(a: Point, b: Point, directions: Directions) -> Vec<Point> {
    connect_points_with_config(a, b, directions, &RoutingConfig::default())
}

/// Connect two points with orthogonal segments following `directions`
///
/// The result starts at `a`, ends at `b`, and has exactly collinear points
/// removed.
pub fn connect_points_with_config(a: Point, b: Point, directions: Directions, config: &RoutingConfig) -> Vec<Point> {
    let mut points = Vec::with_capacity(8);
    points.push(a);
    points.extend(bendpoints(a, b, directions, config));
    points.push(b);
    without_redundant_points(&points)
}

fn bendpoints(a: Point, b: Point, directions: Directions, config: &RoutingConfig) -> Vec<Point> {
    if !directions.is_explicit() {
        return simple_bendpoints(a, b, directions.start.is_horizontal(), directions.end.is_horizontal());
    }

    let start = start_segment(a, b, directions, config);
    let end = end_segment(a, b, directions, config);
    let mid = mid_segment(&start, &end);

    let mut points = start.waypoints;
    points.extend(mid);
    points.extend(end.waypoints);
    points
}

/// Bend-points for a single axis layout
fn simple_bendpoints(a: Point, b: Point, start_horizontal: bool, end_horizontal: bool) -> Vec<Point> {
    let xmid = ((b.x - a.x) / 2.0 + a.x).round();
    let ymid = ((b.y - a.y) / 2.0 + a.y).round();

    match (start_horizontal, end_horizontal) {
        (true, false) => vec![Point::new(b.x, a.y)],
        (false, true) => vec![Point::new(a.x, b.y)],
        (true, true) => vec![Point::new(xmid, a.y), Point::new(xmid, b.y)],
        (false, false) => vec![Point::new(a.x, ymid), Point::new(b.x, ymid)],
    }
}

/// One leg of a three-segment layout
struct Segment {
    waypoints: Vec<Point>,
    directions: Directions,
    /// The leg ends with an extra turn, so the next leg starts on the other axis
    turn_next: bool,
}

/// First leg from `a` towards `b`, leaving through `directions.start`
fn start_segment(a: Point, b: Point, directions: Directions, config: &RoutingConfig) -> Segment {
    let padding = directions
        .layout()
        .map_or(0.0, |layout| config.orientation_threshold(layout));
    let orientation = get_orientation(b, a, padding);
    let heading = directions.start;
    let horizontal = heading.is_horizontal();

    let xmid = ((b.x - a.x) / 2.0 + a.x).round();
    let ymid = ((b.y - a.y) / 2.0 + a.y).round();

    let (end, directions, turn_next) = if can_layout_straight(heading, orientation) {
        if horizontal {
            (
                Point::new(xmid, a.y),
                Directions::new(Heading::Horizontal, Heading::Horizontal),
                false,
            )
        } else {
            (
                Point::new(a.x, ymid),
                Directions::new(Heading::Vertical, Heading::Vertical),
                false,
            )
        }
    } else {
        let directions = if horizontal {
            Directions::new(Heading::Horizontal, Heading::Vertical)
        } else {
            Directions::new(Heading::Vertical, Heading::Horizontal)
        };

        if needs_turn(heading, orientation) {
            let distance = config.additional_waypoint_distance;
            if horizontal {
                let turn_next = ymid == a.y;
                let x = if heading == Heading::Left {
                    a.x - distance
                } else {
                    a.x + distance
                };
                let y = if turn_next { ymid + distance } else { ymid };
                (Point::new(x, y), directions, turn_next)
            } else {
                let turn_next = xmid == a.x;
                let x = if turn_next { xmid + distance } else { xmid };
                let y = if heading == Heading::Top {
                    a.y - distance
                } else {
                    a.y + distance
                };
                (Point::new(x, y), directions, turn_next)
            }
        } else {
            (Point::new(xmid, ymid), directions, false)
        }
    };

    let mut waypoints = simple_bendpoints(a, end, directions.start.is_horizontal(), directions.end.is_horizontal());
    waypoints.push(end);

    Segment {
        waypoints,
        directions,
        turn_next,
    }
}

/// Last leg into `b`, built as a start leg from `b` and reversed
fn end_segment(a: Point, b: Point, directions: Directions, config: &RoutingConfig) -> Segment {
    let inverted = start_segment(b, a, directions.invert(), config);
    Segment {
        waypoints: inverted.waypoints.into_iter().rev().collect(),
        directions: inverted.directions.invert(),
        turn_next: inverted.turn_next,
    }
}

/// Bend-points joining the end of the first leg to the start of the last
fn mid_segment(start: &Segment, end: &Segment) -> Vec<Point> {
    let mut start_heading = start.directions.end;
    let mut end_heading = end.directions.start;
    if start.turn_next {
        start_heading = start_heading.turned();
    }
    if end.turn_next {
        end_heading = end_heading.turned();
    }

    let (Some(from), Some(to)) = (start.waypoints.last(), end.waypoints.first()) else {
        return Vec::new();
    };
    simple_bendpoints(*from, *to, start_heading.is_horizontal(), end_heading.is_horizontal())
}

/// Whether a leg leaving through `heading` can head straight for a point in `orientation`
fn can_layout_straight(heading: Heading, orientation: Orientation) -> bool {
    match heading {
        Heading::Horizontal => orientation.horizontal().is_some(),
        Heading::Vertical => orientation.vertical().is_some(),
        Heading::Top => orientation.vertical() == Some(Direction::Top),
        Heading::Bottom => orientation.vertical() == Some(Direction::Bottom),
        Heading::Left => orientation.horizontal() == Some(Direction::Left),
        Heading::Right => orientation.horizontal() == Some(Direction::Right),
    }
}

/// Whether leaving through `heading` points away from the target
fn needs_turn(heading: Heading, orientation: Orientation) -> bool {
    match heading {
        Heading::Horizontal | Heading::Vertical => false,
        _ => !can_layout_straight(heading, orientation),
    }
}

/// Re-route an existing connection after one of its shapes moved
///
/// Tries, in order: a straight line (when preferred), a local repair of the
/// moved end, keeping the waypoints when nothing moved, and finally a full
/// re-route between `start` and `end`.
pub fn repair_connection(
    source: &Shape,
    target: &Shape,
    start: Option<Point>,
    end: Option<Point>,
    waypoints: &[Point],
    hints: &Hints,
) -> Result<Vec<Point>, RoutingError> {
    repair_connection_with_config(source, target, start, end, waypoints, hints, &RoutingConfig::default())
}

/// Re-route an existing connection after one of its shapes moved
pub fn repair_connection_with_config(
    source: &Shape,
    target: &Shape,
    start: Option<Point>,
    end: Option<Point>,
    waypoints: &[Point],
    hints: &Hints,
    config: &RoutingConfig,
) -> Result<Vec<Point>, RoutingError> {
    let start = start.unwrap_or_else(|| source.mid());
    let end = end.unwrap_or_else(|| target.mid());

    if hints.prefers_straight() {
        if let Some(points) = layout_straight(source, target, start, end, hints) {
            debug!("repaired as straight connection");
            return crop(&points, source, Some(target));
        }
    }

    if hints.connection_end {
        if let Some(points) = repair_connection_end(target, source, end, waypoints, config) {
            debug!("repaired connection end");
            return crop(&points, source, Some(target));
        }
    }

    if hints.connection_start {
        if let Some(points) = repair_connection_side(source, target, start, waypoints, config) {
            debug!("repaired connection start");
            return crop(&points, source, Some(target));
        }
    }

    if !hints.connection_start && !hints.connection_end && !waypoints.is_empty() {
        return Ok(waypoints.to_vec());
    }

    route_with_config(source, target, Some(start), Some(end), hints, config)
}

/// Straight two-point connection between shapes that face each other
///
/// Only shapes directly above, below or beside each other qualify, and the
/// kept docking must fall within the other shape's extent on the shared axis.
pub fn layout_straight(source: &Shape, target: &Shape, start: Point, end: Point, hints: &Hints) -> Option<Vec<Point>> {
    let axis = match get_orientation(&source.bounds, &target.bounds, 0.0) {
        Orientation::Top | Orientation::Bottom => Axis::X,
        Orientation::Left | Orientation::Right => Axis::Y,
        _ => return None,
    };

    if hints.preserve_docking == Some(DockingEnd::Target) {
        if !is_in_range(axis, &end, &source.bounds) {
            return None;
        }
        let aligned = axis.set(start, axis.of(&end));
        Some(vec![aligned.with_original(aligned.anchor()), Point::new(end.x, end.y)])
    } else {
        if !is_in_range(axis, &start, &target.bounds) {
            return None;
        }
        let aligned = axis.set(end, axis.of(&start));
        Some(vec![Point::new(start.x, start.y), aligned.with_original(aligned.anchor())])
    }
}

fn is_in_range(axis: Axis, point: &Point, bounds: &Rectangle) -> bool {
    let (low, size) = match axis {
        Axis::X => (bounds.x, bounds.width),
        Axis::Y => (bounds.y, bounds.height),
    };
    let value = axis.of(point);
    value >= low && value <= low + size
}

fn repair_connection_end(
    moved: &Shape,
    other: &Shape,
    new_docking: Point,
    points: &[Point],
    config: &RoutingConfig,
) -> Option<Vec<Point>> {
    let reversed: Vec<Point> = points.iter().rev().copied().collect();
    let mut repaired = repair_connection_side(moved, other, new_docking, &reversed, config)?;
    repaired.reverse();
    Some(repaired)
}

/// Move the first waypoint to `new_docking` and drag its neighbour along
///
/// Gives up (returning `None`) when the connection is too short or cramped
/// for a local repair, or when the repair would leave it a straight line.
fn repair_connection_side(
    moved: &Shape,
    other: &Shape,
    new_docking: Point,
    points: &[Point],
    config: &RoutingConfig,
) -> Option<Vec<Point>> {
    if needs_relayout(points) {
        return None;
    }

    let old_docking = points[0];
    let mut new_points = points.to_vec();
    new_points[0] = new_docking;
    new_points[1] = repair_bendpoint(new_points[1], old_docking, new_docking, config.aligned_threshold);

    let new_points = match remove_overlapping(&new_points, moved, other, config.repair_overlap_tolerance) {
        Some(sliced) => repair_connection_side(moved, other, new_docking, &sliced, config)?,
        None => new_points,
    };

    if points_all_aligned(&new_points, config.aligned_threshold) {
        return None;
    }
    Some(new_points)
}

fn needs_relayout(points: &[Point]) -> bool {
    if points.len() < 3 {
        return true;
    }
    if points.len() > 4 {
        return false;
    }
    points
        .windows(2)
        .any(|pair| point_distance(&pair[0], &pair[1]) < MIN_REPAIR_SEGMENT_LENGTH)
}

/// Keep `candidate` aligned with the peer it was aligned with before the peer moved
fn repair_bendpoint(candidate: Point, old_peer: Point, new_peer: Point, threshold: f64) -> Point {
    match points_aligned(&old_peer, &candidate, threshold) {
        Some(Alignment::Vertical) => Point::new(new_peer.x, candidate.y),
        Some(Alignment::Horizontal) => Point::new(candidate.x, new_peer.y),
        None => candidate,
    }
}

/// Drop everything before the last bend-point that sits on either shape
fn remove_overlapping(points: &[Point], a: &Shape, b: &Shape, tolerance: f64) -> Option<Vec<Point>> {
    (1..points.len().saturating_sub(1))
        .rev()
        .find(|&i| point_in_rect(&points[i], &a.bounds, tolerance) || point_in_rect(&points[i], &b.bounds, tolerance))
        .map(|i| points[i..].to_vec())
}
