//! Docking strategies: where a connector meets a shape boundary

use tracing::trace;

use super::error::RoutingError;
use super::geometry::circle_line_intersections;
use super::types::{Axis, Direction, Point, Rectangle, Shape, ShapeKind};

/// Horizontal band beyond which a left/right docking is kept on its side
const SIDE_BAND: f64 = 0.9;

/// Vertical thirds deciding whether a left/right docking flips to top/bottom
const UPPER_THIRD: f64 = 1.0 / 3.0;
const LOWER_THIRD: f64 = 2.0 / 3.0;

/// Outcome of docking one point onto a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockingResolution {
    /// Boundary point for the requested direction
    pub docking_point: Point,
    /// The direction that was requested
    pub direction: Direction,
    /// Replacement docking on the top or bottom edge, when the point sits
    /// close to a corner
    pub changed: Option<(Point, Direction)>,
}

impl DockingResolution {
    /// The docking to use: the flipped one if present, else the requested one
    pub fn resolved(&self) -> (Point, Direction) {
        self.changed
            .unwrap_or((self.docking_point, self.direction))
    }
}

impl Shape {
    /// Dock `point` onto this shape's boundary for a connector leaving or
    /// entering through `direction`
    pub fn dock(&self, point: Point, direction: Direction) -> Result<DockingResolution, RoutingError> {
        match self.kind {
            ShapeKind::Rectangle => Ok(dock_rectangle(point, &self.bounds, direction)),
            ShapeKind::Circle => dock_circle(point, &self.bounds, direction),
        }
    }
}

/// Dock onto a rectangle edge
///
/// Top and bottom keep the point's x, left and right keep its y, each
/// clamped to the edge. A left/right docking whose distance from the top edge
/// falls in the upper or lower third, away from the far side, also offers a
/// flipped docking on the top or bottom edge. Unmeasured rectangles return
/// the point unchanged.
pub fn dock_rectangle(point: Point, rect: &Rectangle, direction: Direction) -> DockingResolution {
    let original = point.anchor();
    if rect.is_unmeasured() {
        return DockingResolution {
            docking_point: point.with_original(original),
            direction,
            changed: None,
        };
    }

    let x = point.x.max(rect.x).min(rect.right());
    let y = point.y.max(rect.y).min(rect.bottom());
    let rel_x = (point.x - rect.x).abs() / rect.width;
    let rel_y = (point.y - rect.y).abs() / rect.height;

    let flip = |docking_point: Point| {
        let changed = if rel_y >= LOWER_THIRD {
            Some((
                Point::new(x, rect.bottom()).with_original(original),
                Direction::Bottom,
            ))
        } else if rel_y <= UPPER_THIRD {
            Some((
                Point::new(x, rect.y).with_original(original),
                Direction::Top,
            ))
        } else {
            None
        };
        if let Some((_, flipped)) = changed {
            trace!(from = %direction, to = %flipped, "docking flipped near corner");
        }
        DockingResolution {
            docking_point,
            direction,
            changed,
        }
    };

    match direction {
        Direction::Top => DockingResolution {
            docking_point: Point::new(x, rect.y).with_original(original),
            direction,
            changed: None,
        },
        Direction::Bottom => DockingResolution {
            docking_point: Point::new(x, rect.bottom()).with_original(original),
            direction,
            changed: None,
        },
        Direction::Right => {
            let docking_point = Point::new(rect.right(), y).with_original(original);
            if rel_x <= SIDE_BAND {
                flip(docking_point)
            } else {
                DockingResolution {
                    docking_point,
                    direction,
                    changed: None,
                }
            }
        }
        Direction::Left => {
            let docking_point = Point::new(rect.x, y).with_original(original);
            if rel_x >= 1.0 - SIDE_BAND {
                flip(docking_point)
            } else {
                DockingResolution {
                    docking_point,
                    direction,
                    changed: None,
                }
            }
        }
    }
}

/// Dock onto a circle inscribed in `bounds`
///
/// Top/bottom intersect the vertical line through the point, left/right the
/// horizontal one, and the root on the requested side is chosen.
pub fn dock_circle(
    point: Point,
    bounds: &Rectangle,
    direction: Direction,
) -> Result<DockingResolution, RoutingError> {
    let center = bounds.mid();
    let radius = bounds.width / 2.0;

    let roots = if direction.is_horizontal() {
        circle_line_intersections(&center, radius, 0.0, 1.0, -point.y)
    } else {
        circle_line_intersections(&center, radius, 1.0, 0.0, -point.x)
    };

    let chosen = match direction {
        Direction::Top => roots.into_iter().min_by(|a, b| a.y.total_cmp(&b.y)),
        Direction::Bottom => roots.into_iter().max_by(|a, b| a.y.total_cmp(&b.y)),
        Direction::Left => roots.into_iter().min_by(|a, b| a.x.total_cmp(&b.x)),
        Direction::Right => roots.into_iter().max_by(|a, b| a.x.total_cmp(&b.x)),
    };

    let docking_point = chosen
        .ok_or_else(|| RoutingError::no_circle_intersection(point))?
        .with_original(point.anchor());

    Ok(DockingResolution {
        docking_point,
        direction,
        changed: None,
    })
}

/// Side of a shape that a path end at `point` docks through
///
/// The end segment towards `neighbour` fixes the axis. Which way it points is
/// read from the pre-crop anchors of both points, so an end that a previous
/// crop moved past its neighbour keeps its side. `None` for diagonal or
/// zero-length end segments.
pub fn docking_direction(point: &Point, neighbour: &Point) -> Option<Direction> {
    let axis = if point.x == neighbour.x && point.y != neighbour.y {
        Axis::Y
    } else if point.y == neighbour.y && point.x != neighbour.x {
        Axis::X
    } else {
        return None;
    };

    let anchor = axis.of(&Point::from(point.original_or_self()));
    let peer = axis.of(&Point::from(neighbour.original_or_self()));
    let here = axis.of(point);

    // true when the side faces increasing x or y
    let ascending = if peer != anchor {
        peer > anchor
    } else if here != anchor {
        // docked before: stay on that side of the anchor
        here > anchor
    } else {
        axis.of(neighbour) > here
    };

    Some(match (axis, ascending) {
        (Axis::X, true) => Direction::Right,
        (Axis::X, false) => Direction::Left,
        (Axis::Y, true) => Direction::Bottom,
        (Axis::Y, false) => Direction::Top,
    })
}
