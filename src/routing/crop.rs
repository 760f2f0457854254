//! Cropping connection ends onto shape boundaries

use tracing::warn;

use super::docking::docking_direction;
use super::error::RoutingError;
use super::intersection::element_line_intersection;
use super::types::{Connection, Docking, Point, Shape};

/// Distance within which an end already counts as lying on the outline
const ON_OUTLINE: f64 = 1e-6;

/// Resolve where the first (`dock_start`) or last waypoint meets `shape`
///
/// Axis-aligned end segments dock through the shape's docking strategy.
/// Diagonal ones are cut against the shape outline, unless the end already
/// lies on it. A zero-length end segment keeps its point.
pub fn get_docking(waypoints: &[Point], shape: &Shape, dock_start: bool) -> Result<Docking, RoutingError> {
    let count = waypoints.len();
    if count < 2 {
        return Err(RoutingError::too_few_waypoints(count));
    }

    let (index, point, neighbour) = if dock_start {
        (0, waypoints[0], waypoints[1])
    } else {
        (count - 1, waypoints[count - 1], waypoints[count - 2])
    };

    let actual = match docking_direction(&point, &neighbour) {
        Some(direction) => match shape.dock(point, direction) {
            Ok(resolution) => resolution.docking_point,
            Err(err) => {
                warn!(%err, "keeping undocked waypoint");
                point
            }
        },
        None if point.same_position(&neighbour) => point,
        None => {
            let outline = shape.outline();
            if outline.distance(&point) <= ON_OUTLINE {
                point
            } else {
                let path = if dock_start {
                    [point, neighbour]
                } else {
                    [neighbour, point]
                };
                element_line_intersection(&outline, &path, dock_start).unwrap_or(point)
            }
        }
    };

    Ok(Docking {
        point,
        actual,
        index,
    })
}

/// Replace the connection ends with their boundary dockings
///
/// Interior waypoints are kept unchanged. Without a target (a connection
/// being drawn towards the cursor) only the start is cropped.
pub fn crop(waypoints: &[Point], source: &Shape, target: Option<&Shape>) -> Result<Vec<Point>, RoutingError> {
    let start = get_docking(waypoints, source, true)?;

    let mut cropped = Vec::with_capacity(waypoints.len());
    cropped.push(docking_to_point(&start));

    match target {
        Some(target) => {
            let end = get_docking(waypoints, target, false)?;
            cropped.extend_from_slice(&waypoints[start.index + 1..end.index]);
            cropped.push(docking_to_point(&end));
        }
        None => cropped.extend_from_slice(&waypoints[start.index + 1..]),
    }

    Ok(cropped)
}

/// The docked position, carrying the first pre-crop anchor forward
fn docking_to_point(docking: &Docking) -> Point {
    let original = docking.point.original_or_self();
    docking.actual.with_original(original)
}

impl Connection {
    /// The connection's waypoints cropped onto its source and target
    pub fn cropped_waypoints(&self) -> Result<Vec<Point>, RoutingError> {
        crop(&self.waypoints, &self.source, Some(&self.target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::types::Anchor;
    use pretty_assertions::assert_eq;

    fn positions(points: &[Point]) -> Vec<(f64, f64)> {
        points.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_crop_horizontal_connection() {
        let source = Shape::rectangle(0.0, 0.0, 100.0, 100.0);
        let target = Shape::rectangle(200.0, 0.0, 100.0, 100.0);
        let waypoints = [Point::new(50.0, 50.0), Point::new(250.0, 50.0)];

        let cropped = crop(&waypoints, &source, Some(&target)).unwrap();
        assert_eq!(positions(&cropped), vec![(100.0, 50.0), (200.0, 50.0)]);
        assert_eq!(cropped[0].original, Some(Anchor::new(50.0, 50.0)));
        assert_eq!(cropped[1].original, Some(Anchor::new(250.0, 50.0)));
    }

    #[test]
    fn test_crop_keeps_interior_points() {
        let source = Shape::rectangle(0.0, 0.0, 100.0, 100.0);
        let target = Shape::rectangle(200.0, 200.0, 100.0, 100.0);
        let waypoints = [
            Point::new(50.0, 50.0),
            Point::new(150.0, 50.0),
            Point::new(150.0, 250.0),
            Point::new(250.0, 250.0),
        ];
        let cropped = crop(&waypoints, &source, Some(&target)).unwrap();
        assert_eq!(
            positions(&cropped),
            vec![(100.0, 50.0), (150.0, 50.0), (150.0, 250.0), (200.0, 250.0)]
        );
    }

    #[test]
    fn test_crop_is_idempotent_and_original_sticky() {
        let source = Shape::rectangle(0.0, 0.0, 100.0, 100.0);
        let target = Shape::rectangle(0.0, 200.0, 100.0, 100.0);
        let waypoints = [Point::new(50.0, 50.0), Point::new(50.0, 250.0)];

        let once = crop(&waypoints, &source, Some(&target)).unwrap();
        let twice = crop(&once, &source, Some(&target)).unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice[0].original, Some(Anchor::new(50.0, 50.0)));
    }

    #[test]
    fn test_crop_without_target_keeps_end() {
        let source = Shape::rectangle(0.0, 0.0, 100.0, 100.0);
        let waypoints = [Point::new(50.0, 50.0), Point::new(50.0, 300.0)];
        let cropped = crop(&waypoints, &source, None).unwrap();
        assert_eq!(positions(&cropped), vec![(50.0, 100.0), (50.0, 300.0)]);
        assert_eq!(cropped[1].original, None);
    }

    #[test]
    fn test_crop_diagonal_uses_outline() {
        let source = Shape::rectangle(0.0, 0.0, 100.0, 100.0);
        let target = Shape::rectangle(200.0, 200.0, 100.0, 100.0);
        let waypoints = [Point::new(50.0, 50.0), Point::new(250.0, 250.0)];
        let cropped = crop(&waypoints, &source, Some(&target)).unwrap();
        assert_eq!(positions(&cropped), vec![(100.0, 100.0), (200.0, 200.0)]);
    }

    #[test]
    fn test_crop_onto_circle() {
        let source = Shape::circle(50.0, 50.0, 50.0);
        let target = Shape::rectangle(200.0, 0.0, 100.0, 100.0);
        let waypoints = [Point::new(50.0, 50.0), Point::new(250.0, 50.0)];
        let cropped = crop(&waypoints, &source, Some(&target)).unwrap();
        assert_eq!(positions(&cropped), vec![(100.0, 50.0), (200.0, 50.0)]);
    }

    #[test]
    fn test_crop_rejects_single_point() {
        let shape = Shape::rectangle(0.0, 0.0, 10.0, 10.0);
        let err = crop(&[Point::new(0.0, 0.0)], &shape, Some(&shape)).unwrap_err();
        assert_eq!(err, RoutingError::too_few_waypoints(1));
    }

    #[test]
    fn test_crop_keeps_diagonal_end_already_on_outline() {
        let source = Shape::rectangle(0.0, 0.0, 100.0, 100.0);
        let target = Shape::rectangle(200.0, 200.0, 100.0, 100.0);
        let waypoints = [Point::new(100.0, 50.0), Point::new(250.0, 250.0)];

        let once = crop(&waypoints, &source, Some(&target)).unwrap();
        assert_eq!(positions(&once), vec![(100.0, 50.0), (212.5, 200.0)]);
        assert_eq!(crop(&once, &source, Some(&target)).unwrap(), once);
    }

    #[test]
    fn test_crop_is_stable_when_target_center_lies_inside_source() {
        let source = Shape::rectangle(0.0, 0.0, 100.0, 60.0);
        let target = Shape::circle(7.0, 30.0, 30.0);
        let waypoints = [Point::new(50.0, 30.0), Point::new(7.0, 30.0)];

        let once = crop(&waypoints, &source, Some(&target)).unwrap();
        assert_eq!(positions(&once), vec![(0.0, 30.0), (37.0, 30.0)]);
        assert_eq!(once[0].original, Some(Anchor::new(50.0, 30.0)));
        assert_eq!(once[1].original, Some(Anchor::new(7.0, 30.0)));

        let twice = crop(&once, &source, Some(&target)).unwrap();
        assert_eq!(twice, once);
    }
}
