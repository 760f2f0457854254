//! Geometric predicates and intersection primitives

use super::types::{Point, Rectangle, Shape, ShapeKind};

const EPSILON: f64 = 1e-9;

/// Euclidean distance between two points
pub fn point_distance(a: &Point, b: &Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Midpoint of two points
pub fn mid_point(a: &Point, b: &Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Shortest distance from `point` to the segment `a`-`b`
pub fn distance_to_segment(point: &Point, a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        return point_distance(point, a);
    }
    let t = (((point.x - a.x) * dx + (point.y - a.y) * dy) / length_sq).clamp(0.0, 1.0);
    point_distance(point, &Point::new(a.x + t * dx, a.y + t * dy))
}

/// Whether `r` lies within `accuracy` of the infinite line through `p` and `q`
///
/// Returns false when `p` and `q` coincide, since they define no line.
pub fn points_on_line(p: &Point, q: &Point, r: &Point, accuracy: f64) -> bool {
    let length = point_distance(p, q);
    if length == 0.0 {
        return false;
    }
    let cross = (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x);
    (cross / length).abs() <= accuracy
}

/// How two points line up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Same y: the segment between them is horizontal
    Horizontal,
    /// Same x: the segment between them is vertical
    Vertical,
}

/// Alignment of two points within `threshold`, horizontal checked first
pub fn points_aligned(a: &Point, b: &Point, threshold: f64) -> Option<Alignment> {
    if (a.y - b.y).abs() <= threshold {
        Some(Alignment::Horizontal)
    } else if (a.x - b.x).abs() <= threshold {
        Some(Alignment::Vertical)
    } else {
        None
    }
}

/// Whether every point lies on one horizontal or one vertical line with the first
pub fn points_all_aligned(points: &[Point], threshold: f64) -> bool {
    let Some(first) = points.first() else {
        return true;
    };
    points.iter().all(|p| (p.y - first.y).abs() <= threshold)
        || points.iter().all(|p| (p.x - first.x).abs() <= threshold)
}

/// Strict containment in `rect` grown by `tolerance` on every side
pub fn point_in_rect(point: &Point, rect: &Rectangle, tolerance: f64) -> bool {
    point.x > rect.x - tolerance
        && point.y > rect.y - tolerance
        && point.x < rect.right() + tolerance
        && point.y < rect.bottom() + tolerance
}

/// Intersections of a circle with the line `a*x + b*y + c = 0`
///
/// Returns zero, one (tangent) or two points.
pub fn circle_line_intersections(center: &Point, radius: f64, a: f64, b: f64, c: f64) -> Vec<Point> {
    let norm = (a * a + b * b).sqrt();
    if norm == 0.0 {
        return Vec::new();
    }
    let distance = (a * center.x + b * center.y + c) / norm;
    if distance.abs() > radius + EPSILON {
        return Vec::new();
    }
    let foot = Point::new(center.x - a * distance / norm, center.y - b * distance / norm);
    let half_chord = (radius * radius - distance * distance).max(0.0).sqrt();
    if half_chord <= EPSILON {
        return vec![foot];
    }
    let (ux, uy) = (-b / norm, a / norm);
    vec![
        Point::new(foot.x + ux * half_chord, foot.y + uy * half_chord),
        Point::new(foot.x - ux * half_chord, foot.y - uy * half_chord),
    ]
}

/// Intersection of segment `p0`-`p1` with segment `q0`-`q1`
///
/// Returns the point and its parameter along `p0`-`p1`. Parallel segments
/// never intersect.
pub fn segment_intersection(p0: &Point, p1: &Point, q0: &Point, q1: &Point) -> Option<(Point, f64)> {
    let (rx, ry) = (p1.x - p0.x, p1.y - p0.y);
    let (sx, sy) = (q1.x - q0.x, q1.y - q0.y);
    let denominator = rx * sy - ry * sx;
    if denominator.abs() < EPSILON {
        return None;
    }
    let (wx, wy) = (q0.x - p0.x, q0.y - p0.y);
    let t = (wx * sy - wy * sx) / denominator;
    let u = (wx * ry - wy * rx) / denominator;
    let range = -EPSILON..=1.0 + EPSILON;
    if !range.contains(&t) || !range.contains(&u) {
        return None;
    }
    Some((Point::new(p0.x + t * rx, p0.y + t * ry), t.clamp(0.0, 1.0)))
}

/// Intersections of segment `p0`-`p1` with a circle, ordered along the segment
pub fn segment_circle_intersections(
    p0: &Point,
    p1: &Point,
    center: &Point,
    radius: f64,
) -> Vec<(Point, f64)> {
    let (dx, dy) = (p1.x - p0.x, p1.y - p0.y);
    let (fx, fy) = (p0.x - center.x, p0.y - center.y);
    let a = dx * dx + dy * dy;
    if a == 0.0 {
        return Vec::new();
    }
    let b = 2.0 * (fx * dx + fy * dy);
    let c = fx * fx + fy * fy - radius * radius;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }
    let root = discriminant.sqrt();
    let mut ts = vec![(-b - root) / (2.0 * a)];
    if root > 0.0 {
        ts.push((-b + root) / (2.0 * a));
    }
    ts.into_iter()
        .filter(|t| (0.0..=1.0).contains(t))
        .map(|t| (Point::new(p0.x + t * dx, p0.y + t * dy), t))
        .collect()
}

/// A crossing between a polyline and an outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathIntersection {
    pub point: Point,
    /// Index of the polyline segment (segment `i` runs from waypoint `i` to `i + 1`)
    pub segment: usize,
    /// Parameter along that segment, 0 at its start
    pub t: f64,
}

/// Closed boundary of a shape
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Polygon(Vec<Point>),
    Circle { center: Point, radius: f64 },
}

impl Outline {
    /// All crossings of `path` with this outline, ordered by segment then parameter
    pub fn intersections(&self, path: &[Point]) -> Vec<PathIntersection> {
        let mut found: Vec<PathIntersection> = Vec::new();
        for (segment, pair) in path.windows(2).enumerate() {
            let (p0, p1) = (&pair[0], &pair[1]);
            let hits = match self {
                Outline::Circle { center, radius } => {
                    segment_circle_intersections(p0, p1, center, *radius)
                }
                Outline::Polygon(corners) => (0..corners.len())
                    .filter_map(|i| {
                        let next = (i + 1) % corners.len();
                        segment_intersection(p0, p1, &corners[i], &corners[next])
                    })
                    .collect(),
            };
            for (point, t) in hits {
                // a path through a polygon corner hits both edges
                let duplicate = found
                    .iter()
                    .any(|f| f.segment == segment && point_distance(&f.point, &point) < EPSILON);
                if !duplicate {
                    found.push(PathIntersection { point, segment, t });
                }
            }
        }
        found.sort_by(|a, b| a.segment.cmp(&b.segment).then(a.t.total_cmp(&b.t)));
        found
    }

    /// Distance from `point` to the nearest point of the outline
    pub fn distance(&self, point: &Point) -> f64 {
        match self {
            Outline::Circle { center, radius } => (point_distance(point, center) - radius).abs(),
            Outline::Polygon(corners) => (0..corners.len())
                .map(|i| distance_to_segment(point, &corners[i], &corners[(i + 1) % corners.len()]))
                .fold(f64::INFINITY, f64::min),
        }
    }
}

impl Shape {
    /// The shape's boundary as an intersectable outline
    pub fn outline(&self) -> Outline {
        match self.kind {
            ShapeKind::Circle => Outline::Circle {
                center: self.mid(),
                radius: self.radius(),
            },
            ShapeKind::Rectangle => {
                let b = &self.bounds;
                Outline::Polygon(vec![
                    Point::new(b.x, b.y),
                    Point::new(b.right(), b.y),
                    Point::new(b.right(), b.bottom()),
                    Point::new(b.x, b.bottom()),
                ])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_on_line() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(100.0, 0.0);
        assert!(points_on_line(&p, &q, &Point::new(50.0, 4.0), 5.0));
        assert!(!points_on_line(&p, &q, &Point::new(50.0, 6.0), 5.0));
        // coincident endpoints define no line
        assert!(!points_on_line(&p, &p, &Point::new(0.0, 0.0), 5.0));
    }

    #[test]
    fn test_points_aligned() {
        let a = Point::new(0.0, 0.0);
        assert_eq!(
            points_aligned(&a, &Point::new(50.0, 1.0), 2.0),
            Some(Alignment::Horizontal)
        );
        assert_eq!(
            points_aligned(&a, &Point::new(2.0, 50.0), 2.0),
            Some(Alignment::Vertical)
        );
        assert_eq!(points_aligned(&a, &Point::new(10.0, 10.0), 2.0), None);
    }

    #[test]
    fn test_points_all_aligned() {
        let row = [Point::new(0.0, 5.0), Point::new(20.0, 5.0), Point::new(40.0, 6.0)];
        assert!(points_all_aligned(&row, 2.0));
        let bent = [Point::new(0.0, 5.0), Point::new(20.0, 5.0), Point::new(20.0, 40.0)];
        assert!(!points_all_aligned(&bent, 2.0));
    }

    #[test]
    fn test_point_in_rect_is_strict() {
        let rect = Rectangle::new(0.0, 0.0, 100.0, 100.0);
        assert!(point_in_rect(&Point::new(-19.0, 50.0), &rect, 20.0));
        assert!(!point_in_rect(&Point::new(-20.0, 50.0), &rect, 20.0));
        assert!(!point_in_rect(&Point::new(0.0, 50.0), &rect, 0.0));
    }

    #[test]
    fn test_circle_line_intersections() {
        let center = Point::new(0.0, 0.0);
        // vertical line x = 0
        let hits = circle_line_intersections(&center, 10.0, 1.0, 0.0, 0.0);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().any(|p| (p.y - 10.0).abs() < 1e-9));
        assert!(hits.iter().any(|p| (p.y + 10.0).abs() < 1e-9));
        // tangent at x = 10
        assert_eq!(circle_line_intersections(&center, 10.0, 1.0, 0.0, -10.0).len(), 1);
        // miss at x = 11
        assert!(circle_line_intersections(&center, 10.0, 1.0, 0.0, -11.0).is_empty());
    }

    #[test]
    fn test_segment_intersection() {
        let (point, t) = segment_intersection(
            &Point::new(0.0, 0.0),
            &Point::new(10.0, 0.0),
            &Point::new(5.0, -5.0),
            &Point::new(5.0, 5.0),
        )
        .unwrap();
        assert_eq!(point, Point::new(5.0, 0.0));
        assert_eq!(t, 0.5);

        let parallel = segment_intersection(
            &Point::new(0.0, 0.0),
            &Point::new(10.0, 0.0),
            &Point::new(0.0, 1.0),
            &Point::new(10.0, 1.0),
        );
        assert!(parallel.is_none());
    }

    #[test]
    fn test_rectangle_outline_intersections_dedupe_corners() {
        let shape = Shape::rectangle(0.0, 0.0, 10.0, 10.0);
        let path = [Point::new(-5.0, -5.0), Point::new(15.0, 15.0)];
        let hits = shape.outline().intersections(&path);
        assert_eq!(hits.len(), 2);
        assert!(hits[0].t < hits[1].t);
    }

    #[test]
    fn test_distance_to_segment() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(distance_to_segment(&Point::new(5.0, 3.0), &a, &b), 3.0);
        assert_eq!(distance_to_segment(&Point::new(13.0, 4.0), &a, &b), 5.0);
    }

    #[test]
    fn test_outline_distance() {
        let rect = Shape::rectangle(0.0, 0.0, 100.0, 60.0).outline();
        assert_eq!(rect.distance(&Point::new(100.0, 30.0)), 0.0);
        assert_eq!(rect.distance(&Point::new(50.0, 30.0)), 30.0);
        assert_eq!(rect.distance(&Point::new(-3.0, -4.0)), 5.0);

        let circle = Shape::circle(0.0, 0.0, 10.0).outline();
        assert_eq!(circle.distance(&Point::new(6.0, 8.0)), 0.0);
        assert_eq!(circle.distance(&Point::new(0.0, 0.0)), 10.0);
    }
}
