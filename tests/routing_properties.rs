//! Randomized routing properties
//!
//! Sweeps shapes that sit apart, touch, or overlap and checks that routed
//! ends stay on their shapes, that cropping a routed connection again
//! changes nothing, and that simplification settles after one pass.

use ortho_connect::{crop, route, simplify, Hints, Layout, Point, Rectangle, Shape, ShapeKind};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-6;

fn rectangle_strategy() -> impl Strategy<Value = Shape> {
    (-150i32..250, -150i32..200, 10i32..120, 10i32..120)
        .prop_map(|(x, y, w, h)| Shape::rectangle(x as f64, y as f64, w as f64, h as f64))
}

fn circle_strategy() -> impl Strategy<Value = Shape> {
    (-120i32..220, -120i32..180, 5i32..60).prop_map(|(cx, cy, r)| Shape::circle(cx as f64, cy as f64, r as f64))
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    prop_oneof![rectangle_strategy(), circle_strategy()]
}

fn moved(shape: Shape, dx: f64, dy: f64) -> Shape {
    let b = shape.bounds;
    Shape::new(Rectangle::new(b.x + dx, b.y + dy, b.width, b.height), shape.kind)
}

/// Shape pairs anywhere in a shared area, plus pairs placed edge to edge
/// with a small gap or overlap
fn shape_pair_strategy() -> impl Strategy<Value = (Shape, Shape)> {
    prop_oneof![
        (shape_strategy(), shape_strategy()),
        (shape_strategy(), shape_strategy(), -12i32..30, -40i32..40).prop_map(|(source, target, gap, shift)| {
            let dx = source.bounds.right() + gap as f64 - target.bounds.x;
            let dy = source.bounds.y + shift as f64 - target.bounds.y;
            (source, moved(target, dx, dy))
        }),
        (shape_strategy(), shape_strategy(), -12i32..30, -40i32..40).prop_map(|(source, target, gap, shift)| {
            let dx = source.bounds.x + shift as f64 - target.bounds.x;
            let dy = source.bounds.bottom() + gap as f64 - target.bounds.y;
            (source, moved(target, dx, dy))
        }),
    ]
}

fn layout_strategy() -> impl Strategy<Value = Layout> {
    prop_oneof![
        Just(Layout::HorizontalHorizontal),
        Just(Layout::VerticalVertical),
        Just(Layout::HorizontalVertical),
        Just(Layout::VerticalHorizontal),
    ]
}

/// An orthogonal path whose bends are nudged off their axis by a few pixels
fn jittered_path_strategy() -> impl Strategy<Value = Vec<Point>> {
    (
        (-100i32..100, -100i32..100),
        prop::collection::vec((-80i32..80, -4i32..=4), 1..8),
    )
        .prop_map(|((x, y), legs)| {
            let mut point = Point::new(x as f64, y as f64);
            let mut path = vec![point];
            for (index, (length, jitter)) in legs.into_iter().enumerate() {
                point = if index % 2 == 0 {
                    Point::new(point.x + length as f64, point.y + jitter as f64)
                } else {
                    Point::new(point.x + jitter as f64, point.y + length as f64)
                };
                path.push(point);
            }
            path
        })
}

fn on_outline(point: &Point, shape: &Shape) -> bool {
    match shape.kind {
        ShapeKind::Circle => {
            let center = shape.mid();
            ((point.x - center.x).hypot(point.y - center.y) - shape.radius()).abs() <= TOLERANCE
        }
        ShapeKind::Rectangle => {
            let b = &shape.bounds;
            let near = |value: f64, edge: f64| (value - edge).abs() <= TOLERANCE;
            let within_x = point.x >= b.x - TOLERANCE && point.x <= b.right() + TOLERANCE;
            let within_y = point.y >= b.y - TOLERANCE && point.y <= b.bottom() + TOLERANCE;
            ((near(point.x, b.x) || near(point.x, b.right())) && within_y)
                || ((near(point.y, b.y) || near(point.y, b.bottom())) && within_x)
        }
    }
}

/// Whether `point` lies outside `shape` grown by one pixel
fn clear_of(shape: &Shape, point: Point) -> bool {
    match shape.kind {
        ShapeKind::Circle => {
            let center = shape.mid();
            (point.x - center.x).hypot(point.y - center.y) > shape.radius() + 1.0
        }
        ShapeKind::Rectangle => {
            let b = &shape.bounds;
            point.x < b.x - 1.0 || point.x > b.right() + 1.0 || point.y < b.y - 1.0 || point.y > b.bottom() + 1.0
        }
    }
}

/// A straight connector between shapes whose centers sit inside each other
/// has no boundary crossing to dock on
fn centers_apart(source: &Shape, target: &Shape) -> bool {
    clear_of(source, target.mid()) && clear_of(target, source.mid())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn routed_ends_lie_on_their_shapes((source, target) in shape_pair_strategy(), layout in layout_strategy()) {
        prop_assume!(centers_apart(&source, &target));
        let hints = Hints::new().with_preferred_layouts(vec![layout]);

        let waypoints = route(&source, &target, None, None, &hints).unwrap();

        prop_assert!(waypoints.len() >= 2);
        let first = &waypoints[0];
        let last = &waypoints[waypoints.len() - 1];
        prop_assert!(on_outline(first, &source), "start {:?} off {:?}", first, source);
        prop_assert!(on_outline(last, &target), "end {:?} off {:?}", last, target);
    }

    #[test]
    fn cropping_a_route_again_changes_nothing((source, target) in shape_pair_strategy(), layout in layout_strategy()) {
        prop_assume!(centers_apart(&source, &target));
        let hints = Hints::new().with_preferred_layouts(vec![layout]);

        let waypoints = route(&source, &target, None, None, &hints).unwrap();
        let again = crop(&waypoints, &source, Some(&target)).unwrap();

        prop_assert_eq!(again.len(), waypoints.len());
        for (cropped, routed) in again.iter().zip(&waypoints) {
            prop_assert!(
                (cropped.x - routed.x).abs() <= TOLERANCE && (cropped.y - routed.y).abs() <= TOLERANCE,
                "{:?} moved to {:?}",
                routed,
                cropped
            );
            prop_assert_eq!(cropped.original, routed.original);
        }
    }

    #[test]
    fn simplify_settles_in_one_pass(path in jittered_path_strategy()) {
        let once = simplify(&path, 5.0);

        prop_assert_eq!(&simplify(&once, 5.0), &once);
        prop_assert!(once.len() <= path.len());
        prop_assert_eq!(once[0], path[0]);
        prop_assert_eq!(once[once.len() - 1], path[path.len() - 1]);
        if once.len() > 2 {
            prop_assert!(
                once.windows(2).all(|pair| !pair[0].same_position(&pair[1])),
                "repeated point in {:?}",
                once
            );
        }
    }
}
