//! Ortho Connect - orthogonal connector routing for diagram editors
//!
//! This library routes connectors between rectangles and circles as
//! horizontal and vertical segments, crops their ends onto the shape
//! boundaries, repairs them when a shape moves, and supports dragging
//! individual segments.
//!
//! # Example
//!
//! ```rust
//! use ortho_connect::{route, Hints, Shape};
//!
//! let source = Shape::rectangle(0.0, 0.0, 100.0, 50.0);
//! let target = Shape::rectangle(0.0, 200.0, 100.0, 50.0);
//! let waypoints = route(&source, &target, None, None, &Hints::default()).unwrap();
//!
//! assert_eq!((waypoints[0].x, waypoints[0].y), (50.0, 50.0));
//! let last = waypoints[waypoints.len() - 1];
//! assert_eq!((last.x, last.y), (50.0, 200.0));
//! ```

pub mod error;
pub mod routing;
pub mod scene;

pub use error::SceneError;
pub use routing::{
    approx_intersection, connect_points, connect_shape_to_point, crop, get_orientation, repair_connection, route,
    route_with_config, simplify, ApproxIntersection, Connection, Directions, DragDelta, Heading, Hints, Layout,
    Orientation, Point, Rectangle, RoutingConfig, RoutingError, SegmentMove, Shape, ShapeKind,
};
pub use scene::{format_routes, RoutedConnection, Scene};

/// Route every connection of a TOML scene and format the result
///
/// This is the main entry point for scene files. Each output line reads
/// `from -> to: (x, y) (x, y) ...`.
///
/// # Example
///
/// ```rust
/// use ortho_connect::route_scene;
///
/// let scene = r#"
/// [[shapes]]
/// id = "a"
/// x = 0
/// y = 0
/// width = 100
/// height = 50
///
/// [[shapes]]
/// id = "b"
/// x = 300
/// y = 0
/// width = 100
/// height = 50
///
/// [[connections]]
/// from = "a"
/// to = "b"
/// "#;
///
/// assert_eq!(route_scene(scene).unwrap(), "a -> b: (100, 25) (300, 25)\n");
/// ```
pub fn route_scene(source: &str) -> Result<String, SceneError> {
    let scene = Scene::from_str(source)?;
    let routes = scene.route()?;
    Ok(format_routes(&routes))
}
