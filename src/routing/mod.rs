//! Orthogonal connection routing
//!
//! Computes connector polylines between shapes, crops their ends onto shape
//! boundaries, and supports interactive segment moves.

pub mod config;
pub mod crop;
pub mod docking;
pub mod error;
pub mod geometry;
pub mod intersection;
pub mod manhattan;
pub mod orientation;
pub mod segment_move;
pub mod simplify;
pub mod types;

pub use config::RoutingConfig;
pub use crop::{crop, get_docking};
pub use docking::{dock_circle, dock_rectangle, docking_direction, DockingResolution};
pub use error::RoutingError;
pub use geometry::{point_distance, points_aligned, points_on_line, Alignment, Outline};
pub use intersection::{approx_intersection, element_line_intersection, INTERSECTION_THRESHOLD};
pub use manhattan::{
    connect_points, connect_points_with_config, connect_shape_to_point, connect_shape_to_point_with_config,
    layout_straight, repair_connection, repair_connection_with_config, route, route_with_config, select_layout,
};
pub use orientation::{get_orientation, Padding};
pub use segment_move::{DragDelta, SegmentMove, SegmentMoveContext};
pub use simplify::{simplify, without_redundant_points};
pub use types::*;
