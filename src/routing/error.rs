//! Error types for the routing engine

use thiserror::Error;

use super::types::Point;

/// Errors that can occur while routing, cropping or moving connections
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// A waypoint list shorter than two points
    #[error("a connection needs at least two waypoints, got {count}")]
    TooFewWaypoints { count: usize },

    /// Shape kind name that the engine does not know
    #[error("unknown shape kind '{kind}' (expected rectangle or circle)")]
    UnknownShapeKind { kind: String },

    /// Layout name that the engine does not know
    #[error("unknown layout '{layout}' (expected h:h, v:v, h:v, v:h or straight)")]
    UnknownLayout { layout: String },

    /// Shape bounds that cannot be routed against
    #[error("invalid shape: {reason}")]
    InvalidShape { reason: String },

    /// The docking line misses the circle entirely
    #[error("docking line through ({x}, {y}) does not intersect the circle")]
    NoCircleIntersection { x: f64, y: f64 },

    /// The grabbed segment is neither horizontal nor vertical
    #[error("segment ({}, {}) -> ({}, {}) is not axis-aligned", start.x, start.y, end.x, end.y)]
    SegmentNotOrthogonal { start: Point, end: Point },

    /// Nothing on the connection is close enough to the grab point
    #[error("no connection segment near ({x}, {y})")]
    NoSegmentAt { x: f64, y: f64 },

    /// Move or release without an active segment move
    #[error("no segment move is active")]
    NotActive,
}

impl RoutingError {
    /// Create a too-few-waypoints error
    pub fn too_few_waypoints(count: usize) -> Self {
        Self::TooFewWaypoints { count }
    }

    /// Create an unknown shape kind error
    pub fn unknown_shape_kind(kind: impl Into<String>) -> Self {
        Self::UnknownShapeKind { kind: kind.into() }
    }

    /// Create an unknown layout error
    pub fn unknown_layout(layout: impl Into<String>) -> Self {
        Self::UnknownLayout {
            layout: layout.into(),
        }
    }

    /// Create an invalid shape error
    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            reason: reason.into(),
        }
    }

    pub fn no_circle_intersection(point: Point) -> Self {
        Self::NoCircleIntersection {
            x: point.x,
            y: point.y,
        }
    }

    pub fn segment_not_orthogonal(start: Point, end: Point) -> Self {
        Self::SegmentNotOrthogonal { start, end }
    }

    pub fn no_segment_at(point: Point) -> Self {
        Self::NoSegmentAt {
            x: point.x,
            y: point.y,
        }
    }
}
