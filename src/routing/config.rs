//! Configuration for the routing engine

use serde::Deserialize;

use super::types::Layout;

/// Tunable thresholds for routing, cropping and segment moves
///
/// Deserializes from the `[routing]` table of a scene file; missing keys
/// keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Tolerance when removing collinear bend-points
    pub simplify_accuracy: f64,

    /// Radius used to find the segment or bend-point under a cursor
    pub intersection_threshold: f64,

    /// Offset of the extra bend-point inserted when an explicit direction has to turn
    pub additional_waypoint_distance: f64,

    /// How close a bend-point may come to a shape before a repair drops it
    pub repair_overlap_tolerance: f64,

    /// Maximum offset for two points to still count as axis-aligned
    pub aligned_threshold: f64,

    /// Orientation padding for `h:h` and `v:v` layouts
    pub straight_threshold: f64,

    /// Orientation padding for `h:v` and `v:h` layouts
    pub turn_threshold: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            simplify_accuracy: 5.0,
            intersection_threshold: 10.0,
            additional_waypoint_distance: 20.0,
            repair_overlap_tolerance: 20.0,
            aligned_threshold: 2.0,
            straight_threshold: 20.0,
            turn_threshold: -10.0,
        }
    }
}

impl RoutingConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the simplification accuracy
    pub fn with_simplify_accuracy(mut self, accuracy: f64) -> Self {
        self.simplify_accuracy = accuracy;
        self
    }

    /// Set the cursor hit radius
    pub fn with_intersection_threshold(mut self, threshold: f64) -> Self {
        self.intersection_threshold = threshold;
        self
    }

    /// Set the distance of the extra turn bend-point
    pub fn with_additional_waypoint_distance(mut self, distance: f64) -> Self {
        self.additional_waypoint_distance = distance;
        self
    }

    /// Set the orientation paddings for straight and turning layouts
    pub fn with_orientation_thresholds(mut self, straight: f64, turn: f64) -> Self {
        self.straight_threshold = straight;
        self.turn_threshold = turn;
        self
    }

    /// Orientation padding to use for a given layout
    ///
    /// Positive padding demands a gap before two boxes count as side by side,
    /// negative padding lets them overlap a little.
    pub fn orientation_threshold(&self, layout: Layout) -> f64 {
        match layout {
            Layout::HorizontalHorizontal | Layout::VerticalVertical => self.straight_threshold,
            Layout::HorizontalVertical | Layout::VerticalHorizontal => self.turn_threshold,
            Layout::Straight => 0.0,
        }
    }
}
