//! Interactive segment moves
//!
//! A segment move drags one axis-aligned segment of a connection
//! perpendicular to itself. Every move is recomputed from the snapshot taken
//! when the gesture started, so replaying the same deltas always yields the
//! same waypoints.

use tracing::debug;

use super::config::RoutingConfig;
use super::crop::crop;
use super::error::RoutingError;
use super::geometry::{distance_to_segment, points_aligned, Alignment};
use super::intersection::approx_intersection_with_threshold;
use super::orientation::get_orientation;
use super::simplify::simplify;
use super::types::{ApproxIntersection, Axis, Connection, Orientation, Point, Shape};

/// Pointer movement in model units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragDelta {
    pub dx: f64,
    pub dy: f64,
}

impl DragDelta {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Convert screen-space pointer movement at the given zoom into model units
    pub fn from_screen(movement_x: f64, movement_y: f64, scale: f64) -> Self {
        Self {
            dx: (movement_x / scale).round(),
            dy: (movement_y / scale).round(),
        }
    }

    fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.dx,
            Axis::Y => self.dy,
        }
    }
}

/// State of an active segment move
#[derive(Debug, Clone)]
pub struct SegmentMoveContext {
    connection: Connection,
    axis: Axis,
    segment_start_index: usize,
    segment_end_index: usize,
    segment_start: Point,
    segment_end: Point,
    accumulated_delta: f64,
    new_waypoints: Vec<Point>,
    new_segment_start_index: usize,
}

impl SegmentMoveContext {
    /// The connection as it was when the move started
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// The axis the segment moves along
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Indices of the grabbed segment's waypoints in the snapshot
    pub fn segment_indices(&self) -> (usize, usize) {
        (self.segment_start_index, self.segment_end_index)
    }

    pub fn accumulated_delta(&self) -> f64 {
        self.accumulated_delta
    }

    /// Waypoints after the latest move
    pub fn waypoints(&self) -> &[Point] {
        &self.new_waypoints
    }

    /// Index of the moved segment's first waypoint in [`Self::waypoints`]
    pub fn new_segment_start_index(&self) -> usize {
        self.new_segment_start_index
    }

    fn recompute(&mut self) -> Result<(), RoutingError> {
        let delta = self.accumulated_delta;
        let mut waypoints = self.connection.waypoints.clone();
        let s = self.segment_start_index;
        let e = self.segment_end_index;
        let count = waypoints.len();

        let new_start = self.axis.add(self.segment_start, delta);
        let new_end = self.axis.add(self.segment_end, delta);
        waypoints[s] = new_start;
        waypoints[e] = new_end;

        let mut new_start_index = s;

        if s < 2 {
            let inside = get_orientation(&self.connection.source.bounds, new_start, 0.0) == Orientation::Intersect;
            if s == 1 && inside {
                // the first segment collapsed into the source
                waypoints.remove(0);
                waypoints[0] = new_start;
                new_start_index -= 1;
            } else if s == 0 && !inside {
                // the docked segment left the source; keep a leg to the old anchor
                waypoints.insert(0, self.segment_start);
                new_start_index += 1;
            }
        }

        if e + 3 > count {
            let inside = get_orientation(&self.connection.target.bounds, new_end, 0.0) == Orientation::Intersect;
            if e + 2 == count && inside {
                waypoints.pop();
                if let Some(last) = waypoints.last_mut() {
                    *last = new_end;
                }
            } else if e + 1 == count && !inside {
                waypoints.push(self.segment_end);
            }
        }

        self.new_waypoints = crop(&waypoints, &self.connection.source, Some(&self.connection.target))?;
        self.new_segment_start_index = new_start_index;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
enum SegmentMoveState {
    #[default]
    Idle,
    Active(Box<SegmentMoveContext>),
}

/// Segment move gesture: `activate`, any number of `move_by`, then `release`
#[derive(Debug, Clone, Default)]
pub struct SegmentMove {
    state: SegmentMoveState,
    config: RoutingConfig,
}

impl SegmentMove {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RoutingConfig) -> Self {
        Self {
            state: SegmentMoveState::Idle,
            config,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SegmentMoveState::Active(_))
    }

    /// The active move's context, if any
    pub fn context(&self) -> Option<&SegmentMoveContext> {
        match &self.state {
            SegmentMoveState::Active(ctx) => Some(ctx.as_ref()),
            SegmentMoveState::Idle => None,
        }
    }

    /// Start moving the segment of `connection` under `grab`
    ///
    /// A grab on an interior bend-point takes the adjacent segment closer to
    /// the grab point. An already active move is discarded.
    pub fn activate(&mut self, connection: Connection, grab: Point) -> Result<&SegmentMoveContext, RoutingError> {
        let waypoints = &connection.waypoints;
        if waypoints.len() < 2 {
            return Err(RoutingError::too_few_waypoints(waypoints.len()));
        }
        let hit = approx_intersection_with_threshold(waypoints, grab, self.config.intersection_threshold)
            .ok_or_else(|| RoutingError::no_segment_at(grab))?;

        let (segment_start_index, segment_end_index) = segment_at(waypoints, &hit, grab);
        let start = waypoints[segment_start_index];
        let end = waypoints[segment_end_index];

        let axis = match points_aligned(&start, &end, self.config.aligned_threshold) {
            Some(Alignment::Horizontal) => Axis::Y,
            Some(Alignment::Vertical) => Axis::X,
            None => return Err(RoutingError::segment_not_orthogonal(start, end)),
        };

        let segment_start = if segment_start_index == 0 {
            docking_anchor(start, &connection.source, axis)
        } else {
            start
        };
        let segment_end = if segment_end_index + 1 == waypoints.len() {
            docking_anchor(end, &connection.target, axis)
        } else {
            end
        };

        if self.is_active() {
            debug!("discarding unfinished segment move");
        }
        debug!(
            start = segment_start_index,
            end = segment_end_index,
            ?axis,
            "segment move started"
        );

        let context = SegmentMoveContext {
            new_waypoints: connection.waypoints.clone(),
            connection,
            axis,
            segment_start_index,
            segment_end_index,
            segment_start,
            segment_end,
            accumulated_delta: 0.0,
            new_segment_start_index: segment_start_index,
        };
        self.state = SegmentMoveState::Active(Box::new(context));

        self.context().ok_or(RoutingError::NotActive)
    }

    /// Apply pointer movement; only the component along the move axis counts
    pub fn move_by(&mut self, delta: DragDelta) -> Result<&[Point], RoutingError> {
        let SegmentMoveState::Active(ctx) = &mut self.state else {
            return Err(RoutingError::NotActive);
        };
        ctx.accumulated_delta += delta.along(ctx.axis);
        ctx.recompute()?;
        Ok(ctx.waypoints())
    }

    /// Finish the move, returning rounded, simplified and cropped waypoints
    pub fn release(&mut self) -> Result<Vec<Point>, RoutingError> {
        let SegmentMoveState::Active(ctx) = std::mem::take(&mut self.state) else {
            return Err(RoutingError::NotActive);
        };

        let rounded: Vec<Point> = ctx.new_waypoints.iter().map(Point::rounded).collect();
        let simplified = simplify(&rounded, self.config.simplify_accuracy);
        let waypoints = crop(&simplified, &ctx.connection.source, Some(&ctx.connection.target))?;

        debug!(
            delta = ctx.accumulated_delta,
            waypoints = waypoints.len(),
            "segment move finished"
        );
        Ok(waypoints)
    }

    /// Abandon the move without producing waypoints
    pub fn cancel(&mut self) {
        self.state = SegmentMoveState::Idle;
    }
}

/// Segment indices for a hit: the hit segment, or the segment adjacent to a bend-point
fn segment_at(waypoints: &[Point], hit: &ApproxIntersection, grab: Point) -> (usize, usize) {
    let last = waypoints.len() - 1;
    if !hit.bendpoint {
        let end = hit.index.clamp(1, last);
        return (end - 1, end);
    }

    let i = hit.index;
    if i == 0 {
        return (0, 1);
    }
    if i >= last {
        return (last - 1, last);
    }

    let before = distance_to_segment(&grab, &waypoints[i - 1], &waypoints[i]);
    let after = distance_to_segment(&grab, &waypoints[i], &waypoints[i + 1]);
    if after < before {
        (i, i + 1)
    } else {
        (i - 1, i)
    }
}

/// Pre-crop anchor of a docked end: its original, or the point pulled onto
/// the shape center on the axis the segment does not move along
fn docking_anchor(point: Point, shape: &Shape, axis: Axis) -> Point {
    match point.original {
        Some(original) => Point::from(original),
        None => {
            let other = axis.flip();
            other.set(point, other.of(&shape.mid()))
        }
    }
}
