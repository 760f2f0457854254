//! Core types for the routing engine

use std::fmt;
use std::str::FromStr;

use super::error::RoutingError;

/// Position a waypoint had before it was cropped onto a shape boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 2D point in model space
///
/// `original` keeps the first pre-crop position of a docked waypoint so that
/// repeated re-routing can dock again from the caller's intended anchor.
/// It is a plain [`Anchor`], so the chain never grows past one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub original: Option<Anchor>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            original: None,
        }
    }

    /// Same position, remembering `original` as the pre-crop anchor
    pub fn with_original(mut self, original: Anchor) -> Self {
        self.original = Some(original);
        self
    }

    /// This point's own position, without the retained original
    pub fn anchor(&self) -> Anchor {
        Anchor::new(self.x, self.y)
    }

    /// The retained original, or this point's position if it has none
    pub fn original_or_self(&self) -> Anchor {
        self.original.unwrap_or_else(|| self.anchor())
    }

    /// Compare positions only, ignoring the retained original
    pub fn same_position(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Round both coordinates to whole model units, keeping the original
    pub fn rounded(&self) -> Point {
        Point {
            x: self.x.round(),
            y: self.y.round(),
            original: self.original,
        }
    }
}

impl From<Anchor> for Point {
    fn from(anchor: Anchor) -> Self {
        Point::new(anchor.x, anchor.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// An axis-aligned box, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the rectangle
    pub fn mid(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if this rectangle contains a point (edges included)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// A rectangle with no area has not been measured by the host yet
    pub fn is_unmeasured(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// Top/right/bottom/left view of a rectangle or point, used for orientation checks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trbl {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl From<&Rectangle> for Trbl {
    fn from(bounds: &Rectangle) -> Self {
        Trbl {
            top: bounds.y,
            right: bounds.right(),
            bottom: bounds.bottom(),
            left: bounds.x,
        }
    }
}

impl From<Rectangle> for Trbl {
    fn from(bounds: Rectangle) -> Self {
        Trbl::from(&bounds)
    }
}

impl From<&Point> for Trbl {
    fn from(point: &Point) -> Self {
        Trbl {
            top: point.y,
            right: point.x,
            bottom: point.y,
            left: point.x,
        }
    }
}

impl From<Point> for Trbl {
    fn from(point: Point) -> Self {
        Trbl::from(&point)
    }
}

impl From<Trbl> for Rectangle {
    fn from(trbl: Trbl) -> Self {
        Rectangle::new(
            trbl.left,
            trbl.top,
            trbl.right - trbl.left,
            trbl.bottom - trbl.top,
        )
    }
}

/// The built-in shape kinds a connection can dock onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

impl FromStr for ShapeKind {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectangle" | "rect" => Ok(ShapeKind::Rectangle),
            "circle" => Ok(ShapeKind::Circle),
            other => Err(RoutingError::unknown_shape_kind(other)),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Rectangle => write!(f, "rectangle"),
            ShapeKind::Circle => write!(f, "circle"),
        }
    }
}

/// A shape a connection docks onto
///
/// Circles are described by their bounding square: the diameter is the
/// width and the circle is centered in the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub bounds: Rectangle,
    pub kind: ShapeKind,
}

impl Shape {
    pub fn new(bounds: Rectangle, kind: ShapeKind) -> Self {
        Self { bounds, kind }
    }

    /// Create a rectangle shape
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Rectangle::new(x, y, width, height), ShapeKind::Rectangle)
    }

    /// Create a circle shape from its center and radius
    pub fn circle(cx: f64, cy: f64, radius: f64) -> Self {
        Self::new(
            Rectangle::new(cx - radius, cy - radius, radius * 2.0, radius * 2.0),
            ShapeKind::Circle,
        )
    }

    /// Center of the shape
    pub fn mid(&self) -> Point {
        self.bounds.mid()
    }

    /// Circle radius (half the bounds width)
    pub fn radius(&self) -> f64 {
        self.bounds.width / 2.0
    }

    /// Hit-test a point against the shape's true outline
    pub fn contains(&self, point: Point) -> bool {
        match self.kind {
            ShapeKind::Rectangle => self.bounds.contains(point),
            ShapeKind::Circle => {
                let center = self.mid();
                let dx = point.x - center.x;
                let dy = point.y - center.y;
                dx * dx + dy * dy <= self.radius() * self.radius()
            }
        }
    }

    /// Reject shapes with negative or non-finite dimensions
    pub fn validate(&self) -> Result<(), RoutingError> {
        let b = &self.bounds;
        if ![b.x, b.y, b.width, b.height].iter().all(|v| v.is_finite()) {
            return Err(RoutingError::invalid_shape("dimensions must be finite"));
        }
        if b.width < 0.0 || b.height < 0.0 {
            return Err(RoutingError::invalid_shape(format!(
                "negative size {}x{}",
                b.width, b.height
            )));
        }
        Ok(())
    }
}

/// Side of a shape, also the direction a connector leaves or enters it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    pub fn invert(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Top => write!(f, "t"),
            Direction::Right => write!(f, "r"),
            Direction::Bottom => write!(f, "b"),
            Direction::Left => write!(f, "l"),
        }
    }
}

/// Coarse position of one box relative to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Intersect,
}

impl Orientation {
    /// Combine the vertical and horizontal predicates into one orientation
    pub fn from_parts(vertical: Option<Direction>, horizontal: Option<Direction>) -> Self {
        match (vertical, horizontal) {
            (Some(Direction::Top), Some(Direction::Left)) => Orientation::TopLeft,
            (Some(Direction::Top), Some(Direction::Right)) => Orientation::TopRight,
            (Some(Direction::Bottom), Some(Direction::Left)) => Orientation::BottomLeft,
            (Some(Direction::Bottom), Some(Direction::Right)) => Orientation::BottomRight,
            (_, Some(Direction::Left)) => Orientation::Left,
            (_, Some(Direction::Right)) => Orientation::Right,
            (Some(Direction::Top), _) => Orientation::Top,
            (Some(Direction::Bottom), _) => Orientation::Bottom,
            _ => Orientation::Intersect,
        }
    }

    /// The opposite orientation; `Intersect` maps to itself
    pub fn invert(self) -> Orientation {
        match self {
            Orientation::Top => Orientation::Bottom,
            Orientation::Bottom => Orientation::Top,
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
            Orientation::TopLeft => Orientation::BottomRight,
            Orientation::BottomRight => Orientation::TopLeft,
            Orientation::TopRight => Orientation::BottomLeft,
            Orientation::BottomLeft => Orientation::TopRight,
            Orientation::Intersect => Orientation::Intersect,
        }
    }

    /// The top/bottom component, if any
    pub fn vertical(self) -> Option<Direction> {
        match self {
            Orientation::Top | Orientation::TopLeft | Orientation::TopRight => Some(Direction::Top),
            Orientation::Bottom | Orientation::BottomLeft | Orientation::BottomRight => {
                Some(Direction::Bottom)
            }
            _ => None,
        }
    }

    /// The left/right component, if any
    pub fn horizontal(self) -> Option<Direction> {
        match self {
            Orientation::Left | Orientation::TopLeft | Orientation::BottomLeft => {
                Some(Direction::Left)
            }
            Orientation::Right | Orientation::TopRight | Orientation::BottomRight => {
                Some(Direction::Right)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Top => "top",
            Orientation::Bottom => "bottom",
            Orientation::Left => "left",
            Orientation::Right => "right",
            Orientation::TopLeft => "top-left",
            Orientation::TopRight => "top-right",
            Orientation::BottomLeft => "bottom-left",
            Orientation::BottomRight => "bottom-right",
            Orientation::Intersect => "intersect",
        };
        write!(f, "{}", name)
    }
}

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The other axis
    pub fn flip(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Read this axis' coordinate of a point
    pub fn of(self, point: &Point) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }

    /// Copy of `point` with this axis' coordinate replaced
    pub fn set(self, point: Point, value: f64) -> Point {
        match self {
            Axis::X => Point { x: value, ..point },
            Axis::Y => Point { y: value, ..point },
        }
    }

    /// Copy of `point` moved by `delta` along this axis
    pub fn add(self, point: Point, delta: f64) -> Point {
        self.set(point, self.of(&point) + delta)
    }
}

/// Connection layout: which axis the path leaves and enters along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `h:h` - leave and enter horizontally
    HorizontalHorizontal,
    /// `v:v` - leave and enter vertically
    VerticalVertical,
    /// `h:v` - leave horizontally, enter vertically
    HorizontalVertical,
    /// `v:h` - leave vertically, enter horizontally
    VerticalHorizontal,
    /// Direct two-point connector
    Straight,
}

impl Layout {
    /// Heading pair for the axis-aligned layouts; `None` for `Straight`
    pub fn directions(self) -> Option<Directions> {
        let (start, end) = match self {
            Layout::HorizontalHorizontal => (Heading::Horizontal, Heading::Horizontal),
            Layout::VerticalVertical => (Heading::Vertical, Heading::Vertical),
            Layout::HorizontalVertical => (Heading::Horizontal, Heading::Vertical),
            Layout::VerticalHorizontal => (Heading::Vertical, Heading::Horizontal),
            Layout::Straight => return None,
        };
        Some(Directions::new(start, end))
    }
}

impl FromStr for Layout {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h:h" => Ok(Layout::HorizontalHorizontal),
            "v:v" => Ok(Layout::VerticalVertical),
            "h:v" => Ok(Layout::HorizontalVertical),
            "v:h" => Ok(Layout::VerticalHorizontal),
            "straight" => Ok(Layout::Straight),
            other => Err(RoutingError::unknown_layout(other)),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layout::HorizontalHorizontal => "h:h",
            Layout::VerticalVertical => "v:v",
            Layout::HorizontalVertical => "h:v",
            Layout::VerticalHorizontal => "v:h",
            Layout::Straight => "straight",
        };
        write!(f, "{}", name)
    }
}

/// How one end of a path is laid out: along an axis, or out of a specific side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Horizontal,
    Vertical,
    Top,
    Right,
    Bottom,
    Left,
}

impl Heading {
    /// Horizontal, right and left headings run along the x axis
    pub fn is_horizontal(self) -> bool {
        matches!(self, Heading::Horizontal | Heading::Right | Heading::Left)
    }

    /// Explicit headings name a side instead of an axis
    pub fn is_explicit(self) -> bool {
        self.as_direction().is_some()
    }

    pub fn as_direction(self) -> Option<Direction> {
        match self {
            Heading::Top => Some(Direction::Top),
            Heading::Right => Some(Direction::Right),
            Heading::Bottom => Some(Direction::Bottom),
            Heading::Left => Some(Direction::Left),
            Heading::Horizontal | Heading::Vertical => None,
        }
    }

    /// The axis heading perpendicular to this one
    pub fn turned(self) -> Heading {
        if self.is_horizontal() {
            Heading::Vertical
        } else {
            Heading::Horizontal
        }
    }
}

impl From<Direction> for Heading {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Top => Heading::Top,
            Direction::Right => Heading::Right,
            Direction::Bottom => Heading::Bottom,
            Direction::Left => Heading::Left,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heading::Horizontal => write!(f, "h"),
            Heading::Vertical => write!(f, "v"),
            Heading::Top => write!(f, "t"),
            Heading::Right => write!(f, "r"),
            Heading::Bottom => write!(f, "b"),
            Heading::Left => write!(f, "l"),
        }
    }
}

/// Start and end heading of a path, written `start:end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directions {
    pub start: Heading,
    pub end: Heading,
}

impl Directions {
    pub fn new(start: Heading, end: Heading) -> Self {
        Self { start, end }
    }

    /// Swap start and end
    pub fn invert(self) -> Directions {
        Directions::new(self.end, self.start)
    }

    pub fn is_explicit(self) -> bool {
        self.start.is_explicit() || self.end.is_explicit()
    }

    /// The axis layout these directions correspond to, if both ends are axis headings
    pub fn layout(self) -> Option<Layout> {
        match (self.start, self.end) {
            (Heading::Horizontal, Heading::Horizontal) => Some(Layout::HorizontalHorizontal),
            (Heading::Vertical, Heading::Vertical) => Some(Layout::VerticalVertical),
            (Heading::Horizontal, Heading::Vertical) => Some(Layout::HorizontalVertical),
            (Heading::Vertical, Heading::Horizontal) => Some(Layout::VerticalHorizontal),
            _ => None,
        }
    }
}

impl fmt::Display for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// A resolved connection end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Docking {
    /// The waypoint being docked
    pub point: Point,
    /// Where it sits on the shape boundary
    pub actual: Point,
    /// Position of `point` in the waypoint list
    pub index: usize,
}

/// Which end of a connection keeps its docking during a straight re-layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockingEnd {
    Source,
    Target,
}

/// Caller hints for routing and repairing connections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hints {
    /// Preferred layouts, most preferred first
    pub preferred_layouts: Vec<Layout>,
    /// The source end moved (repair from the start)
    pub connection_start: bool,
    /// The target end moved (repair from the end)
    pub connection_end: bool,
    /// Keep this end's docking when laying out a straight line
    pub preserve_docking: Option<DockingEnd>,
}

impl Hints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preferred layouts
    pub fn with_preferred_layouts(mut self, layouts: impl Into<Vec<Layout>>) -> Self {
        self.preferred_layouts = layouts.into();
        self
    }

    /// Mark the source end as moved
    pub fn with_connection_start(mut self) -> Self {
        self.connection_start = true;
        self
    }

    /// Mark the target end as moved
    pub fn with_connection_end(mut self) -> Self {
        self.connection_end = true;
        self
    }

    /// Keep one end's docking for straight layouts
    pub fn with_preserve_docking(mut self, end: DockingEnd) -> Self {
        self.preserve_docking = Some(end);
        self
    }

    /// First preferred non-straight layout, `h:h` if none is given
    pub fn preferred_layout(&self) -> Layout {
        self.preferred_layouts
            .iter()
            .copied()
            .find(|layout| *layout != Layout::Straight)
            .unwrap_or(Layout::HorizontalHorizontal)
    }

    pub fn prefers_straight(&self) -> bool {
        self.preferred_layouts.contains(&Layout::Straight)
    }
}

/// A routed polyline between two shapes
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub waypoints: Vec<Point>,
    pub source: Shape,
    pub target: Shape,
}

impl Connection {
    /// Create a connection; at least two waypoints are required
    pub fn new(waypoints: Vec<Point>, source: Shape, target: Shape) -> Result<Self, RoutingError> {
        if waypoints.len() < 2 {
            return Err(RoutingError::too_few_waypoints(waypoints.len()));
        }
        Ok(Self {
            waypoints,
            source,
            target,
        })
    }
}

/// Result of locating a reference point on a polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxIntersection {
    pub point: Point,
    /// The hit is an existing waypoint rather than a point on a segment
    pub bendpoint: bool,
    /// Waypoint index for bend-point hits; for segment hits, the index of
    /// the segment's end waypoint (where a new bend-point would be inserted)
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 20.0);
        assert_eq!(p.original, None);
    }

    #[test]
    fn test_original_is_sticky_and_flat() {
        let docked = Point::new(100.0, 10.0).with_original(Anchor::new(50.0, 10.0));
        assert_eq!(docked.original_or_self(), Anchor::new(50.0, 10.0));
        assert_eq!(Point::new(3.0, 4.0).original_or_self(), Anchor::new(3.0, 4.0));
    }

    #[test]
    fn test_rectangle_edges() {
        let r = Rectangle::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.mid(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_trbl_round_trip_through_rectangle() {
        let r = Rectangle::new(10.0, 20.0, 100.0, 50.0);
        let trbl = Trbl::from(&r);
        assert_eq!(trbl.top, 20.0);
        assert_eq!(trbl.right, 110.0);
        assert_eq!(Rectangle::from(trbl), r);
    }

    #[test]
    fn test_trbl_of_point_is_degenerate() {
        let trbl = Trbl::from(Point::new(5.0, 7.0));
        assert_eq!(trbl.left, trbl.right);
        assert_eq!(trbl.top, trbl.bottom);
    }

    #[test]
    fn test_circle_contains() {
        let c = Shape::circle(50.0, 50.0, 10.0);
        assert!(c.contains(Point::new(55.0, 55.0)));
        // inside the bounding square but outside the circle
        assert!(!c.contains(Point::new(41.0, 41.0)));
    }

    #[test]
    fn test_shape_validate() {
        assert!(Shape::rectangle(0.0, 0.0, 10.0, 10.0).validate().is_ok());
        assert!(Shape::rectangle(0.0, 0.0, -1.0, 10.0).validate().is_err());
        assert!(Shape::rectangle(0.0, f64::NAN, 1.0, 10.0).validate().is_err());
    }

    #[test]
    fn test_shape_kind_from_str() {
        assert_eq!("circle".parse::<ShapeKind>().unwrap(), ShapeKind::Circle);
        assert_eq!("rect".parse::<ShapeKind>().unwrap(), ShapeKind::Rectangle);
        assert!(matches!(
            "hexagon".parse::<ShapeKind>(),
            Err(RoutingError::UnknownShapeKind { .. })
        ));
    }

    #[test]
    fn test_layout_from_str_and_display() {
        for name in ["h:h", "v:v", "h:v", "v:h", "straight"] {
            let layout: Layout = name.parse().unwrap();
            assert_eq!(layout.to_string(), name);
        }
        assert!("x:y".parse::<Layout>().is_err());
    }

    #[test]
    fn test_orientation_invert() {
        assert_eq!(Orientation::TopLeft.invert(), Orientation::BottomRight);
        assert_eq!(Orientation::Right.invert(), Orientation::Left);
        assert_eq!(Orientation::Intersect.invert(), Orientation::Intersect);
    }

    #[test]
    fn test_orientation_display() {
        assert_eq!(Orientation::BottomLeft.to_string(), "bottom-left");
        assert_eq!(Orientation::Intersect.to_string(), "intersect");
    }

    #[test]
    fn test_directions_invert_and_display() {
        let d = Directions::new(Heading::Top, Heading::Horizontal);
        assert_eq!(d.to_string(), "t:h");
        assert_eq!(d.invert().to_string(), "h:t");
        assert!(d.is_explicit());
        assert!(!Layout::HorizontalVertical.directions().unwrap().is_explicit());
    }

    #[test]
    fn test_hints_preferred_layout_skips_straight() {
        let hints = Hints::new()
            .with_preferred_layouts(vec![Layout::Straight, Layout::VerticalVertical]);
        assert_eq!(hints.preferred_layout(), Layout::VerticalVertical);
        assert!(hints.prefers_straight());
        assert_eq!(Hints::default().preferred_layout(), Layout::HorizontalHorizontal);
    }

    #[test]
    fn test_connection_requires_two_waypoints() {
        let s = Shape::rectangle(0.0, 0.0, 10.0, 10.0);
        let err = Connection::new(vec![Point::new(0.0, 0.0)], s, s).unwrap_err();
        assert!(matches!(err, RoutingError::TooFewWaypoints { count: 1 }));
    }

    #[test]
    fn test_axis_helpers() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(Axis::X.of(&p), 1.0);
        assert_eq!(Axis::Y.add(p, 3.0), Point::new(1.0, 5.0));
        assert_eq!(Axis::X.flip(), Axis::Y);
    }
}
