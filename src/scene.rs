//! Scene files: shapes and connections described in TOML
//!
//! A scene lists shapes by id and the connections to route between them.
//! Connections may carry existing waypoints, in which case they are repaired
//! instead of routed from scratch.
//!
//! ```toml
//! [routing]
//! simplify_accuracy = 5.0
//!
//! [[shapes]]
//! id = "a"
//! x = 0
//! y = 0
//! width = 100
//! height = 50
//!
//! [[shapes]]
//! id = "b"
//! kind = "circle"
//! x = 0
//! y = 200
//! width = 60
//!
//! [[connections]]
//! from = "a"
//! to = "b"
//! layouts = ["v:v"]
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;
use std::path::Path;

use serde::Deserialize;
use toml::Spanned;
use tracing::debug;

use crate::error::{SceneError, Span};
use crate::routing::{
    crop, repair_connection_with_config, route_with_config, DockingEnd, Hints, Layout, Point, Rectangle,
    RoutingConfig, RoutingError, Shape, ShapeKind,
};

/// A parsed scene
#[derive(Debug, Clone)]
pub struct Scene {
    /// Optional name for the scene
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Routing thresholds from the `[routing]` table
    pub routing: RoutingConfig,
    pub shapes: Vec<SceneShape>,
    pub connections: Vec<SceneConnection>,
}

/// A shape with its scene id
#[derive(Debug, Clone, PartialEq)]
pub struct SceneShape {
    pub id: String,
    pub shape: Shape,
}

/// A connection to route between two scene shapes
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConnection {
    pub from: String,
    pub to: String,
    pub hints: Hints,
    /// Fixed start point, defaults to the source center
    pub start: Option<Point>,
    /// Fixed end point, defaults to the target center
    pub end: Option<Point>,
    /// Existing waypoints to repair, empty to route from scratch
    pub waypoints: Vec<Point>,
    from_span: Span,
    to_span: Span,
}

/// Routing result for one scene connection
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedConnection {
    pub from: String,
    pub to: String,
    pub waypoints: Vec<Point>,
}

/// TOML structure for deserializing scenes
#[derive(Deserialize)]
struct TomlScene {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    routing: RoutingConfig,
    #[serde(default)]
    shapes: Vec<TomlShape>,
    #[serde(default)]
    connections: Vec<TomlConnection>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlShape {
    id: Spanned<String>,
    kind: Option<Spanned<String>>,
    x: f64,
    y: f64,
    width: f64,
    /// Circles may omit the height
    height: Option<f64>,
}

#[derive(Deserialize)]
struct TomlConnection {
    from: Spanned<String>,
    to: Spanned<String>,
    #[serde(default)]
    layouts: Vec<Spanned<String>>,
    waypoints: Option<Spanned<Vec<[f64; 2]>>>,
    start: Option<[f64; 2]>,
    end: Option<[f64; 2]>,
    /// Which end moved since the waypoints were computed: source, target or both
    moved: Option<Spanned<String>>,
    /// Which end keeps its docking for straight layouts
    preserve: Option<Spanned<String>>,
}

impl Scene {
    /// Load scene from TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load scene from TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        let parsed: TomlScene = toml::from_str(content)?;

        let mut seen = HashSet::new();
        let mut shapes = Vec::with_capacity(parsed.shapes.len());
        for shape in parsed.shapes {
            let id_span = shape.id.span();
            let converted = convert_shape(&shape, id_span.clone())?;
            let id = shape.id.into_inner();
            if !seen.insert(id.clone()) {
                return Err(SceneError::DuplicateShape {
                    id,
                    span: Some(id_span),
                });
            }
            shapes.push(SceneShape { id, shape: converted });
        }

        let connections = parsed
            .connections
            .into_iter()
            .map(convert_connection)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Scene {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            routing: parsed.routing,
            shapes,
            connections,
        })
    }

    /// Look up a shape by id
    pub fn shape(&self, id: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id).map(|s| &s.shape)
    }

    /// Route every connection in the scene
    ///
    /// Connections with existing waypoints are repaired, the rest are routed
    /// from scratch.
    pub fn route(&self) -> Result<Vec<RoutedConnection>, SceneError> {
        let shapes: HashMap<&str, &Shape> = self.shapes.iter().map(|s| (s.id.as_str(), &s.shape)).collect();

        self.connections
            .iter()
            .map(|conn| -> Result<RoutedConnection, SceneError> {
                let source = lookup(&shapes, &conn.from, &conn.from_span)?;
                let target = lookup(&shapes, &conn.to, &conn.to_span)?;

                let waypoints = if conn.waypoints.is_empty() {
                    route_with_config(source, target, conn.start, conn.end, &conn.hints, &self.routing)?
                } else {
                    let repaired = repair_connection_with_config(
                        source,
                        target,
                        conn.start,
                        conn.end,
                        &conn.waypoints,
                        &conn.hints,
                        &self.routing,
                    )?;
                    crop(&repaired, source, Some(target))?
                };

                debug!(from = %conn.from, to = %conn.to, points = waypoints.len(), "routed connection");

                Ok(RoutedConnection {
                    from: conn.from.clone(),
                    to: conn.to.clone(),
                    waypoints,
                })
            })
            .collect()
    }
}

fn convert_shape(shape: &TomlShape, id_span: Span) -> Result<Shape, SceneError> {
    let kind = match &shape.kind {
        Some(kind) => kind
            .get_ref()
            .parse::<ShapeKind>()
            .map_err(|e| SceneError::invalid(Some(kind.span()), e))?,
        None => ShapeKind::Rectangle,
    };

    let height = match (kind, shape.height) {
        (_, Some(height)) => height,
        (ShapeKind::Circle, None) => shape.width,
        (ShapeKind::Rectangle, None) => {
            return Err(SceneError::invalid(
                Some(id_span),
                RoutingError::invalid_shape("rectangle needs a height"),
            ))
        }
    };

    let shape = Shape::new(Rectangle::new(shape.x, shape.y, shape.width, height), kind);
    shape
        .validate()
        .map_err(|e| SceneError::invalid(Some(id_span), e))?;
    Ok(shape)
}

fn convert_connection(conn: TomlConnection) -> Result<SceneConnection, SceneError> {
    let preferred_layouts = conn
        .layouts
        .iter()
        .map(|layout| {
            layout
                .get_ref()
                .parse::<Layout>()
                .map_err(|e| SceneError::invalid(Some(layout.span()), e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut hints = Hints::new().with_preferred_layouts(preferred_layouts);

    if let Some(moved) = &conn.moved {
        match moved.get_ref().as_str() {
            "source" => hints = hints.with_connection_start(),
            "target" => hints = hints.with_connection_end(),
            "both" => hints = hints.with_connection_start().with_connection_end(),
            other => {
                return Err(SceneError::Parse {
                    span: Some(moved.span()),
                    message: format!("unknown end '{}', expected source, target or both", other),
                })
            }
        }
    }

    if let Some(preserve) = &conn.preserve {
        let end = match preserve.get_ref().as_str() {
            "source" => DockingEnd::Source,
            "target" => DockingEnd::Target,
            other => {
                return Err(SceneError::Parse {
                    span: Some(preserve.span()),
                    message: format!("unknown end '{}', expected source or target", other),
                })
            }
        };
        hints = hints.with_preserve_docking(end);
    }

    let mut waypoints = Vec::new();
    if let Some(points) = conn.waypoints {
        let span = points.span();
        waypoints = points.into_inner().into_iter().map(|[x, y]| Point::new(x, y)).collect();
        if waypoints.len() < 2 {
            return Err(SceneError::invalid(
                Some(span),
                RoutingError::too_few_waypoints(waypoints.len()),
            ));
        }
    }

    Ok(SceneConnection {
        from_span: conn.from.span(),
        to_span: conn.to.span(),
        from: conn.from.into_inner(),
        to: conn.to.into_inner(),
        hints,
        start: conn.start.map(|[x, y]| Point::new(x, y)),
        end: conn.end.map(|[x, y]| Point::new(x, y)),
        waypoints,
    })
}

fn lookup<'a>(shapes: &HashMap<&str, &'a Shape>, id: &str, span: &Span) -> Result<&'a Shape, SceneError> {
    shapes.get(id).copied().ok_or_else(|| {
        let ids: Vec<&str> = shapes.keys().copied().collect();
        SceneError::undefined(id, Some(span.clone()), find_similar(&ids, id, 2))
    })
}

/// Format routed connections one per line: `from -> to: (x, y) (x, y) ...`
pub fn format_routes(routes: &[RoutedConnection]) -> String {
    let mut out = String::new();
    for route in routes {
        let _ = write!(out, "{} -> {}:", route.from, route.to);
        for point in &route.waypoints {
            let _ = write!(out, " ({}, {})", point.x, point.y);
        }
        out.push('\n');
    }
    out
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    let mut previous: Vec<usize> = (0..=n).collect();
    for (i, ca) in a_chars.iter().enumerate() {
        let mut current = vec![i + 1; n + 1];
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        previous = current;
    }
    previous[n]
}

/// Shape ids within `max_distance` edits of `target`, closest first
fn find_similar(ids: &[&str], target: &str, max_distance: usize) -> Vec<String> {
    let mut candidates: Vec<(&str, usize)> = ids
        .iter()
        .map(|id| (*id, levenshtein_distance(id, target)))
        .filter(|(_, d)| *d > 0 && *d <= max_distance)
        .collect();

    candidates.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(b.0)));
    candidates
        .into_iter()
        .map(|(id, _)| id.to_string())
        .take(3)
        .collect()
}
