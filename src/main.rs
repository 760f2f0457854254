//! Ortho Connect CLI
//!
//! Usage:
//!   ortho-connect [OPTIONS] [FILE]
//!
//! Options:
//!   -d, --debug     Print routing decisions to stderr
//!   -e, --example   Print an annotated example scene
//!   -h, --help      Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use ortho_connect::{format_routes, Scene};

#[derive(Parser)]
#[command(name = "ortho-connect")]
#[command(about = "Orthogonal connector routing for diagram scenes")]
struct Cli {
    /// Scene file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Print routing decisions to stderr
    #[arg(short, long)]
    debug: bool,

    /// Print an annotated example scene
    #[arg(short, long)]
    example: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.example {
        print!("{}", EXAMPLE_SCENE);
        return;
    }

    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let filename = cli
        .input
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let scene = match Scene::from_str(&source) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };

    if cli.debug {
        eprintln!(
            "scene {}: {} shapes, {} connections",
            scene.name.as_deref().unwrap_or("(unnamed)"),
            scene.shapes.len(),
            scene.connections.len()
        );
        for conn in &scene.connections {
            let layouts: Vec<String> = conn.hints.preferred_layouts.iter().map(|l| l.to_string()).collect();
            eprintln!(
                "  {} -> {} preferred [{}] waypoints {}",
                conn.from,
                conn.to,
                layouts.join(", "),
                conn.waypoints.len()
            );
        }
    }

    match scene.route() {
        Ok(routes) => print!("{}", format_routes(&routes)),
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Ortho Connect - orthogonal connector routing

USAGE:
    ortho-connect [OPTIONS] [FILE]
    cat scene.toml | ortho-connect

OPTIONS:
    -d, --debug      Print routing decisions to stderr
    -e, --example    Print an annotated example scene
    -h, --help       Print help

Each output line lists the waypoints of one connection:
    a -> b: (100, 25) (200, 25) (200, 125) (300, 125)

Run --example for the scene format."#
    );
}

const EXAMPLE_SCENE: &str = r#"# Scene metadata (optional)
[metadata]
name = "example"

# Routing thresholds (all optional)
[routing]
simplify_accuracy = 5.0        # collinear tolerance when removing bend-points
intersection_threshold = 10.0  # hit radius for segment lookups
straight_threshold = 20.0      # orientation padding for h:h and v:v
turn_threshold = -10.0         # orientation padding for h:v and v:h

# Shapes: x/y is the top-left corner of the bounds
[[shapes]]
id = "start"
x = 0
y = 0
width = 100
height = 50

# Circles are inscribed in their bounds; height defaults to width
[[shapes]]
id = "decision"
kind = "circle"
x = 300
y = 150
width = 60

[[shapes]]
id = "end"
x = 0
y = 300
width = 100
height = 50

# Route from scratch, preferring to leave vertically
[[connections]]
from = "start"
to = "decision"
layouts = ["v:h"]

# Repair existing waypoints after the target moved
[[connections]]
from = "decision"
to = "end"
waypoints = [[330, 210], [330, 325], [100, 325]]
moved = "target"
"#;
