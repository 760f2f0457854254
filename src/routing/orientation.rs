//! Relative orientation of boxes and points

use super::types::{Direction, Orientation, Trbl};

/// Gap demanded before two boxes count as separated, per axis
///
/// Negative padding lets boxes overlap by that much and still count as separated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub x: f64,
    pub y: f64,
}

impl From<f64> for Padding {
    fn from(value: f64) -> Self {
        Padding { x: value, y: value }
    }
}

impl From<(f64, f64)> for Padding {
    fn from((x, y): (f64, f64)) -> Self {
        Padding { x, y }
    }
}

/// Where `subject` lies relative to `reference`
///
/// `top` means the subject is above the reference by at least `padding.y`.
/// Overlapping boxes (after padding) are `Intersect`.
pub fn get_orientation(
    subject: impl Into<Trbl>,
    reference: impl Into<Trbl>,
    padding: impl Into<Padding>,
) -> Orientation {
    let s = subject.into();
    let r = reference.into();
    let pad = padding.into();

    let top = s.bottom + pad.y <= r.top;
    let right = s.left - pad.x >= r.right;
    let bottom = s.top - pad.y >= r.bottom;
    let left = s.right + pad.x <= r.left;

    let vertical = if top {
        Some(Direction::Top)
    } else if bottom {
        Some(Direction::Bottom)
    } else {
        None
    };
    let horizontal = if left {
        Some(Direction::Left)
    } else if right {
        Some(Direction::Right)
    } else {
        None
    };

    Orientation::from_parts(vertical, horizontal)
}
