// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bounded counter arithmetic and the value → visual transforms.
//!
//! Everything here is pure. Effects are applied by the widget through
//! [`DocumentPort`](crate::document_port::DocumentPort).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::options::{A11yError, Bounds};

/// Fixed increment for both counters.
pub const STEP: i32 = 10;

/// Requested direction for a counter adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Step up ("in").
    Increase,
    /// Step down ("out").
    Decrease,
}

impl FromStr for Direction {
    type Err = A11yError;

    /// Accepts `increase`/`in` and `decrease`/`out`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increase" | "in" => Ok(Self::Increase),
            "decrease" | "out" => Ok(Self::Decrease),
            _ => Err(A11yError::Argument(format!(
                "direction {s:?} is not one of the values: increase, decrease"
            ))),
        }
    }
}

/// The two independent counters driven by the plus/minus controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    /// Whole-document zoom.
    Scaling,
    /// Body font size.
    FontScaling,
}

/// Move `current` one `step` in `direction`, clamped to `bounds`.
///
/// At the bound in the requested direction the value is returned unchanged.
pub fn adjust(current: i32, direction: Direction, bounds: Bounds, step: i32) -> i32 {
    match direction {
        Direction::Increase => current.saturating_add(step).min(bounds.max()),
        Direction::Decrease => current.saturating_sub(step).max(bounds.min()),
    }
}

/// Round `value` to the nearest multiple of `step`; halves round up.
pub fn snap(value: i32, step: i32) -> i32 {
    let rem = value.rem_euclid(step);
    let floor = value.saturating_sub(rem);
    if rem * 2 >= step {
        floor.saturating_add(step)
    } else {
        floor
    }
}

/// Document zoom factor for a content scaling value: `1 + v * 0.0016`.
pub fn zoom(value: i32) -> f64 {
    (10_000.0 + 16.0 * f64::from(value)) / 10_000.0
}

/// Body font size percentage for a font scaling value: `100 + v`.
pub fn font_size_percent(value: i32) -> i32 {
    100_i32.saturating_add(value)
}

/// Display label for either counter.
pub fn label(value: i32) -> String {
    if value == 0 {
        "Default".to_owned()
    } else {
        format!("{value:+}%")
    }
}
