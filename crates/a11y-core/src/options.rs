// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Widget construction options and their validated form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default accent color.
pub const DEFAULT_COLOR: &str = "#17384c";
/// Default lower bound for both counters.
pub const DEFAULT_MIN: i32 = -50;
/// Default upper bound for both counters.
pub const DEFAULT_MAX: i32 = 50;

/// Errors raised by the widget API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum A11yError {
    /// A configuration value is outside its allowed set. The only
    /// construction error.
    #[error("configuration error: {0}")]
    Config(String),
    /// A runtime call received an argument outside its allowed set.
    #[error("invalid argument: {0}")]
    Argument(String),
}

/// Screen edge the panel and open button are pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Left edge.
    #[default]
    Left,
    /// Right edge.
    Right,
}

impl Position {
    /// CSS property name for this edge.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(A11yError::Config(format!(
                "position {s:?} is not one of the values: left, right"
            ))),
        }
    }
}

/// Raw, partially populated options as supplied by the host page.
///
/// Every field is optional; [`WidgetOptions::validate`] fills in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetOptions {
    /// Accent color (any CSS color).
    pub color: Option<String>,
    /// Panel edge, `"left"` or `"right"`.
    pub position: Option<String>,
    /// Lower bound for content scaling.
    pub min_scale: Option<i32>,
    /// Upper bound for content scaling.
    pub max_scale: Option<i32>,
    /// Lower bound for font scaling.
    pub min_font_size: Option<i32>,
    /// Upper bound for font scaling.
    pub max_font_size: Option<i32>,
}

impl WidgetOptions {
    /// Apply defaults and validate.
    ///
    /// Empty strings count as absent. Fails only when `position` is present
    /// and not `left`/`right`.
    pub fn validate(self) -> Result<WidgetConfig, A11yError> {
        let position = match self.position.as_deref() {
            Some(raw) if !raw.is_empty() => raw.parse()?,
            _ => Position::default(),
        };
        Ok(WidgetConfig {
            color: self
                .color
                .filter(|color| !color.is_empty())
                .unwrap_or_else(|| DEFAULT_COLOR.to_owned()),
            position,
            scale: Bounds::new(
                self.min_scale.unwrap_or(DEFAULT_MIN),
                self.max_scale.unwrap_or(DEFAULT_MAX),
            ),
            font: Bounds::new(
                self.min_font_size.unwrap_or(DEFAULT_MIN),
                self.max_font_size.unwrap_or(DEFAULT_MAX),
            ),
        })
    }
}

/// Inclusive integer range for one counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: i32,
    max: i32,
}

impl Bounds {
    /// Build a range; inverted endpoints are swapped.
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Lower bound.
    pub const fn min(self) -> i32 {
        self.min
    }

    /// Upper bound.
    pub const fn max(self) -> i32 {
        self.max
    }

    /// Clamp `value` into the range.
    pub fn clamp(self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

/// Validated, immutable widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    color: String,
    position: Position,
    scale: Bounds,
    font: Bounds,
}

impl WidgetConfig {
    /// Accent color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Panel edge.
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Content scaling bounds.
    pub const fn scale_bounds(&self) -> Bounds {
        self.scale
    }

    /// Font scaling bounds.
    pub const fn font_bounds(&self) -> Bounds {
        self.font
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_owned(),
            position: Position::default(),
            scale: Bounds::new(DEFAULT_MIN, DEFAULT_MAX),
            font: Bounds::new(DEFAULT_MIN, DEFAULT_MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn empty_options_take_defaults() {
        let config = WidgetOptions::default().validate().unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.color(), "#17384c");
        assert_eq!(config.position(), Position::Left);
        assert_eq!(config.scale_bounds(), Bounds::new(-50, 50));
        assert_eq!(config.font_bounds(), Bounds::new(-50, 50));
    }

    #[test]
    fn options_deserialize_from_camel_case() {
        let options: WidgetOptions = serde_json::from_str(
            r##"{"color":"#ff0000","position":"right","minScale":-20,"maxFontSize":30}"##,
        )
        .unwrap();
        let config = options.validate().unwrap();
        assert_eq!(config.color(), "#ff0000");
        assert_eq!(config.position(), Position::Right);
        assert_eq!(config.scale_bounds(), Bounds::new(-20, 50));
        assert_eq!(config.font_bounds(), Bounds::new(-50, 30));
    }

    #[test]
    fn unknown_position_is_a_config_error() {
        let options = WidgetOptions {
            position: Some("center".into()),
            ..WidgetOptions::default()
        };
        assert!(matches!(options.validate(), Err(A11yError::Config(_))));
    }

    #[test]
    fn empty_strings_fall_back_to_defaults() {
        let options = WidgetOptions {
            color: Some(String::new()),
            position: Some(String::new()),
            ..WidgetOptions::default()
        };
        let config = options.validate().unwrap();
        assert_eq!(config.color(), DEFAULT_COLOR);
        assert_eq!(config.position(), Position::Left);
    }

    #[test]
    fn position_parsing_is_case_sensitive() {
        assert!("Left".parse::<Position>().is_err());
        assert_eq!("right".parse::<Position>(), Ok(Position::Right));
    }

    #[test]
    fn inverted_bounds_are_swapped() {
        let bounds = Bounds::new(40, -10);
        assert_eq!(bounds.min(), -10);
        assert_eq!(bounds.max(), 40);
        assert_eq!(bounds.clamp(100), 40);
    }
}
