use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// Names of the parameters the zebra tool exposes.
///
/// Widgets in the config panel are keyed by the same names, so a widget can
/// never exist without a backing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamName {
    Offset,
    Distance,
    MouseOffset,
    SpeedScale,
}

impl ParamName {
    pub const ALL: [ParamName; 4] = [
        ParamName::Offset,
        ParamName::Distance,
        ParamName::MouseOffset,
        ParamName::SpeedScale,
    ];

    /// The name as it appears in presets
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Offset => "offset",
            Self::Distance => "distance",
            Self::MouseOffset => "mouseOffset",
            Self::SpeedScale => "speedScale",
        }
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("unknown parameter: {s}"))
    }
}

/// A single parameter value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Number(f32),
    Bool(bool),
}

impl ParamValue {
    pub fn as_number(self) -> Option<f32> {
        match self {
            Self::Number(value) => Some(value),
            Self::Bool(_) => None,
        }
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(value),
            Self::Number(_) => None,
        }
    }
}

/// Current configuration of the zebra tool.
///
/// Read on every drag sample, written only through the config panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolState {
    /// Fixed step length used when `mouse_offset` is off
    pub offset: f32,
    /// Minimum pointer travel between two drag samples
    pub distance: f32,
    /// Derive the step length from the drag distance instead of `offset`
    pub mouse_offset: bool,
    /// Multiplier for speed-responsive variants; the zebra geometry ignores it
    pub speed_scale: f32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            offset: 10.0,
            distance: 10.0,
            mouse_offset: false,
            speed_scale: 1.5,
        }
    }
}

impl ToolState {
    pub fn get(&self, name: ParamName) -> ParamValue {
        match name {
            ParamName::Offset => ParamValue::Number(self.offset),
            ParamName::Distance => ParamValue::Number(self.distance),
            ParamName::MouseOffset => ParamValue::Bool(self.mouse_offset),
            ParamName::SpeedScale => ParamValue::Number(self.speed_scale),
        }
    }

    /// Write a single field. Range checks belong to the widget, not here.
    pub fn set(&mut self, name: ParamName, value: ParamValue) -> Result<(), StateError> {
        match (name, value) {
            (ParamName::Offset, ParamValue::Number(v)) => self.offset = v,
            (ParamName::Distance, ParamValue::Number(v)) => self.distance = v,
            (ParamName::SpeedScale, ParamValue::Number(v)) => self.speed_scale = v,
            (ParamName::MouseOffset, ParamValue::Bool(v)) => self.mouse_offset = v,
            (ParamName::MouseOffset, ParamValue::Number(_)) => {
                return Err(StateError::TypeMismatch {
                    name,
                    expected: "boolean",
                });
            }
            (_, ParamValue::Bool(_)) => {
                return Err(StateError::TypeMismatch {
                    name,
                    expected: "numeric",
                });
            }
        }
        Ok(())
    }

    /// Parse a preset. Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
