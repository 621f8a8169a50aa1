use thiserror::Error;

use crate::state::ParamName;

/// Errors raised when writing a value into the tool state
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    /// A number was written into a boolean field or the other way round
    #[error("{name} expects a {expected} value")]
    TypeMismatch {
        name: ParamName,
        expected: &'static str,
    },
}

/// Errors raised while building the configuration panel or applying an edit.
///
/// An edit that fails with any of these leaves the tool state and every
/// widget's enabled flag exactly as they were.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PanelError {
    /// No widget is registered under this name
    #[error("no widget registered for {0}")]
    UnknownWidget(ParamName),
    /// A widget with this name was already registered
    #[error("widget {0} registered twice")]
    DuplicateWidget(ParamName),
    /// The widget is disabled and does not accept input
    #[error("widget {0} is disabled")]
    WidgetDisabled(ParamName),
    /// The value kind does not match the widget kind
    #[error("widget {name} expects a {expected} value")]
    TypeMismatch {
        name: ParamName,
        expected: &'static str,
    },
    /// NaN or infinite numeric input
    #[error("widget {0} received a non-finite value")]
    NonFinite(ParamName),
    /// Enable/disable dependencies loop back on themselves
    #[error("enable/disable dependency cycle: {}", format_chain(.0))]
    DependencyCycle(Vec<ParamName>),
}

impl From<StateError> for PanelError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::TypeMismatch { name, expected } => Self::TypeMismatch { name, expected },
        }
    }
}

fn format_chain(chain: &[ParamName]) -> String {
    chain
        .iter()
        .map(|name| name.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}
