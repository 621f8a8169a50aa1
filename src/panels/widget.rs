use std::ops::RangeInclusive;

use crate::error::PanelError;
use crate::state::{ParamName, ParamValue};

/// The kind of input control a widget is shown as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Slider,
    Number,
    Checkbox,
}

/// What happens after a widget's value has been stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeEffect {
    /// Only the bound field changes
    #[default]
    Store,
    /// The new value also becomes the drag sampler's minimum distance
    ForwardMinDistance,
    /// `target` is disabled while this checkbox is checked
    DisableWhenChecked { target: ParamName },
}

impl ChangeEffect {
    /// The widget whose enabled flag this effect drives, if any
    pub fn dependency(&self) -> Option<ParamName> {
        match self {
            Self::DisableWhenChecked { target } => Some(*target),
            Self::Store | Self::ForwardMinDistance => None,
        }
    }
}

/// Declarative description of one widget
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSpec {
    pub label: String,
    pub kind: WidgetKind,
    pub range: Option<RangeInclusive<f32>>,
    pub effect: ChangeEffect,
}

impl WidgetSpec {
    fn new(label: impl Into<String>, kind: WidgetKind) -> Self {
        Self {
            label: label.into(),
            kind,
            range: None,
            effect: ChangeEffect::Store,
        }
    }

    pub fn number(label: impl Into<String>) -> Self {
        Self::new(label, WidgetKind::Number)
    }

    pub fn slider(label: impl Into<String>) -> Self {
        Self::new(label, WidgetKind::Slider)
    }

    pub fn checkbox(label: impl Into<String>) -> Self {
        Self::new(label, WidgetKind::Checkbox)
    }

    pub fn range(mut self, min: f32, max: f32) -> Self {
        self.range = Some(min..=max);
        self
    }

    pub fn on_change(mut self, effect: ChangeEffect) -> Self {
        self.effect = effect;
        self
    }

    /// Check the value kind and clamp numbers into the declared range
    pub fn validate(&self, name: ParamName, value: ParamValue) -> Result<ParamValue, PanelError> {
        match (self.kind, value) {
            (WidgetKind::Checkbox, ParamValue::Bool(_)) => Ok(value),
            (WidgetKind::Checkbox, ParamValue::Number(_)) => Err(PanelError::TypeMismatch {
                name,
                expected: "boolean",
            }),
            (_, ParamValue::Bool(_)) => Err(PanelError::TypeMismatch {
                name,
                expected: "numeric",
            }),
            (_, ParamValue::Number(v)) if !v.is_finite() => Err(PanelError::NonFinite(name)),
            (_, ParamValue::Number(v)) => Ok(ParamValue::Number(self.clamp(v))),
        }
    }

    fn clamp(&self, value: f32) -> f32 {
        match &self.range {
            Some(range) => value.clamp(*range.start(), *range.end()),
            None => value,
        }
    }
}

/// A registered widget: its spec plus the live enabled flag
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    spec: WidgetSpec,
    enabled: bool,
}

impl Widget {
    pub(crate) fn new(spec: WidgetSpec) -> Self {
        Self { spec, enabled: true }
    }

    pub fn spec(&self) -> &WidgetSpec {
        &self.spec
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
