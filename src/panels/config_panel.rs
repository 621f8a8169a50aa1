use crate::error::PanelError;
use crate::state::{ParamName, ParamValue, ToolState};

use super::widget::{ChangeEffect, Widget, WidgetKind, WidgetSpec};

/// What an accepted edit changed, so the caller can forward it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditOutcome {
    pub name: ParamName,
    /// The value actually stored, after clamping
    pub value: ParamValue,
    /// New minimum distance for the drag sampler
    pub min_distance: Option<f32>,
    /// Widget whose enabled flag was set, and the flag's new value
    pub toggled: Option<(ParamName, bool)>,
}

/// Collects widget specs and checks them before a panel is handed out
#[derive(Debug, Default)]
pub struct ConfigPanelBuilder {
    title: String,
    widgets: Vec<(ParamName, WidgetSpec)>,
}

impl ConfigPanelBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            widgets: Vec::new(),
        }
    }

    pub fn widget(mut self, name: ParamName, spec: WidgetSpec) -> Self {
        self.widgets.push((name, spec));
        self
    }

    /// Validate the registrations and build the panel.
    ///
    /// Fails on duplicate names, on dependencies that point at unregistered
    /// widgets, on `DisableWhenChecked` attached to a non-checkbox and on
    /// any enable/disable cycle.
    pub fn build(self) -> Result<ConfigPanel, PanelError> {
        let mut widgets: Vec<(ParamName, Widget)> = Vec::with_capacity(self.widgets.len());
        for (name, spec) in self.widgets {
            if widgets.iter().any(|(existing, _)| *existing == name) {
                return Err(PanelError::DuplicateWidget(name));
            }
            widgets.push((name, Widget::new(spec)));
        }

        let panel = ConfigPanel {
            title: self.title,
            widgets,
        };

        for (name, widget) in &panel.widgets {
            let spec = widget.spec();
            if let Some(target) = spec.effect.dependency() {
                if spec.kind != WidgetKind::Checkbox {
                    return Err(PanelError::TypeMismatch {
                        name: *name,
                        expected: "boolean",
                    });
                }
                if panel.index_of(target).is_none() {
                    return Err(PanelError::UnknownWidget(target));
                }
            }
        }
        panel.check_acyclic()?;

        Ok(panel)
    }
}

/// Named widgets bound to the fields of a [`ToolState`]
#[derive(Debug, Clone)]
pub struct ConfigPanel {
    title: String,
    widgets: Vec<(ParamName, Widget)>,
}

impl ConfigPanel {
    pub fn builder(title: impl Into<String>) -> ConfigPanelBuilder {
        ConfigPanelBuilder::new(title)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Widgets in registration order
    pub fn widgets(&self) -> impl Iterator<Item = (ParamName, &Widget)> {
        self.widgets.iter().map(|(name, widget)| (*name, widget))
    }

    pub fn widget(&self, name: ParamName) -> Option<&Widget> {
        self.index_of(name).map(|index| &self.widgets[index].1)
    }

    pub fn is_enabled(&self, name: ParamName) -> Option<bool> {
        self.widget(name).map(Widget::is_enabled)
    }

    /// Enable or disable a widget. Never touches the bound value.
    pub fn set_enabled(&mut self, name: ParamName, enabled: bool) -> Result<(), PanelError> {
        let index = self.index_of(name).ok_or(PanelError::UnknownWidget(name))?;
        let widget = &mut self.widgets[index].1;
        if widget.is_enabled() != enabled {
            log::debug!("{} widget {}", if enabled { "Enabling" } else { "Disabling" }, name);
            widget.set_enabled(enabled);
        }
        Ok(())
    }

    /// Bring every dependent enabled flag in line with `state`
    pub fn sync_enabled(&mut self, state: &ToolState) {
        let toggles: Vec<(ParamName, bool)> = self
            .widgets
            .iter()
            .filter_map(|(name, widget)| {
                let target = widget.spec().effect.dependency()?;
                let checked = state.get(*name).as_bool()?;
                Some((target, !checked))
            })
            .collect();

        for (target, enabled) in toggles {
            // Targets were checked in `build`
            if let Some(index) = self.index_of(target) {
                self.widgets[index].1.set_enabled(enabled);
            }
        }
    }

    /// `state` with every bound field passed through its widget's range,
    /// as if each value had been typed in. Values a widget rejects fall back
    /// to the default.
    pub fn clamped_state(&self, state: &ToolState) -> ToolState {
        let defaults = ToolState::default();
        let mut clamped = state.clone();
        for (name, widget) in self.widgets() {
            let value = widget
                .spec()
                .validate(name, state.get(name))
                .unwrap_or_else(|_| defaults.get(name));
            if value != state.get(name) {
                log::warn!("Preset value {:?} for {} stored as {:?}", state.get(name), name, value);
            }
            // Both candidates have the field's own kind, so this cannot fail
            clamped.set(name, value).ok();
        }
        clamped
    }

    /// Apply a user edit to `state`.
    ///
    /// The value is validated and clamped by the widget, then the new state
    /// and any enabled flag change are computed before either is written.
    /// On error nothing is modified.
    pub fn edit(
        &mut self,
        name: ParamName,
        value: ParamValue,
        state: &mut ToolState,
    ) -> Result<EditOutcome, PanelError> {
        let index = self.index_of(name).ok_or(PanelError::UnknownWidget(name))?;
        let widget = &self.widgets[index].1;
        if !widget.is_enabled() {
            return Err(PanelError::WidgetDisabled(name));
        }

        let effect = widget.spec().effect;
        let value = widget.spec().validate(name, value)?;
        let mut staged = state.clone();
        staged.set(name, value)?;

        let mut outcome = EditOutcome {
            name,
            value,
            min_distance: None,
            toggled: None,
        };
        match effect {
            ChangeEffect::Store => {}
            ChangeEffect::ForwardMinDistance => outcome.min_distance = value.as_number(),
            ChangeEffect::DisableWhenChecked { target } => {
                let checked = value.as_bool().ok_or(PanelError::TypeMismatch {
                    name,
                    expected: "boolean",
                })?;
                let target_index = self.index_of(target).ok_or(PanelError::UnknownWidget(target))?;
                outcome.toggled = Some((target, !checked));
                // Commit
                *state = staged;
                self.widgets[target_index].1.set_enabled(!checked);
                log::info!("{} set to {:?}, {} enabled: {}", name, value, target, !checked);
                return Ok(outcome);
            }
        }

        *state = staged;
        log::info!("{} set to {:?}", name, value);
        Ok(outcome)
    }

    fn index_of(&self, name: ParamName) -> Option<usize> {
        self.widgets.iter().position(|(existing, _)| *existing == name)
    }

    fn dependency_of(&self, name: ParamName) -> Option<ParamName> {
        self.widget(name).and_then(|widget| widget.spec().effect.dependency())
    }

    // Each widget drives at most one other, so following the chain from every
    // start node is enough to find a loop.
    fn check_acyclic(&self) -> Result<(), PanelError> {
        for (start, _) in &self.widgets {
            let mut chain = vec![*start];
            let mut current = *start;
            while let Some(next) = self.dependency_of(current) {
                if let Some(pos) = chain.iter().position(|seen| *seen == next) {
                    let mut cycle = chain.split_off(pos);
                    cycle.push(next);
                    return Err(PanelError::DependencyCycle(cycle));
                }
                chain.push(next);
                current = next;
            }
        }
        Ok(())
    }
}

/// The panel of the zebra tool, titled "Zebra", with enabled flags matching `state`
pub fn zebra_panel(state: &ToolState) -> Result<ConfigPanel, PanelError> {
    let mut panel = ConfigPanel::builder("Zebra")
        .widget(
            ParamName::Distance,
            WidgetSpec::number("Spacing")
                .range(0.0, f32::MAX)
                .on_change(ChangeEffect::ForwardMinDistance),
        )
        .widget(ParamName::Offset, WidgetSpec::number("Size").range(0.0, 500.0))
        .widget(
            ParamName::MouseOffset,
            WidgetSpec::checkbox("Dynamic size").on_change(ChangeEffect::DisableWhenChecked {
                target: ParamName::Offset,
            }),
        )
        .widget(ParamName::SpeedScale, WidgetSpec::slider("Speed scale").range(0.0, 10.0))
        .build()?;
    panel.sync_enabled(state);
    Ok(panel)
}
