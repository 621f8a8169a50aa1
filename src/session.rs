//! The zebra tool's session: everything that lives from tool activation to
//! deactivation.
//!
//! A [`ZebraSession`] owns the [`ToolState`], the [`ConfigPanel`] bound to it,
//! the tool itself and the drag sampler. Panel edits and pointer events both
//! go through the session, one at a time, so an edit is always fully applied
//! before the next drag sample reads the state.
//!
//! # Example
//!
//! ```rust
//! use egui::Pos2;
//! use zebra_paint::{Document, ZebraSession};
//!
//! let mut session = ZebraSession::activate().unwrap();
//! let mut document = Document::new();
//!
//! session.pointer_down(Pos2::new(0.0, 0.0));
//! session.pointer_move(Pos2::new(10.0, 0.0), &mut document);
//! session.pointer_up();
//!
//! assert_eq!(document.paths().len(), 1);
//! let state = session.deactivate();
//! assert_eq!(state.offset, 10.0);
//! ```
use egui::Pos2;

use crate::document::PathSink;
use crate::error::PanelError;
use crate::input::{DragEvent, DragSampler};
use crate::panels::{ConfigPanel, EditOutcome, zebra_panel};
use crate::state::{ParamName, ParamValue, ToolState};
use crate::tools::{Tool, ZebraTool};

#[derive(Debug)]
pub struct ZebraSession {
    state: ToolState,
    panel: ConfigPanel,
    tool: ZebraTool,
    sampler: DragSampler,
}

impl ZebraSession {
    /// Activate the tool with the default parameters
    pub fn activate() -> Result<Self, PanelError> {
        Self::with_state(ToolState::default())
    }

    /// Activate the tool with a preset. Preset values get the same range
    /// clamping as panel edits.
    pub fn with_state(preset: ToolState) -> Result<Self, PanelError> {
        let mut panel = zebra_panel(&preset)?;
        let state = panel.clamped_state(&preset);
        panel.sync_enabled(&state);
        let sampler = DragSampler::new(state.distance);
        let mut tool = ZebraTool::new();
        tool.activate();

        log::info!("Activated {} tool with {:?}", tool.name(), state);
        Ok(Self {
            state,
            panel,
            tool,
            sampler,
        })
    }

    pub fn state(&self) -> &ToolState {
        &self.state
    }

    pub fn panel(&self) -> &ConfigPanel {
        &self.panel
    }

    pub fn tool(&self) -> &ZebraTool {
        &self.tool
    }

    pub fn sampler(&self) -> &DragSampler {
        &self.sampler
    }

    /// Apply a widget edit and forward its side effects
    pub fn edit(&mut self, name: ParamName, value: ParamValue) -> Result<EditOutcome, PanelError> {
        let outcome = self
            .panel
            .edit(name, value, &mut self.state)
            .inspect_err(|err| log::warn!("Rejected edit of {}: {}", name, err))?;

        if let Some(min_distance) = outcome.min_distance {
            self.sampler.set_min_distance(min_distance);
        }
        Ok(outcome)
    }

    pub fn set_widget_enabled(&mut self, name: ParamName, enabled: bool) -> Result<(), PanelError> {
        self.panel.set_enabled(name, enabled)
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        self.tool.on_pointer_down(pos);
        self.sampler.begin(pos);
    }

    /// Feed a raw pointer position; returns how many stripes were emitted
    pub fn pointer_move(&mut self, pos: Pos2, sink: &mut dyn PathSink) -> usize {
        let mut emitted = 0;
        for event in self.sampler.sample(pos) {
            if self.drag(&event, sink) {
                emitted += 1;
            }
        }
        emitted
    }

    /// Handle a drag sample that was already gated by the host.
    ///
    /// Returns whether a stripe was emitted.
    pub fn drag(&mut self, event: &DragEvent, sink: &mut dyn PathSink) -> bool {
        match self.tool.on_pointer_drag(event, &self.state) {
            Some(segment) => {
                log::debug!("Stripe {:?} -> {:?}", segment.from, segment.to);
                sink.add_line(segment.from, segment.to);
                true
            }
            None => false,
        }
    }

    pub fn pointer_up(&mut self) {
        self.tool.on_pointer_up();
        self.sampler.end();
    }

    /// Tear the session down, handing back the final parameters
    pub fn deactivate(mut self) -> ToolState {
        self.sampler.end();
        self.tool.deactivate();
        log::info!("Deactivated {} tool", self.tool.name());
        self.state
    }
}
