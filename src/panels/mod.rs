mod central_panel;
mod config_panel;
mod tools_panel;
mod widget;

pub use central_panel::central_panel;
pub use config_panel::{ConfigPanel, ConfigPanelBuilder, EditOutcome, zebra_panel};
pub use tools_panel::{config_panel_ui, tools_panel};
pub use widget::{ChangeEffect, Widget, WidgetKind, WidgetSpec};
