use crate::ZebraApp;
use crate::panels::{ConfigPanel, WidgetKind};
use crate::state::{ParamName, ParamValue, ToolState};
use crate::tools::Tool;

pub fn tools_panel(app: &mut ZebraApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            let edit = config_panel_ui(ui, app.session().panel(), app.session().state());
            if let Some((name, value)) = edit {
                // Rejections are logged by the session
                app.session_mut().edit(name, value).ok();
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    log::info!("Clearing {} paths", app.document().paths().len());
                    app.document_mut().clear();
                }
                ui.label(format!("Paths: {}", app.document().paths().len()));
            });
            ui.label(format!("(State: {})", app.session().tool().current_state_name()));
        });
}

/// Show every widget of `panel` with its current value from `state`.
///
/// Returns the widget the user changed this frame and its new value. The
/// caller applies it through [`ConfigPanel::edit`].
pub fn config_panel_ui(
    ui: &mut egui::Ui,
    panel: &ConfigPanel,
    state: &ToolState,
) -> Option<(ParamName, ParamValue)> {
    let mut change = None;

    ui.heading(panel.title());
    egui::Grid::new("config_panel_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for (name, widget) in panel.widgets() {
                let spec = widget.spec();
                let enabled = widget.is_enabled();
                ui.add_enabled(enabled, egui::Label::new(spec.label.as_str()));

                let edited = match (spec.kind, state.get(name), &spec.range) {
                    (WidgetKind::Checkbox, ParamValue::Bool(mut checked), _) => ui
                        .add_enabled(enabled, egui::Checkbox::without_text(&mut checked))
                        .changed()
                        .then_some(ParamValue::Bool(checked)),
                    (WidgetKind::Slider, ParamValue::Number(mut value), Some(range)) => ui
                        .add_enabled(enabled, egui::Slider::new(&mut value, range.clone()))
                        .changed()
                        .then_some(ParamValue::Number(value)),
                    (_, ParamValue::Number(mut value), range) => {
                        let mut drag = egui::DragValue::new(&mut value).speed(0.5);
                        if let Some(range) = range {
                            drag = drag.range(range.clone());
                        }
                        ui.add_enabled(enabled, drag)
                            .changed()
                            .then_some(ParamValue::Number(value))
                    }
                    (_, ParamValue::Bool(_), _) => None,
                };

                if let Some(value) = edited {
                    change = Some((name, value));
                }
                ui.end_row();
            }
        });

    change
}
