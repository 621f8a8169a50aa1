use crate::ZebraApp;
use crate::input::{pointer_events, route_event};
use crate::renderer::Renderer;

pub fn central_panel(app: &mut ZebraApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::WHITE))
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            // Handle input
            for event in pointer_events(&response, canvas_rect) {
                let (session, document) = app.session_and_document_mut();
                route_event(event, session, document);
            }

            // Render the canvas
            Renderer::new(canvas_rect.min.to_vec2()).render(&painter, app.document());
        });
}
