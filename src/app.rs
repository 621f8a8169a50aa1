use crate::document::Document;
use crate::error::PanelError;
use crate::panels::{central_panel, tools_panel};
use crate::session::ZebraSession;
use crate::stroke::StrokeStyle;

/// eframe host for the zebra tool: a config side panel and a drawing canvas
#[derive(Debug)]
pub struct ZebraApp {
    session: ZebraSession,
    document: Document,
}

impl ZebraApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, PanelError> {
        Ok(Self {
            session: ZebraSession::activate()?,
            document: Document::with_default_style(StrokeStyle::default()),
        })
    }

    pub fn session(&self) -> &ZebraSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut ZebraSession {
        &mut self.session
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Both halves at once, for routing pointer events into the document
    pub fn session_and_document_mut(&mut self) -> (&mut ZebraSession, &mut Document) {
        (&mut self.session, &mut self.document)
    }
}

impl eframe::App for ZebraApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
