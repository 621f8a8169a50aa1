#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Zebra"),
        ..Default::default()
    };
    eframe::run_native(
        "Zebra",
        native_options,
        Box::new(|cc| Ok(Box::new(zebra_paint::ZebraApp::new(cc)?))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
