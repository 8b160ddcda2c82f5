//! Application entry point for the bouncing-knot viewer.
//!
//! Parses command-line options, sets up logging, builds the [`Scene`] and
//! hands it to eframe inside a fixed-size window.

mod canvas;
mod input;
mod options;
mod profile;
mod viewer;

use knot_core::scene::Scene;
use options::Options;
use profile::FrameProfiler;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` once the window is closed.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let opts = Options::from_args(&args);
    log::info!(
        "bounce_knot v{}: {}x{} canvas, {} steps, press F1 for help",
        env!("CARGO_PKG_VERSION"),
        opts.cfg.bounds.width,
        opts.cfg.bounds.height,
        opts.cfg.steps.get()
    );

    let scene = Scene::new(opts.cfg, opts.velocity_source());
    let profiler = opts.profile.then(FrameProfiler::new);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([opts.cfg.bounds.width, opts.cfg.bounds.height])
            .with_resizable(false)
            .with_title("Polyline"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Polyline",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(scene, profiler)))),
    );
    if let Err(err) = &result {
        log::error!("failed to start the window: {err}");
    }
    result
}
