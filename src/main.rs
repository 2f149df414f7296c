#![warn(clippy::all)]

use anyhow::anyhow;

fn main() -> anyhow::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1080., 600.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(conway_field::App::new(&cc.egui_ctx)))),
    )
    .map_err(|err| anyhow!("failed to run the viewer: {err}"))
}
