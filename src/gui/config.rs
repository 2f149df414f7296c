use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const BOARD_WIDTH: usize = 64;
    pub const BOARD_HEIGHT: usize = 48;
    pub const CELL_SIZE: f32 = 10.;

    pub const ALIVE_COLOR: Color32 = Color32::BLACK;
    pub const DEAD_COLOR: Color32 = Color32::WHITE;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 300.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const GAP_ABOVE_STATS: f32 = 30.;

    pub const MAX_FPS: f64 = 60.;
    pub const RANDOM_FILL_RATE: f64 = 0.3;
    /// Index in the template selector, Glider.
    pub const DEFAULT_TEMPLATE: usize = 6;
}
