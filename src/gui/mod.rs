mod app;
mod config;
mod draw;
mod field_view;
mod frame_clock;

pub use app::App;
pub use config::Config;
use field_view::FieldView;
use frame_clock::FrameClock;
