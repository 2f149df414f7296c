#![warn(clippy::all)]

//! Conway's Game of Life on a bounded field: cell storage, the B3/S23 step
//! with toroidal or solid-wall edges, and a table of known patterns that can be
//! stamped onto a field.

mod error;
mod field;
#[cfg(feature = "gui")]
mod gui;
mod life;
mod simulator;
mod templates;
mod utils;

pub use error::{Error, Result};
pub use field::Field;
#[cfg(feature = "gui")]
pub use gui::{App, Config};
pub use life::{Life, Speed};
pub use simulator::Simulator;
pub use templates::{add_template, add_template_named, Pattern, Template};
pub use utils::{SimulatorConfig, Topology};
