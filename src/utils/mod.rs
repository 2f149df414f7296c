mod config;
mod topology;

pub use config::SimulatorConfig;
pub use topology::Topology;
