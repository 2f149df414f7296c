use crate::{add_template, Field, Pattern, Simulator, SimulatorConfig, Topology};
use rand::Rng;
use std::time::Duration;

/// Delay between two generations while the simulation is running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Speed {
    Slowest,
    Slow,
    #[default]
    Normal,
    Fast,
    Fastest,
}

impl Speed {
    pub const ALL: [Speed; 5] = [
        Speed::Slowest,
        Speed::Slow,
        Speed::Normal,
        Speed::Fast,
        Speed::Fastest,
    ];

    pub fn tick_interval(&self) -> Duration {
        match self {
            Speed::Slowest => Duration::from_secs(1),
            Speed::Slow => Duration::from_millis(500),
            Speed::Normal => Duration::from_millis(250),
            Speed::Fast => Duration::from_millis(100),
            Speed::Fastest => Duration::ZERO,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Speed::Slowest => "Slowest",
            Speed::Slow => "Slow",
            Speed::Normal => "Normal",
            Speed::Fast => "Fast",
            Speed::Fastest => "Fastest",
        }
    }
}

/// Double-buffered simulation driven by a tick timer.
///
/// `current` is the generation shown to the user, `next` is scratch space
/// for the simulator; they are swapped after every step.
pub struct Life {
    current: Field,
    next: Field,
    simulator: Simulator,
    generation: u64,
    is_running: bool,
    speed: Speed,
    time_left: Duration,
}

impl Life {
    pub fn new(width: usize, height: usize, config: SimulatorConfig) -> Self {
        Self {
            current: Field::new(width, height),
            next: Field::new(width, height),
            simulator: Simulator::new(config),
            generation: 0,
            is_running: false,
            speed: Speed::default(),
            time_left: Duration::ZERO,
        }
    }

    /// The latest generation.
    pub fn current(&self) -> &Field {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Field {
        &mut self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn start(&mut self) {
        log::debug!("simulation started at generation {}", self.generation);
        self.is_running = true;
    }

    pub fn pause(&mut self) {
        log::debug!("simulation paused at generation {}", self.generation);
        self.is_running = false;
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
        self.time_left = self.time_left.min(speed.tick_interval());
    }

    pub fn topology(&self) -> Topology {
        self.simulator.topology()
    }

    pub fn set_topology(&mut self, topology: Topology) {
        self.simulator.set_topology(topology);
    }

    /// Kills every cell in both buffers and restarts the generation counter.
    pub fn reset(&mut self) {
        log::info!("resetting field after {} generations", self.generation);
        self.current.clear();
        self.next.clear();
        self.generation = 0;
    }

    /// Computes one generation, regardless of the running flag.
    pub fn step(&mut self) {
        self.simulator.simulate_step(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Lets `elapsed` time pass; steps once if the tick interval ran out.
    ///
    /// Does nothing while paused. Returns whether a step was made.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.is_running {
            return false;
        }
        self.time_left = self.time_left.saturating_sub(elapsed);
        if !self.time_left.is_zero() {
            return false;
        }
        self.step();
        self.time_left = self.speed.tick_interval();
        true
    }

    /// Flips the cell at `(x, y)`, which must lie inside the field.
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        self.current.toggle_cell_state(x, y);
    }

    pub fn add_template(&mut self, pattern: Pattern, offset_x: isize, offset_y: isize) {
        add_template(pattern, offset_x, offset_y, &mut self.current);
    }

    /// Stamps `pattern` at a random offset; returns the offset used.
    pub fn add_template_at_random<R: Rng>(
        &mut self,
        pattern: Pattern,
        rng: &mut R,
    ) -> (isize, isize) {
        let (width, height) = self.current.size();
        let offset_x = rng.gen_range(0..(width - 1).max(1)) as isize;
        let offset_y = rng.gen_range(0..(height - 1).max(1)) as isize;
        self.add_template(pattern, offset_x, offset_y);
        (offset_x, offset_y)
    }
}
