use conway_field::{Field, Simulator, SimulatorConfig};
use std::time::Instant;

const SIDE: usize = 512;
const STEPS: usize = 100;
const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    for solid_walls in [false, true] {
        let simulator = Simulator::new(SimulatorConfig { solid_walls });
        let mut curr = Field::new(SIDE, SIDE);
        let mut next = Field::new(SIDE, SIDE);
        curr.randomize(Some(SEED), FILL_RATE)?;

        let timer = Instant::now();
        for _ in 0..STEPS {
            simulator.simulate_step(&curr, &mut next);
            std::mem::swap(&mut curr, &mut next);
        }
        let elapsed = timer.elapsed();
        println!(
            "{:?}: {STEPS} steps of {SIDE}x{SIDE} in {elapsed:?} ({:?} per step), population {}",
            simulator.topology(),
            elapsed / STEPS as u32,
            curr.population()
        );
    }
    Ok(())
}
