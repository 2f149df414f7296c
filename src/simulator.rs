use crate::{Field, SimulatorConfig, Topology};

/// Applies Conway's rule (B3/S23) to a whole field at once.
///
/// The simulator holds no state besides its topology, so a step is a pure
/// function of the source field.
#[derive(Clone, Copy, Debug, Default)]
pub struct Simulator {
    topology: Topology,
}

impl Simulator {
    pub fn new(config: SimulatorConfig) -> Self {
        Self {
            topology: config.topology(),
        }
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
    }

    /// Computes the generation following `source` into `destination`.
    ///
    /// Both fields must have the same dimensions.
    pub fn simulate_step(&self, source: &Field, destination: &mut Field) {
        assert_eq!(
            source.size(),
            destination.size(),
            "source and destination fields must have equal sizes"
        );

        let (width, height) = source.size();
        for y in 0..height {
            for x in 0..width {
                let neibs = self.neighbor_count(source, x, y);
                let next = if source.get_cell_state_strict(x, y) {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                destination.set_cell_state(x as isize, y as isize, next);
            }
        }
    }

    /// Number of alive cells among the 8 neighbors of `(x, y)`.
    pub fn neighbor_count(&self, field: &Field, x: usize, y: usize) -> u8 {
        const OFFSETS: [(isize, isize); 8] = [
            (1, 0),
            (-1, 0),
            (0, 1),
            (0, -1),
            (1, 1),
            (1, -1),
            (-1, -1),
            (-1, 1),
        ];

        let (x, y) = (x as isize, y as isize);
        OFFSETS
            .iter()
            .map(|&(dx, dy)| self.neighbor_state(field, x + dx, y + dy) as u8)
            .sum()
    }

    #[inline]
    fn neighbor_state(&self, field: &Field, x: isize, y: isize) -> bool {
        match self.topology {
            Topology::SolidWalls => {
                let (width, height) = field.size();
                if x < 0 || x >= width as isize || y < 0 || y >= height as isize {
                    return false;
                }
                field.get_cell_state_strict(x as usize, y as usize)
            }
            Topology::Torus => field.get_cell_state(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_from_rows(rows: &[&str]) -> Field {
        let mut field = Field::new(rows[0].len(), rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.bytes().enumerate() {
                field.set_cell_state(x as isize, y as isize, c == b'X');
            }
        }
        field
    }

    fn step(simulator: &Simulator, field: &Field) -> Field {
        let mut next = Field::new(field.width(), field.height());
        simulator.simulate_step(field, &mut next);
        next
    }

    #[test]
    fn test_neighbor_count() {
        let field = field_from_rows(&["OOOOO", "OXXXO", "OXXOO", "OOOOO"]);
        let simulator = Simulator::default();
        assert_eq!(simulator.neighbor_count(&field, 2, 2), 4);
        assert_eq!(simulator.neighbor_count(&field, 0, 0), 1);
        assert_eq!(simulator.neighbor_count(&field, 4, 3), 0);
        assert_eq!(simulator.neighbor_count(&field, 3, 2), 3);
    }

    #[test]
    fn test_torus_neighbors_wrap() {
        let mut field = Field::new(6, 5);
        field.set_cell_state(5, 4, true);
        let torus = Simulator::default();
        assert_eq!(torus.neighbor_count(&field, 0, 0), 1);
        assert_eq!(torus.neighbor_count(&field, 0, 4), 1);
        assert_eq!(torus.neighbor_count(&field, 5, 0), 1);
    }

    #[test]
    fn test_solid_walls_corner() {
        let mut field = Field::new(6, 5);
        field.set_cell_state(0, 0, true);
        field.set_cell_state(5, 4, true);
        field.set_cell_state(5, 0, true);
        field.set_cell_state(0, 4, true);
        let walls = Simulator::new(SimulatorConfig { solid_walls: true });
        assert_eq!(walls.topology(), Topology::SolidWalls);
        for (x, y) in [(0, 0), (5, 4), (5, 0), (0, 4)] {
            assert_eq!(walls.neighbor_count(&field, x, y), 0);
        }
        let torus = Simulator::default();
        for (x, y) in [(0, 0), (5, 4), (5, 0), (0, 4)] {
            assert_eq!(torus.neighbor_count(&field, x, y), 3);
        }
    }

    #[test]
    fn test_solid_walls_corner_evolution() {
        // Torus joins the four corners into a block, walls kill them.
        let field = field_from_rows(&["XOOOX", "OOOOO", "OOOOO", "XOOOX"]);
        let torus = Simulator::default();
        assert_eq!(step(&torus, &field), field);

        let walls = Simulator::new(SimulatorConfig { solid_walls: true });
        assert_eq!(step(&walls, &field).population(), 0);
    }

    #[test]
    fn test_blinker() {
        let field = field_from_rows(&["OOOOO", "OOOOO", "OXXXO", "OOOOO", "OOOOO"]);
        let rotated = field_from_rows(&["OOOOO", "OOXOO", "OOXOO", "OOXOO", "OOOOO"]);
        for topology in [Topology::Torus, Topology::SolidWalls] {
            let simulator = Simulator::new(topology.into());
            let next = step(&simulator, &field);
            assert_eq!(next, rotated);
            assert_eq!(step(&simulator, &next), field);
        }
    }

    #[test]
    fn test_overwrites_destination() {
        let field = Field::new(4, 4);
        let mut next = Field::new(4, 4);
        next.randomize(Some(7), 0.5).unwrap();
        Simulator::default().simulate_step(&field, &mut next);
        assert_eq!(next.population(), 0);
    }

    #[test]
    #[should_panic(expected = "equal sizes")]
    fn test_mismatched_sizes() {
        let source = Field::new(4, 4);
        let mut destination = Field::new(4, 5);
        Simulator::default().simulate_step(&source, &mut destination);
    }
}
