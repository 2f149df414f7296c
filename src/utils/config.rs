use super::Topology;

/// Settings the simulator is built with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// If `true`, neighbors outside the field count as dead;
    /// otherwise the field is treated as a torus.
    pub solid_walls: bool,
}

impl SimulatorConfig {
    pub fn topology(&self) -> Topology {
        if self.solid_walls {
            Topology::SolidWalls
        } else {
            Topology::Torus
        }
    }
}

impl From<Topology> for SimulatorConfig {
    fn from(topology: Topology) -> Self {
        Self {
            solid_walls: topology == Topology::SolidWalls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_torus() {
        let config = SimulatorConfig::default();
        assert!(!config.solid_walls);
        assert_eq!(config.topology(), Topology::Torus);
    }

    #[test]
    fn test_topology_round_trip() {
        for topology in [Topology::Torus, Topology::SolidWalls] {
            assert_eq!(SimulatorConfig::from(topology).topology(), topology);
        }
    }
}
