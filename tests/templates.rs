#[cfg(test)]
mod tests {
    use conway_field::{
        add_template, add_template_named, Error, Field, Pattern, Simulator,
    };

    fn stamped(pattern: Pattern, size: usize, offset: isize) -> Field {
        let mut field = Field::new(size, size);
        add_template(pattern, offset, offset, &mut field);
        field
    }

    /// Smallest `p <= max_period` such that the field repeats after `p` steps.
    fn period(field: &Field, max_period: usize) -> Option<usize> {
        let simulator = Simulator::default();
        let mut curr = field.clone();
        let mut next = Field::new(field.width(), field.height());
        for p in 1..=max_period {
            simulator.simulate_step(&curr, &mut next);
            std::mem::swap(&mut curr, &mut next);
            if &curr == field {
                return Some(p);
            }
        }
        None
    }

    #[test]
    fn test_stamp_matches_rows() {
        for pattern in Pattern::ALL {
            let template = pattern.template();
            let field = stamped(pattern, 20, 3);
            for (dy, row) in template.rows().iter().enumerate() {
                for (dx, c) in row.bytes().enumerate() {
                    let alive = field.get_cell_state_strict(3 + dx, 3 + dy);
                    assert_eq!(alive, c == b'X', "{pattern} at ({dx}, {dy})");
                }
            }
            assert_eq!(field.population(), template.population(), "{pattern}");
        }
    }

    #[test]
    fn test_glider_bitmap() {
        let field = stamped(Pattern::Glider, 3, 0);
        assert_eq!(field.to_string(), "OXO\nOOX\nXXX\n");
    }

    #[test]
    fn test_stamp_overwrites() {
        let mut field = Field::new(10, 10);
        field.randomize(Some(3), 1.0).unwrap();
        add_template(Pattern::Claphand, 2, 2, &mut field);
        // dead template cells clear what was there
        assert!(!field.get_cell_state_strict(2, 2));
        assert!(!field.get_cell_state_strict(5, 3));
        assert!(field.get_cell_state_strict(3, 2));
        // outside the template nothing changes
        assert!(field.get_cell_state_strict(6, 2));
        assert_eq!(field.population(), 100 - 2);
    }

    #[test]
    fn test_pulsar_leaves_one_cell_untouched() {
        let mut field = Field::new(13, 13);
        field.set_cell_state(10, 4, true);
        add_template(Pattern::Pulsar, 0, 0, &mut field);
        assert!(field.get_cell_state_strict(10, 4));
        assert!(field.get_cell_state_strict(11, 4));

        let mut field = Field::new(13, 13);
        add_template(Pattern::Pulsar, 0, 0, &mut field);
        assert!(!field.get_cell_state_strict(10, 4));
    }

    #[test]
    fn test_stamp_wraps_across_edges() {
        let field = stamped(Pattern::Glider, 16, 14);
        let alive: Vec<_> = (0..16)
            .flat_map(|y| (0..16).map(move |x| (x, y)))
            .filter(|&(x, y)| field.get_cell_state_strict(x, y))
            .collect();
        assert_eq!(alive, [(0, 0), (14, 0), (15, 0), (15, 14), (0, 15)]);
    }

    #[test]
    fn test_stamp_at_minus_one() {
        let mut field = Field::new(8, 8);
        add_template(Pattern::Glider, -1, -1, &mut field);
        assert!(field.get_cell_state_strict(0, 7));
        assert!(field.get_cell_state_strict(1, 0));
        assert_eq!(field.population(), 5);
    }

    #[test]
    fn test_stamp_at_max_offset() {
        let mut field = Field::new(8, 8);
        add_template(Pattern::Glider, isize::MAX, 0, &mut field);
        // column `isize::MAX` projects to 7, the next one wraps to `isize::MIN`
        // (projects to 0), the last one stays negative and is dropped
        assert!(field.get_cell_state_strict(7, 2));
        assert!(field.get_cell_state_strict(0, 0));
        assert!(field.get_cell_state_strict(0, 2));
        assert_eq!(field.population(), 3);

        let mut field = Field::new(8, 8);
        add_template(Pattern::Glider, 0, isize::MAX, &mut field);
        assert!(field.get_cell_state_strict(1, 7));
        assert!(field.get_cell_state_strict(2, 0));
        assert_eq!(field.population(), 2);
    }

    #[test]
    fn test_unsupported_name_leaves_field() {
        let mut field = Field::new(10, 10);
        field.randomize(Some(9), 0.4).unwrap();
        let before = field.clone();

        let err = add_template_named("Gosper glider gun", 0, 0, &mut field).unwrap_err();
        assert_eq!(err, Error::UnsupportedPattern("Gosper glider gun".to_string()));
        assert_eq!(err.to_string(), "template \"Gosper glider gun\" is not supported");
        assert_eq!(field, before);

        add_template_named("glider", 0, 0, &mut field).unwrap();
        assert_ne!(field, before);
    }

    #[test]
    fn test_oscillators() {
        let cases = [
            (Pattern::Claphand, 2),
            (Pattern::Laser2, 2),
            (Pattern::Pulsar, 3),
            (Pattern::Octagon, 5),
            (Pattern::Tumbler, 14),
            (Pattern::Pentadecathlon, 15),
        ];
        for (pattern, expected) in cases {
            let field = stamped(pattern, 40, 14);
            assert_eq!(period(&field, 20), Some(expected), "{pattern}");
        }
    }

    #[test]
    fn test_lightweight_spaceship_moves_left() {
        let simulator = Simulator::default();
        let mut curr = Field::new(32, 16);
        add_template(Pattern::SpaceshipLightweight, 10, 5, &mut curr);
        let mut expected = Field::new(32, 16);
        add_template(Pattern::SpaceshipLightweight, 8, 5, &mut expected);

        let mut next = Field::new(32, 16);
        for _ in 0..4 {
            simulator.simulate_step(&curr, &mut next);
            std::mem::swap(&mut curr, &mut next);
        }
        assert_eq!(curr, expected);
    }
}
