mod table;

use crate::{Error, Field, Result};
use std::{fmt, str::FromStr};

/// Known life forms that can be stamped onto a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    Acorn,
    Bugface,
    /// Also known as Toad.
    Claphand,
    Chaos,
    Diehard,
    Flower,
    Glider,
    Horseshoe,
    Laser0,
    Laser2,
    Octagon,
    Pentadecathlon,
    Pulsar,
    QueenBeeShuttle,
    SpaceshipLightweight,
    Tumbler,
}

impl Pattern {
    /// All patterns, in selector order.
    pub const ALL: [Pattern; 16] = [
        Pattern::Acorn,
        Pattern::Bugface,
        Pattern::Claphand,
        Pattern::Chaos,
        Pattern::Diehard,
        Pattern::Flower,
        Pattern::Glider,
        Pattern::Horseshoe,
        Pattern::Laser0,
        Pattern::Laser2,
        Pattern::Octagon,
        Pattern::Pentadecathlon,
        Pattern::Pulsar,
        Pattern::QueenBeeShuttle,
        Pattern::SpaceshipLightweight,
        Pattern::Tumbler,
    ];

    /// Identifier of the pattern, as accepted by [`Pattern::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Acorn => "Acorn",
            Pattern::Bugface => "Bugface",
            Pattern::Claphand => "Claphand",
            Pattern::Chaos => "Chaos",
            Pattern::Diehard => "Diehard",
            Pattern::Flower => "Flower",
            Pattern::Glider => "Glider",
            Pattern::Horseshoe => "Horseshoe",
            Pattern::Laser0 => "Laser0",
            Pattern::Laser2 => "Laser2",
            Pattern::Octagon => "Octagon",
            Pattern::Pentadecathlon => "Pentadecathlon",
            Pattern::Pulsar => "Pulsar",
            Pattern::QueenBeeShuttle => "QueenBeeShuttle",
            Pattern::SpaceshipLightweight => "SpaceshipLightweight",
            Pattern::Tumbler => "Tumbler",
        }
    }

    pub fn template(&self) -> &'static Template {
        match self {
            Pattern::Acorn => &table::ACORN,
            Pattern::Bugface => &table::BUGFACE,
            Pattern::Claphand => &table::TOAD,
            Pattern::Chaos => &table::CHAOS,
            Pattern::Diehard => &table::DIEHARD,
            Pattern::Flower => &table::FLOWER,
            Pattern::Glider => &table::GLIDER,
            Pattern::Horseshoe => &table::HORSESHOE,
            Pattern::Laser0 => &table::LASER_0,
            Pattern::Laser2 => &table::LASER_2,
            Pattern::Octagon => &table::OCTAGON,
            Pattern::Pentadecathlon => &table::PENTADECATHLON,
            Pattern::Pulsar => &table::PULSAR,
            Pattern::QueenBeeShuttle => &table::QUEEN_BEE_SHUTTLE,
            Pattern::SpaceshipLightweight => &table::SPACESHIP_LIGHTWEIGHT,
            Pattern::Tumbler => &table::TUMBLER,
        }
    }

    /// Pattern at position `index` of [`Pattern::ALL`].
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| Error::UnsupportedPattern(format!("#{index}")))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("toad") {
            return Ok(Pattern::Claphand);
        }
        Self::ALL
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| Error::UnsupportedPattern(s.to_string()))
    }
}

/// Fixed rectangular bitmap of a pattern.
#[derive(Debug)]
pub struct Template {
    label: &'static str,
    rows: &'static [&'static str],
}

impl Template {
    const fn new(label: &'static str, rows: &'static [&'static str]) -> Self {
        Self { label, rows }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Rows of the bitmap: `X` - alive, `O` - dead, `.` - untouched.
    pub fn rows(&self) -> &'static [&'static str] {
        self.rows
    }

    /// Cells written by the template as `(dx, dy, is_alive)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.rows.iter().enumerate().flat_map(|(dy, row)| {
            row.bytes().enumerate().filter_map(move |(dx, c)| match c {
                b'X' => Some((dx, dy, true)),
                b'O' => Some((dx, dy, false)),
                _ => None,
            })
        })
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells().filter(|&(_, _, alive)| alive).count()
    }
}

/// Writes `pattern` into `field` with its top-left corner at `(offset_x, offset_y)`.
///
/// Cells are written with [`Field::set_cell_state`], so a template crossing an
/// edge wraps to the opposite side. Coordinates are computed with wrapping
/// arithmetic and never overflow. Existing cells under the template are
/// overwritten.
pub fn add_template(pattern: Pattern, offset_x: isize, offset_y: isize, field: &mut Field) {
    log::debug!("adding {pattern} at ({offset_x}, {offset_y})");
    for (dx, dy, is_alive) in pattern.template().cells() {
        let x = offset_x.wrapping_add(dx as isize);
        let y = offset_y.wrapping_add(dy as isize);
        field.set_cell_state(x, y, is_alive);
    }
}

/// Like [`add_template`], but resolves the pattern by name first.
///
/// The field is left untouched if the name is not supported.
pub fn add_template_named(
    name: &str,
    offset_x: isize,
    offset_y: isize,
    field: &mut Field,
) -> Result<()> {
    let pattern = name.parse::<Pattern>().map_err(|err| {
        log::warn!("{err}");
        err
    })?;
    add_template(pattern, offset_x, offset_y, field);
    Ok(())
}
