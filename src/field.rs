use crate::{Error, Result};
use std::fmt;

/// Rectangular grid of dead/alive cells stored row-major in a flat buffer.
///
/// Two addressing modes are provided:
/// * [`Field::get_cell_state`] / [`Field::set_cell_state`] take signed
///   coordinates and project them back onto the field (`-1` maps to the last
///   column/row, everything else goes through `%`).
/// * [`Field::get_cell_state_strict`] takes coordinates that the caller
///   guarantees to be inside the field and panics otherwise.
#[derive(Clone, PartialEq, Eq)]
pub struct Field {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Field {
    /// Creates a `width x height` field with all cells dead.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width >= 1 && height >= 1,
            "field must be at least 1x1, got {width}x{height}"
        );
        let Some(len) = width.checked_mul(height) else {
            panic!("field {width}x{height} is too large");
        };
        Self {
            cells: vec![false; len],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Row-major cell states, `cells()[x + y * width]`.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Sets the cell at the projected position.
    ///
    /// Coordinates `<= -2` stay negative after the projection and the write is
    /// dropped.
    pub fn set_cell_state(&mut self, x: isize, y: isize, is_alive: bool) {
        match self.project(x, y) {
            Some((x, y)) => {
                let idx = self.index(x, y);
                self.cells[idx] = is_alive;
            }
            None => log::trace!("dropped write to ({x}, {y}) outside of the field"),
        }
    }

    /// Reads the cell at the projected position.
    ///
    /// Positions that are still outside the field after the projection
    /// (coordinates `<= -2`) read as dead.
    pub fn get_cell_state(&self, x: isize, y: isize) -> bool {
        match self.project(x, y) {
            Some((x, y)) => self.cells[self.index(x, y)],
            None => false,
        }
    }

    /// Reads the cell at `(x, y)`, which must lie inside the field.
    pub fn get_cell_state_strict(&self, x: usize, y: usize) -> bool {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside of {}x{} field",
            self.width,
            self.height
        );
        self.cells[self.index(x, y)]
    }

    /// Flips the cell at `(x, y)`, which must lie inside the field.
    pub fn toggle_cell_state(&mut self, x: usize, y: usize) {
        let state = self.get_cell_state_strict(x, y);
        let idx = self.index(x, y);
        self.cells[idx] = !state;
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Fills the field with random cells, each alive with probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) -> Result<()> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(Error::InvalidFillRate(fill_rate));
        }
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
        Ok(())
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    /// Applies the `-1` remap and the truncating remainder to both axes.
    #[inline]
    fn project(&self, x: isize, y: isize) -> Option<(usize, usize)> {
        let x = project_axis(x, self.width)?;
        let y = project_axis(y, self.height)?;
        Some((x, y))
    }
}

#[inline]
fn project_axis(coord: isize, len: usize) -> Option<usize> {
    let len = len as isize;
    let coord = if coord == -1 { len - 1 } else { coord };
    // truncating remainder keeps the sign of `coord`
    let coord = coord % len;
    if coord < 0 {
        None
    } else {
        Some(coord as usize)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks_exact(self.width) {
            for &cell in row {
                f.write_str(if cell { "X" } else { "O" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Field {}x{}", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}
