use super::Config;
use crate::Field;
use eframe::egui::ColorImage;

/// One-pixel-per-cell image of a field, repainting only the cells that
/// changed since the previous refresh.
pub struct FieldView {
    image: ColorImage,
    shown: Vec<bool>,
}

impl FieldView {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            image: ColorImage::new([width, height], Config::DEAD_COLOR),
            shown: vec![false; width * height],
        }
    }

    pub fn image(&self) -> &ColorImage {
        &self.image
    }

    /// Brings the image up to date with `field`; returns whether any pixel changed.
    pub fn refresh(&mut self, field: &Field) -> bool {
        let (width, height) = field.size();
        if self.image.size != [width, height] {
            *self = Self::new(width, height);
        }

        let mut changed = false;
        for (i, (&cell, shown)) in field.cells().iter().zip(self.shown.iter_mut()).enumerate() {
            if cell != *shown {
                *shown = cell;
                self.image.pixels[i] = if cell {
                    Config::ALIVE_COLOR
                } else {
                    Config::DEAD_COLOR
                };
                changed = true;
            }
        }
        changed
    }
}
