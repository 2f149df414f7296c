use super::{App, Config};
use crate::{Pattern, SimulatorConfig, Speed, Topology};
use eframe::egui::{
    load::SizedTexture, Button, ComboBox, Image, RichText, Slider, Stroke, Ui, Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let is_running = self.life.is_running();
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!is_running, Self::new_button("Start"))
                .clicked()
            {
                self.life.start();
            }
            if ui
                .add_enabled(is_running, Self::new_button("Pause"))
                .clicked()
            {
                self.life.pause();
            }
            if ui.add(Self::new_button("Reset")).clicked() {
                self.reset_field();
            }
        });

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!is_running, Self::new_button("Next step"))
                .clicked()
            {
                self.life.step();
            }
            if ui.add(Self::new_button("Random")).clicked() {
                self.randomize_field();
            }
        });

        ui.label(Self::new_text("Speed:"));
        let mut speed = self.life.speed();
        ui.horizontal_wrapped(|ui| {
            for s in Speed::ALL {
                ui.radio_value(&mut speed, s, Self::new_text(s.label()));
            }
        });
        if speed != self.life.speed() {
            self.life.set_speed(speed);
        }

        let mut solid_walls = self.life.topology() == Topology::SolidWalls;
        ui.checkbox(&mut solid_walls, Self::new_text("Solid walls"));
        let topology = SimulatorConfig { solid_walls }.topology();
        if topology != self.life.topology() {
            log::debug!("switching to {topology:?}");
            self.life.set_topology(topology);
        }
    }

    fn draw_template_controls(&mut self, ui: &mut Ui) {
        let selected = Pattern::from_index(self.selected_template)
            .map_or("", |pattern| pattern.template().label());
        ComboBox::from_label(Self::new_text("Template"))
            .selected_text(Self::new_text(selected))
            .show_ui(ui, |ui| {
                for (i, pattern) in Pattern::ALL.iter().enumerate() {
                    ui.selectable_value(
                        &mut self.selected_template,
                        i,
                        pattern.template().label(),
                    );
                }
            });

        if ui.add(Self::new_button("Add template")).clicked() {
            self.add_selected_template();
        }
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        let field = self.life.current();
        ui.label(Self::new_text(&format!(
            "Generation: {}\nPopulation: {}\nField: {}x{}",
            self.life.generation(),
            field.population(),
            field.width(),
            field.height(),
        )));

        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.frame_clock.fps().round() as u32
        )));

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            ui.add(Slider::new(&mut self.max_fps, 5.0..=240.0).logarithmic(true));
        });
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_simulation_controls(ui);
                });
            });

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_template_controls(ui);
                });
            });

            ui.add_space(Config::GAP_ABOVE_STATS);

            self.draw_stats(ui);
        });
    }

    fn draw_gol_field(&mut self, ui: &mut Ui, size: Vec2) {
        let source = SizedTexture::new(self.texture.id(), size);
        let response = ui.add(Image::from_texture(source));
        self.life_rect.replace(response.rect);
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();
        let (width, height) = self.life.current().size();

        // largest whole-pixel cell size that fits next to the controls
        let cell_px = ((area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN)
            / width as f32)
            .min(area.y / height as f32)
            .floor()
            .clamp(1., Config::CELL_SIZE);
        let size = Vec2::new(width as f32, height as f32) * cell_px;

        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(Config::FRAME_MARGIN);

            self.draw_gol_field(ui, size);
        });
    }
}
