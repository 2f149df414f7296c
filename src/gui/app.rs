use super::{Config, FieldView, FrameClock};
use crate::{Life, Pattern, SimulatorConfig};
use eframe::egui::{
    CentralPanel, Color32, Context, Frame, Key, Margin, Pos2, Rect, TextureHandle,
    TextureOptions,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

pub struct App {
    pub(super) life: Life,                  // Simulation state and tick timer.
    pub(super) view: FieldView,             // Image of the last rendered generation.
    pub(super) texture: TextureHandle,      // Texture handle of the field image.
    pub(super) life_rect: Option<Rect>,     // Part of the window displaying the field.
    pub(super) selected_template: usize,    // Selector index of the template to add.
    pub(super) rng: ChaCha8Rng,             // Source of template offsets and random fills.
    pub(super) frame_clock: FrameClock,     // Limits the frame rate to a certain value.
    pub(super) last_frametime: Duration,    // Duration of the previous frame.
    pub(super) max_fps: f64,
}

impl App {
    pub fn new(ctx: &Context) -> Self {
        let life = Life::new(
            Config::BOARD_WIDTH,
            Config::BOARD_HEIGHT,
            SimulatorConfig::default(),
        );
        let view = FieldView::new(Config::BOARD_WIDTH, Config::BOARD_HEIGHT);
        log::info!(
            "starting with a {}x{} {:?} field",
            Config::BOARD_WIDTH,
            Config::BOARD_HEIGHT,
            life.topology()
        );
        Self {
            texture: ctx.load_texture(
                "Conway's GoL field",
                view.image().clone(),
                TextureOptions::NEAREST,
            ),
            life,
            view,
            life_rect: None,
            selected_template: Config::DEFAULT_TEMPLATE,
            rng: ChaCha8Rng::from_entropy(),
            frame_clock: FrameClock::default(),
            last_frametime: Duration::ZERO,
            max_fps: Config::MAX_FPS,
        }
    }

    pub fn reset_field(&mut self) {
        self.life.pause();
        self.life.reset();
    }

    pub fn add_selected_template(&mut self) {
        match Pattern::from_index(self.selected_template) {
            Ok(pattern) => {
                let (x, y) = self.life.add_template_at_random(pattern, &mut self.rng);
                log::debug!("{pattern} placed at ({x}, {y})");
            }
            Err(err) => log::error!("{err}"),
        }
    }

    pub fn randomize_field(&mut self) {
        use rand::Rng;

        let seed = self.rng.gen();
        if let Err(err) = self
            .life
            .current_mut()
            .randomize(Some(seed), Config::RANDOM_FILL_RATE)
        {
            log::error!("{err}");
        }
    }

    fn handle_input(&mut self, ctx: &Context) {
        let life_rect = self.life_rect;
        let field_size = self.life.current().size();
        let (click, toggle_run, one_step) = ctx.input(|input| {
            let click = life_rect
                .zip(input.pointer.interact_pos())
                .filter(|_| input.pointer.primary_clicked())
                .and_then(|(rect, pos)| cell_at(rect, pos, field_size));
            (
                click,
                input.key_pressed(Key::E) && !input.modifiers.ctrl,
                input.key_pressed(Key::Space),
            )
        });

        if let Some((x, y)) = click {
            self.life.toggle_cell(x, y);
        }
        if toggle_run {
            if self.life.is_running() {
                self.life.pause();
            } else {
                self.life.start();
            }
        }
        if one_step && !self.life.is_running() {
            self.life.step();
        }
    }

    fn update_texture(&mut self) {
        if self.view.refresh(self.life.current()) {
            self.texture
                .set(self.view.image().clone(), TextureOptions::NEAREST);
        }
    }
}

/// Maps a position inside `life_rect` to coordinates of a `width x height` field.
fn cell_at(life_rect: Rect, pos: Pos2, (width, height): (usize, usize)) -> Option<(usize, usize)> {
    if !life_rect.contains(pos) {
        return None;
    }
    let p = (pos - life_rect.left_top()) / life_rect.size();
    let x = ((p.x * width as f32) as usize).min(width - 1);
    let y = ((p.y * height as f32) as usize).min(height - 1);
    Some((x, y))
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_input(ctx);
                self.life.advance(self.last_frametime);
                self.update_texture();

                self.draw(ui);
            });

        self.last_frametime = self.frame_clock.finish_frame(self.max_fps);
    }
}
