mod body;
mod config;
mod physics;
mod render;
mod sim;
mod starfield;
mod trail;

use ggez::event::{self, EventHandler, KeyCode, KeyMods};
use ggez::graphics::{self, Color, DrawMode, DrawParam, Mesh, Rect};
use ggez::timer;
use ggez::{Context, GameResult};

use log::{debug, info};

use config::SimConfig;
use render::CameraMode;
use sim::Simulation;
use starfield::Star;

pub const SCREEN_DIMS: (f32, f32) = (1000.0, 800.0);

const BACKGROUND: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
const INFO_TEXT_COLOR: Color = Color { r: 1.0, g: 1.0, b: 0.0, a: 1.0 };
const INFO_PANEL_SIZE: (f32, f32) = (250.0, 130.0);

struct MainState {
    sim: Simulation,
    config: SimConfig,
    stars: Vec<Star>,
    camera_mode: CameraMode,
    show_info: bool,
}

impl MainState {
    fn new(_ctx: &mut Context, config: SimConfig) -> GameResult<MainState> {
        let mut rand_thread = rand::thread_rng();

        Ok(MainState {
            sim: Simulation::three_body(&config),
            stars: starfield::generate_stars(&mut rand_thread, SCREEN_DIMS.0, SCREEN_DIMS.1),
            config,
            camera_mode: CameraMode::CenterOfMass,
            show_info: true,
        })
    }

    fn draw_info_panel(&self, ctx: &mut Context) -> GameResult {
        let panel = Mesh::new_rectangle(
            ctx,
            DrawMode::fill(),
            Rect::new(5.0, 5.0, INFO_PANEL_SIZE.0, INFO_PANEL_SIZE.1),
            Color::from_rgba(20, 20, 20, 180),
        )?;
        graphics::draw(ctx, &panel, DrawParam::default())?;

        let lines = [
            format!("Bodies: {} | FPS: {:.1}", self.sim.bodies.len(), timer::fps(ctx)),
            format!(
                "G: {:.1} | dt: {:.4}",
                self.config.gravitational_constant, self.config.time_step
            ),
            format!("Paused: {} [SPACE]", if self.sim.paused { "Yes" } else { "No" }),
            format!("Center: {} [C]", self.camera_mode.label()),
            format!("Info: {} [I]", if self.show_info { "On" } else { "Off" }),
            String::from("Reset: [R]"),
        ];

        for (i, line) in lines.iter().enumerate() {
            let text = graphics::Text::new(line.as_str());
            graphics::draw(
                ctx,
                &text,
                DrawParam::new()
                    .dest([15.0, 15.0 + i as f32 * 20.0])
                    .color(INFO_TEXT_COLOR),
            )?;
        }

        Ok(())
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        // Fixed-dt stepping at the target rate; rendering continues even
        // while paused
        while timer::check_update_time(ctx, self.config.target_frame_rate) {
            self.sim.advance(&self.config);
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        graphics::clear(ctx, BACKGROUND);

        // Stars sit behind everything and ignore the camera
        render::draw_starfield(ctx, &self.stars)?;

        let offset = render::camera_offset(&self.sim.bodies, self.camera_mode, SCREEN_DIMS);

        for body in &self.sim.bodies {
            render::draw_trail(ctx, body, offset, &self.config)?;
        }
        for body in &self.sim.bodies {
            render::draw_body(ctx, body, offset, &self.config)?;
        }

        if self.show_info {
            self.draw_info_panel(ctx)?;
        }

        graphics::present(ctx)?;
        timer::yield_now();
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, keycode: KeyCode, _keymods: KeyMods, _repeat: bool) {
        match keycode {
            KeyCode::Space => {
                self.sim.toggle_pause();
                debug!("Paused: {}", self.sim.paused);
            }
            KeyCode::I => {
                self.show_info = !self.show_info;
            }
            KeyCode::C => {
                self.camera_mode = self.camera_mode.toggle();
                debug!("Camera mode: {}", self.camera_mode.label());
            }
            KeyCode::R => {
                self.sim.reset(&self.config);
                info!("Simulation reset to initial conditions");
            }
            KeyCode::Escape => event::quit(ctx),
            _ => {}
        }
    }
}

pub fn main() -> GameResult {
    use ggez::conf::{NumSamples, WindowMode, WindowSetup};

    env_logger::init();

    let config = SimConfig::default();
    info!(
        "Starting three-body simulation: G = {}, dt = {}, target = {} Hz",
        config.gravitational_constant, config.time_step, config.target_frame_rate
    );

    let cb = ggez::ContextBuilder::new("three_body", "josh")
        .window_setup(
            WindowSetup::default()
                .title("Three-Body Problem")
                .samples(NumSamples::Four),
        )
        .window_mode(WindowMode::default().dimensions(SCREEN_DIMS.0, SCREEN_DIMS.1));

    let (ctx, event_loop) = &mut cb.build()?;
    let state = &mut MainState::new(ctx, config)?;
    event::run(ctx, event_loop, state)
}
