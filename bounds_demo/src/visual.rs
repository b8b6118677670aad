use ggez::event::{self, EventHandler};
use ggez::glam::Vec2 as GVec2;
use ggez::graphics::{self, Color, DrawMode, DrawParam, Mesh, Rect as GRect};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, GameError, GameResult};
use rect_bounds::*;

use crate::{create_box_pen, default_config, HEIGHT, WIDTH};

struct MainState {
    sim: Simulation,
}

impl MainState {
    fn new(_ctx: &mut Context) -> GameResult<MainState> {
        let sim = create_box_pen(default_config()).map_err(|e| GameError::CustomError(e.to_string()))?;
        Ok(MainState { sim })
    }
}

impl EventHandler for MainState {
    fn update(&mut self, _ctx: &mut Context) -> GameResult {
        self.sim.step();
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, Color::BLACK);

        let touching: Vec<usize> = self
            .sim
            .contacts
            .iter()
            .flat_map(|c| [c.body_a_idx, c.body_b_idx])
            .collect();

        for (idx, body) in self.sim.bodies.iter().enumerate() {
            let color = if touching.contains(&idx) { Color::RED } else { Color::WHITE };
            let mesh = Mesh::new_rectangle(
                ctx,
                DrawMode::stroke(2.0),
                GRect::new(0.0, 0.0, body.rect.width as f32, body.rect.height as f32),
                color,
            )?;
            canvas.draw(&mesh, DrawParam::new().dest(GVec2::new(body.rect.x as f32, body.rect.y as f32)));
        }

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        match input.keycode {
            Some(KeyCode::Escape) => ctx.request_quit(),
            // Toggle bouncing off the walls
            Some(KeyCode::R) => self.sim.config.reflect_on_bounds = !self.sim.config.reflect_on_bounds,
            _ => {}
        }
        Ok(())
    }
}

pub fn run_visual() -> GameResult {
    let cb = ggez::ContextBuilder::new("bounds_demo", "author")
        .window_setup(ggez::conf::WindowSetup::default().title("Bounded Boxes"))
        .window_mode(ggez::conf::WindowMode::default().dimensions(WIDTH as f32, HEIGHT as f32));

    let (mut ctx, event_loop) = cb.build()?;
    let state = MainState::new(&mut ctx)?;
    event::run(ctx, event_loop, state)
}
