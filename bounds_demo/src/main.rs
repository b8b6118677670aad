use rect_bounds::*;
use std::env;
use tracing_subscriber::EnvFilter;

mod visual;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "visual" {
        if let Err(e) = visual::run_visual() {
            tracing::error!("error running visual demo: {}", e);
        }
        return;
    }

    let config_path = args.get(1);
    let config = match config_path {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("could not load {}: {}", path, e);
                return;
            }
        },
        None => default_config(),
    };

    match run_headless(config) {
        Ok(()) => tracing::info!("simulation finished"),
        Err(e) => tracing::error!("simulation failed: {}", e),
    }
}

fn load_config(path: &str) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(SimulationConfig::from_json(&json)?)
}

pub fn default_config() -> SimulationConfig {
    SimulationConfig::default().with_region(Rect::new(0.0, 0.0, WIDTH, HEIGHT))
}

/// Boxes of a few sizes launched in different directions.
pub fn create_box_pen(config: SimulationConfig) -> Result<Simulation, EngineError> {
    let mut sim = Simulation::new(config)?;
    for i in 0..12 {
        let size = 20.0 + (i % 4) as f64 * 10.0;
        let position = Vec2::new(100.0 + (i % 6) as f64 * 110.0, 150.0 + (i / 6) as f64 * 200.0);
        let mut body = MovingBody::new(position, Vec2::new(size, size)).with_max_speed(400.0);
        body.change_direction(i as f64 * 0.7);
        body.start(Some(150.0 + i as f64 * 20.0));
        sim.add_body(body);
    }
    Ok(sim)
}

fn run_headless(config: SimulationConfig) -> Result<(), EngineError> {
    let mut sim = create_box_pen(config)?;
    tracing::info!("simulating {} bounded boxes", sim.bodies.len());

    for frame in 0..600 {
        sim.step();
        for event in &sim.bounds_hits {
            tracing::debug!(frame, body = event.body_idx, point = ?event.hit.point, "wall hit");
        }
        if frame % 60 == 0 {
            let body = sim.body(0)?;
            tracing::info!(
                frame,
                x = body.position.x,
                y = body.position.y,
                contacts = sim.contacts.len(),
                "box 0"
            );
        }
    }
    Ok(())
}
