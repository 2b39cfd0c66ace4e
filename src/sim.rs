use ggez::graphics::Color;
use ggez::nalgebra::{Point2, Vector2};

use crate::body::{Body, BodySnapshot};
use crate::config::SimConfig;
use crate::physics;

/// The body collection plus the run/pause flag and the startup snapshot
/// used for reset. Body order is stable for the lifetime of a run.
pub struct Simulation {
    pub bodies: Vec<Body>,
    pub paused: bool,
    initial_state: Vec<BodySnapshot>,
}

impl Simulation {
    pub fn new(initial_state: Vec<BodySnapshot>, config: &SimConfig) -> Simulation {
        let bodies = initial_state
            .iter()
            .map(|snapshot| Body::new(snapshot, config.trail_length))
            .collect();

        Simulation {
            bodies,
            paused: false,
            initial_state,
        }
    }

    /// The reference three-body scenario.
    pub fn three_body(config: &SimConfig) -> Simulation {
        Simulation::new(
            vec![
                BodySnapshot {
                    mass: 500.0,
                    position: Point2::new(-150.0, 0.0),
                    velocity: Vector2::new(1.0, 1.5),
                    color: Color::from_rgb(255, 50, 50),
                    name: "Body A".to_owned(),
                },
                BodySnapshot {
                    mass: 600.0,
                    position: Point2::new(150.0, 50.0),
                    velocity: Vector2::new(-1.0, -1.0),
                    color: Color::from_rgb(50, 255, 50),
                    name: "Body B".to_owned(),
                },
                BodySnapshot {
                    mass: 400.0,
                    position: Point2::new(0.0, -200.0),
                    velocity: Vector2::new(0.5, -0.5),
                    color: Color::from_rgb(50, 50, 255),
                    name: "Body C".to_owned(),
                },
            ],
            config,
        )
    }

    /// Runs one integration step unless paused. Rendering continues
    /// regardless; only physics is gated.
    pub fn advance(&mut self, config: &SimConfig) {
        if self.paused {
            return;
        }
        physics::step(&mut self.bodies, config);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Rebuilds every body from the startup snapshot, clearing trails,
    /// and resumes the simulation.
    pub fn reset(&mut self, config: &SimConfig) {
        self.bodies = self
            .initial_state
            .iter()
            .map(|snapshot| Body::new(snapshot, config.trail_length))
            .collect();
        self.paused = false;
    }

    pub fn total_momentum(&self) -> Vector2<f32> {
        self.bodies
            .iter()
            .fold(Vector2::zeros(), |acc, body| acc + body.momentum())
    }
}
