use ggez::nalgebra::{Point2, Vector2};

use crate::body::Body;
use crate::config::SimConfig;

/// Gravitational force exerted on `a` by `b`.
///
/// Returns the zero vector when the bodies are closer than the softening
/// distance, which is the only place the force law could blow up.
pub fn gravitational_force(a: &Body, b: &Body, config: &SimConfig) -> Vector2<f32> {
    let r = b.position - a.position;
    let dist_sq = r.norm_squared();

    if dist_sq < config.softening * config.softening {
        return Vector2::zeros();
    }

    // F = GmM/r^2, along the unit vector towards b
    let magnitude = (config.gravitational_constant * a.mass * b.mass) / dist_sq;
    magnitude * r.normalize()
}

/// Accumulates net gravitational force per body into a scratch buffer
/// indexed in parallel with `bodies`.
///
/// Each unordered pair is evaluated once: the force lands positively on
/// the first body and negated on the second, so the buffer always sums
/// to zero.
pub fn accumulate_forces(bodies: &[Body], config: &SimConfig) -> Vec<Vector2<f32>> {
    let mut forces = vec![Vector2::zeros(); bodies.len()];

    for i in 0..bodies.len() {
        for j in i + 1..bodies.len() {
            let force_ij = gravitational_force(&bodies[i], &bodies[j], config);
            forces[i] += force_ij;
            forces[j] -= force_ij;
        }
    }

    forces
}

/// Advances every body by one semi-implicit Euler step.
///
/// O(N^2) pairwise gravity; fine for single-digit body counts.
pub fn step(bodies: &mut [Body], config: &SimConfig) {
    let forces = accumulate_forces(bodies, config);

    for (body, force) in bodies.iter_mut().zip(forces) {
        body.integrate(force, config.time_step);
    }
}

/// Mass-weighted average position of all bodies, or `None` when the
/// total mass is zero.
pub fn center_of_mass(bodies: &[Body]) -> Option<Point2<f32>> {
    let total_mass: f32 = bodies.iter().map(|b| b.mass).sum();
    if total_mass == 0.0 {
        return None;
    }

    let mut weighted_sum = Vector2::zeros();
    for body in bodies {
        weighted_sum += body.mass * body.position.coords;
    }

    Some(Point2::from(weighted_sum / total_mass))
}
