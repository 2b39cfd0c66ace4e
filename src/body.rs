use ggez::graphics::Color;
use ggez::nalgebra::{Point2, Vector2};

use crate::trail::Trail;

/// Initial conditions for one body, captured at startup and used to
/// rebuild the body collection on reset.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    pub mass: f32,
    pub position: Point2<f32>,
    pub velocity: Vector2<f32>,
    pub color: Color,
    pub name: String,
}

/// A point mass participating in gravitational interaction, plus its
/// visual identity and motion trail.
pub struct Body {
    pub mass: f32,
    pub position: Point2<f32>,
    pub velocity: Vector2<f32>,
    pub color: Color,
    pub name: String,
    /// Display radius, derived once from mass. Sub-linear in mass so
    /// large mass ratios stay visually distinguishable.
    pub radius: f32,
    pub trail: Trail,
}

impl Body {
    pub fn new(snapshot: &BodySnapshot, trail_capacity: usize) -> Body {
        Body {
            mass: snapshot.mass,
            position: snapshot.position,
            velocity: snapshot.velocity,
            color: snapshot.color,
            name: snapshot.name.clone(),
            radius: radius_from_mass(snapshot.mass),
            trail: Trail::new(trail_capacity),
        }
    }

    /// Semi-implicit Euler step: velocity is advanced first, then the
    /// position uses the updated velocity. The new position is recorded
    /// on the trail.
    pub fn integrate(&mut self, force: Vector2<f32>, dt: f32) {
        let acceleration = force / self.mass; // F = ma
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
        self.trail.record(self.position);
    }

    #[inline]
    pub fn momentum(&self) -> Vector2<f32> {
        self.mass * self.velocity
    }
}

#[inline]
pub fn radius_from_mass(mass: f32) -> f32 {
    (mass.powf(1.0 / 3.5) * 1.8).floor().max(2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn snapshot(mass: f32) -> BodySnapshot {
        BodySnapshot {
            mass,
            position: Point2::new(0.0, 0.0),
            velocity: Vector2::new(0.0, 0.0),
            color: Color::new(1.0, 1.0, 1.0, 1.0),
            name: "Test".to_owned(),
        }
    }

    #[test]
    fn radius_scales_sublinearly_with_mass() {
        assert_eq!(radius_from_mass(500.0), (500.0f32.powf(1.0 / 3.5) * 1.8).floor());
        assert!(radius_from_mass(600.0) > radius_from_mass(400.0));
        // Tiny masses bottom out at the visual minimum
        assert_eq!(radius_from_mass(0.5), 2.0);
    }

    #[test]
    fn integrate_updates_velocity_before_position() {
        let mut body = Body::new(&snapshot(2.0), 10);
        body.velocity = Vector2::new(1.0, 0.0);

        body.integrate(Vector2::new(4.0, 0.0), 1.0);

        // a = 2, v = 1 + 2 = 3, x = 0 + 3 (not 0 + 1)
        assert_relative_eq!(body.velocity.x, 3.0);
        assert_relative_eq!(body.position.x, 3.0);
        assert_eq!(body.trail.len(), 1);
    }
}
