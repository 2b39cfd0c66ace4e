use ggez::graphics::{self, Color, DrawMode, DrawParam, Mesh, MeshBuilder};
use ggez::nalgebra::{Point2, Vector2};
use ggez::{Context, GameResult};

use crate::body::Body;
use crate::config::SimConfig;
use crate::physics;
use crate::starfield::Star;

const TRAIL_DOT_MIN_ALPHA: f32 = 10.0;
const TRAIL_DOT_MAX_ALPHA: f32 = 180.0;
const TRAIL_DOT_MIN_RADIUS: f32 = 1.0;
const TRAIL_DOT_MAX_RADIUS: f32 = 2.0;

const CIRCLE_TOLERANCE: f32 = 0.1;

/// How the scene is framed: fixed origin at screen center, or tracking
/// the instantaneous center of mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraMode {
    Origin,
    CenterOfMass,
}

impl CameraMode {
    pub fn toggle(self) -> CameraMode {
        match self {
            CameraMode::Origin => CameraMode::CenterOfMass,
            CameraMode::CenterOfMass => CameraMode::Origin,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CameraMode::Origin => "Origin",
            CameraMode::CenterOfMass => "CoM",
        }
    }
}

/// Screen-space translation applied to world positions when drawing.
///
/// Derived from post-step body state every frame; never fed back into
/// the physics.
pub fn camera_offset(bodies: &[Body], mode: CameraMode, screen_dims: (f32, f32)) -> Vector2<f32> {
    let mut offset = Vector2::new(screen_dims.0 / 2.0, screen_dims.1 / 2.0);

    if mode == CameraMode::CenterOfMass {
        // Zero total mass falls back to the plain screen center
        if let Some(com) = physics::center_of_mass(bodies) {
            offset -= com.coords;
        }
    }

    offset
}

/// Shared filled-circle primitive: straight alpha-over blending at
/// integer-rounded screen coordinates.
pub fn draw_circle(ctx: &mut Context, center: Point2<f32>, radius: f32, color: Color) -> GameResult {
    let circle = Mesh::new_circle(ctx, DrawMode::fill(), center, radius, CIRCLE_TOLERANCE, color)?;
    graphics::draw(ctx, &circle, DrawParam::default())
}

#[inline]
fn to_screen(world: &Point2<f32>, offset: Vector2<f32>) -> Point2<f32> {
    Point2::new((world.x + offset.x).round(), (world.y + offset.y).round())
}

#[inline]
fn with_alpha(color: Color, alpha: u8) -> Color {
    Color {
        a: f32::from(alpha) / 255.0,
        ..color
    }
}

/// Trail dot alpha for the sample at `index` from the oldest. Newest
/// samples are the most opaque. The fraction uses the trail capacity,
/// so a part-filled trail never reaches full brightness.
pub fn trail_alpha(index: usize, capacity: usize) -> u8 {
    let fraction = index as f32 / capacity as f32;
    (TRAIL_DOT_MIN_ALPHA + (TRAIL_DOT_MAX_ALPHA - TRAIL_DOT_MIN_ALPHA) * fraction) as u8
}

/// Trail dot radius for the sample at `index` from the oldest, floored
/// to whole pixels with a minimum of 1.
pub fn trail_radius(index: usize, capacity: usize) -> f32 {
    let fraction = index as f32 / capacity as f32;
    (TRAIL_DOT_MIN_RADIUS + (TRAIL_DOT_MAX_RADIUS - TRAIL_DOT_MIN_RADIUS) * fraction)
        .floor()
        .max(1.0)
}

/// Glow alpha for `layer` counted from 1 (outermost) to `layers`
/// (innermost). Super-linear falloff so the inner layers dominate.
pub fn glow_alpha(layer: u32, layers: u32, base_alpha: f32) -> u8 {
    let alpha = base_alpha * (layer as f32 / layers as f32).powf(1.5);
    alpha.max(0.0).min(255.0) as u8
}

/// Glow radius for `layer`: the innermost layer hugs the body, outer
/// layers grow in steps of 0.8 body radii.
pub fn glow_radius(layer: u32, layers: u32, body_radius: f32) -> f32 {
    body_radius + body_radius * 0.8 * (layers - layer + 1) as f32
}

pub fn draw_starfield(ctx: &mut Context, stars: &[Star]) -> GameResult {
    let mut builder = MeshBuilder::new();
    for star in stars {
        builder.circle(DrawMode::fill(), star.position, 1.0, CIRCLE_TOLERANCE, star.color);
    }
    let mesh = builder.build(ctx)?;
    graphics::draw(ctx, &mesh, DrawParam::default())
}

pub fn draw_trail(
    ctx: &mut Context,
    body: &Body,
    offset: Vector2<f32>,
    config: &SimConfig,
) -> GameResult {
    if body.trail.len() < 2 {
        return Ok(());
    }

    let mut builder = MeshBuilder::new();
    for (i, sample) in body.trail.iter().enumerate() {
        builder.circle(
            DrawMode::fill(),
            to_screen(sample, offset),
            trail_radius(i, config.trail_length),
            CIRCLE_TOLERANCE,
            with_alpha(body.color, trail_alpha(i, config.trail_length)),
        );
    }

    let mesh = builder.build(ctx)?;
    graphics::draw(ctx, &mesh, DrawParam::default())
}

/// Draws the layered glow and then the solid disk on top of it.
pub fn draw_body(
    ctx: &mut Context,
    body: &Body,
    offset: Vector2<f32>,
    config: &SimConfig,
) -> GameResult {
    let center = to_screen(&body.position, offset);

    // Innermost (brightest, smallest) layer first, so each larger and
    // fainter layer blends over the ones beneath it
    for layer in (1..=config.glow_layers).rev() {
        draw_circle(
            ctx,
            center,
            glow_radius(layer, config.glow_layers, body.radius),
            with_alpha(body.color, glow_alpha(layer, config.glow_layers, config.glow_base_alpha)),
        )?;
    }

    // Stroked outline plus fill at full opacity
    let outline = Mesh::new_circle(
        ctx,
        DrawMode::stroke(1.0),
        center,
        body.radius,
        CIRCLE_TOLERANCE,
        body.color,
    )?;
    graphics::draw(ctx, &outline, DrawParam::default())?;
    draw_circle(ctx, center, body.radius, body.color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodySnapshot;
    use approx::assert_relative_eq;

    fn single_body(mass: f32, x: f32, y: f32) -> Vec<Body> {
        vec![Body::new(
            &BodySnapshot {
                mass,
                position: Point2::new(x, y),
                velocity: Vector2::new(0.0, 0.0),
                color: Color::new(1.0, 1.0, 1.0, 1.0),
                name: "Solo".to_owned(),
            },
            150,
        )]
    }

    #[test]
    fn origin_mode_offsets_to_screen_center() {
        let bodies = single_body(500.0, 320.0, -75.0);
        let offset = camera_offset(&bodies, CameraMode::Origin, (1000.0, 800.0));

        assert_eq!(offset, Vector2::new(500.0, 400.0));
    }

    #[test]
    fn com_mode_centers_a_single_body_anywhere() {
        for &(x, y) in &[(0.0, 0.0), (320.0, -75.0), (-9999.0, 12345.0)] {
            let bodies = single_body(500.0, x, y);
            let offset = camera_offset(&bodies, CameraMode::CenterOfMass, (1000.0, 800.0));

            let screen = bodies[0].position + offset;
            assert_relative_eq!(screen.x, 500.0, epsilon = 1e-2);
            assert_relative_eq!(screen.y, 400.0, epsilon = 1e-2);
        }
    }

    #[test]
    fn com_mode_falls_back_to_screen_center_without_mass() {
        let offset = camera_offset(&[], CameraMode::CenterOfMass, (1000.0, 800.0));
        assert_eq!(offset, Vector2::new(500.0, 400.0));
    }

    #[test]
    fn camera_mode_toggle_round_trips() {
        assert_eq!(CameraMode::Origin.toggle(), CameraMode::CenterOfMass);
        assert_eq!(CameraMode::Origin.toggle().toggle(), CameraMode::Origin);
    }

    #[test]
    fn glow_alpha_peaks_at_innermost_layer_and_falls_outward() {
        let layers = 5;
        assert_eq!(glow_alpha(layers, layers, 80.0), 80);

        // Layer index counts down towards the outermost layer
        for layer in 2..=layers {
            assert!(glow_alpha(layer, layers, 80.0) > glow_alpha(layer - 1, layers, 80.0));
        }
    }

    #[test]
    fn glow_radius_grows_towards_outer_layers() {
        let layers = 5;
        assert_relative_eq!(glow_radius(layers, layers, 10.0), 18.0);
        assert_relative_eq!(glow_radius(1, layers, 10.0), 50.0);

        for layer in 2..=layers {
            assert!(glow_radius(layer, layers, 10.0) < glow_radius(layer - 1, layers, 10.0));
        }
    }

    #[test]
    fn trail_dots_brighten_and_grow_with_age_fraction() {
        let capacity = 150;
        assert_eq!(trail_alpha(0, capacity), 10);
        assert!(trail_alpha(capacity - 1, capacity) > trail_alpha(0, capacity));

        assert_relative_eq!(trail_radius(0, capacity), 1.0);
        assert_relative_eq!(trail_radius(capacity, capacity), 2.0);
        // Truncation keeps dots at whole-pixel radii, never below 1
        for i in 0..capacity {
            let r = trail_radius(i, capacity);
            assert!(r == 1.0 || r == 2.0);
        }
    }
}
