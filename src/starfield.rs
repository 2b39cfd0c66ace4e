use ggez::graphics::Color;
use ggez::nalgebra::Point2;
use rand::rngs::ThreadRng;
use rand::Rng;

pub const NUM_STARS: usize = 100;

const STAR_BRIGHTNESS_MINMAX: (u8, u8) = (50, 150);

/// A fixed background star: screen position plus grayscale color.
/// Generated once at startup, never mutated, no parallax.
pub struct Star {
    pub position: Point2<f32>,
    pub color: Color,
}

pub fn generate_stars(rand_thread: &mut ThreadRng, width: f32, height: f32) -> Vec<Star> {
    (0..NUM_STARS)
        .map(|_| {
            let brightness =
                rand_thread.gen_range(STAR_BRIGHTNESS_MINMAX.0, STAR_BRIGHTNESS_MINMAX.1 + 1);
            Star {
                position: Point2::new(
                    rand_thread.gen_range(0.0, width),
                    rand_thread.gen_range(0.0, height),
                ),
                color: Color::from_rgb(brightness, brightness, brightness),
            }
        })
        .collect()
}
