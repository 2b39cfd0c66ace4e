/// Tunable simulation parameters, threaded through the integrator and
/// renderer instead of living as module-level globals.
///
/// Values are simulation-tuned, not SI.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Gravitational constant, scaled for the simulation.
    pub gravitational_constant: f32,
    /// Fixed integration time step per frame.
    pub time_step: f32,
    /// Minimum separation below which gravity is clamped to zero,
    /// preventing singular forces when bodies coincide.
    pub softening: f32,
    /// Number of past positions kept per body.
    pub trail_length: usize,
    /// Number of additive glow layers drawn behind each body.
    pub glow_layers: u32,
    /// Alpha of the innermost (brightest) glow layer, 0-255.
    pub glow_base_alpha: f32,
    /// Target update/render rate in Hz.
    pub target_frame_rate: u32,
}

impl Default for SimConfig {
    fn default() -> SimConfig {
        SimConfig {
            gravitational_constant: 5.0,
            time_step: 1.0,
            softening: 0.1,
            trail_length: 150,
            glow_layers: 5,
            glow_base_alpha: 80.0,
            target_frame_rate: 60,
        }
    }
}
