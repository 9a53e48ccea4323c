//! Drifting hero-background particles, positioned purely from elapsed time.

use std::time::Duration;

use rand::Rng;

pub(crate) const PARTICLE_COUNT: usize = 50;
const MIN_PERIOD_SECS: f32 = 5.0;
const MAX_PERIOD_SECS: f32 = 15.0;

#[derive(Debug, Clone, Copy)]
struct Particle {
    /// Horizontal position as a fraction of the field width.
    col_frac: f32,
    /// Phase offset so particles do not rise in lockstep.
    phase: f32,
    /// Seconds for one full bottom-to-top pass.
    period_secs: f32,
}

/// A fixed set of particles that rise through the hero band.
///
/// Positions are a pure function of elapsed time, so the field needs no
/// per-frame mutation and pauses cleanly when disabled.
#[derive(Debug)]
pub(crate) struct ParticleField {
    particles: Vec<Particle>,
    enabled: bool,
}

impl ParticleField {
    pub(crate) fn new(enabled: bool) -> Self {
        Self::with_rng(&mut rand::thread_rng(), enabled)
    }

    pub(crate) fn with_rng(rng: &mut impl Rng, enabled: bool) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                col_frac: rng.gen_range(0.0..1.0),
                phase: rng.gen_range(0.0..1.0),
                period_secs: rng.gen_range(MIN_PERIOD_SECS..MAX_PERIOD_SECS),
            })
            .collect();
        Self { particles, enabled }
    }

    #[must_use]
    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Cell positions of all particles within a `width` x `height` band.
    ///
    /// Empty when the field is disabled or the band is degenerate.
    #[must_use]
    pub(crate) fn positions(&self, elapsed: Duration, width: u16, height: u16) -> Vec<(u16, u16)> {
        if !self.enabled || width == 0 || height == 0 {
            return Vec::new();
        }
        let secs = elapsed.as_secs_f32();
        self.particles
            .iter()
            .map(|p| {
                let progress = (secs / p.period_secs + p.phase).fract();
                let x = (p.col_frac * f32::from(width)) as u16;
                // Rising: progress 0 is the bottom row, 1 wraps back around.
                let y = (f32::from(height) * (1.0 - progress)) as u16;
                (x.min(width - 1), y.min(height - 1))
            })
            .collect()
    }
}
