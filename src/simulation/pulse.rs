//! One-shot glow pulse attached to every particle
//!
//! A pulse only starts once, when a glowing particle is constructed. While
//! pulsing, `advance` accumulates elapsed time and the intensity follows
//! `sin(pi * elapsed / duration)`; once `elapsed >= duration` the pulse drops
//! back to `Idle` with zero intensity.

use std::f64::consts::PI;

use super::params::PULSE_DURATION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseState {
    Idle,
    Pulsing,
}

#[derive(Debug, Clone)]
pub struct Pulse {
    state: PulseState,
    intensity: f64, // in [0, 1]
    elapsed: f64, // time since the pulse started, caller's delta units
}

impl Default for Pulse {
    fn default() -> Self {
        Self {
            state: PulseState::Idle,
            intensity: 0.0,
            elapsed: 0.0,
        }
    }
}

impl Pulse {
    /// Enter `Pulsing` from `Idle`; a pulse already in progress is left alone
    pub fn start(&mut self) {
        if self.state == PulseState::Idle {
            self.state = PulseState::Pulsing;
            self.elapsed = 0.0;
            self.intensity = 0.0;
        }
    }

    /// Advance the pulse by `delta_time`. No-op while idle
    pub fn advance(&mut self, delta_time: f64) {
        if self.state != PulseState::Pulsing {
            return;
        }

        self.elapsed += delta_time;

        if self.elapsed < PULSE_DURATION {
            self.intensity = (PI * self.elapsed / PULSE_DURATION).sin();
        } else {
            self.state = PulseState::Idle;
            self.intensity = 0.0;
            self.elapsed = 0.0;
        }
    }

    pub fn state(&self) -> PulseState {
        self.state
    }

    pub fn is_pulsing(&self) -> bool {
        self.state == PulseState::Pulsing
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
