//! Triangle-wave animation driver

use serde::{Deserialize, Serialize};

/// A value that sweeps linearly between `min` and `max`, reversing at each bound
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Oscillator {
    pub min: f32,
    pub max: f32,
    /// Units per second
    pub rate: f32,
    /// Current value
    pub value: f32,
    #[serde(default = "default_rising")]
    pub rising: bool,
}

fn default_rising() -> bool {
    true
}

impl Oscillator {
    /// Create an oscillator starting at `value`, clamped into range
    pub fn new(min: f32, max: f32, rate: f32, value: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            rate: rate.abs(),
            value: value.clamp(min, max),
            rising: true,
        }
    }

    /// Advance by `dt` seconds and return the new value
    ///
    /// A step past a bound stops on the bound and flips direction.
    pub fn step(&mut self, dt: f32) -> f32 {
        let delta = self.rate * dt;
        if self.rising {
            self.value += delta;
            if self.value >= self.max {
                self.value = self.max;
                self.rising = false;
            }
        } else {
            self.value -= delta;
            if self.value <= self.min {
                self.value = self.min;
                self.rising = true;
            }
        }
        self.value
    }

    /// Position within the range, 0.0 at `min` and 1.0 at `max`
    pub fn normalized(&self) -> f32 {
        let span = self.max - self.min;
        if span > 0.0 {
            (self.value - self.min) / span
        } else {
            0.0
        }
    }
}
