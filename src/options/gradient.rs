//! Keyed RGBA color gradient.
//!
//! Keys may be stored in any order; evaluation picks the nearest key on each
//! side of `t` and blends linearly between them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// A single color stop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct GradientKey {
    /// Position of the stop in [0, 1].
    pub time: f32,
    /// Linear RGBA color at the stop.
    pub color: [f32; 4],
}

impl GradientKey {
    /// Create a key at `time` with `color`.
    #[must_use]
    pub const fn new(time: f32, color: [f32; 4]) -> Self {
        Self { time, color }
    }
}

/// A color gradient defined by keyed stops.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Gradient {
    /// Color stops. Keys with a NaN time are ignored.
    pub keys: Vec<GradientKey>,
}

impl Default for Gradient {
    /// White at both ends.
    fn default() -> Self {
        Self {
            keys: vec![GradientKey::new(0.0, WHITE), GradientKey::new(1.0, WHITE)],
        }
    }
}

impl Gradient {
    /// Build a gradient from stops in any order.
    #[must_use]
    pub fn new(keys: Vec<GradientKey>) -> Self {
        Self { keys }
    }

    /// Color at position `t`, clamped to [0, 1].
    ///
    /// Outside the key range the nearest end key is returned. A gradient
    /// without usable keys evaluates to white.
    #[must_use]
    pub fn evaluate(&self, t: f32) -> [f32; 4] {
        let t = t.clamp(0.0, 1.0);

        let mut lower: Option<&GradientKey> = None;
        let mut upper: Option<&GradientKey> = None;
        for key in &self.keys {
            if key.time <= t && lower.is_none_or(|l| key.time > l.time) {
                lower = Some(key);
            }
            if key.time >= t && upper.is_none_or(|u| key.time < u.time) {
                upper = Some(key);
            }
        }

        match (lower, upper) {
            (Some(a), Some(b)) => {
                let span = b.time - a.time;
                if span <= 0.0 {
                    return a.color;
                }
                let frac = (t - a.time) / span;
                std::array::from_fn(|i| {
                    a.color[i] + (b.color[i] - a.color[i]) * frac
                })
            }
            (Some(k), None) | (None, Some(k)) => k.color,
            (None, None) => WHITE,
        }
    }

    /// `count` colors sampled at `i / count` for `i` in `0..count`.
    #[must_use]
    pub fn sample_evenly(&self, count: usize) -> Vec<[f32; 4]> {
        (0..count)
            .map(|i| self.evaluate(i as f32 / count as f32))
            .collect()
    }
}
