// Microphone level smoothing and the dBFS -> display dB mapping.

use super::params::SmoothingParams;

/// Exponentially smoothed microphone level.
///
/// The smoothed value only ever moves part of the way towards the latest raw
/// reading, so it never overshoots it.
#[derive(Clone, Debug)]
pub struct SignalSmoother {
    params: SmoothingParams,
    smoothed: f32,
}

impl SignalSmoother {
    pub fn new(params: SmoothingParams) -> Self {
        Self {
            params,
            smoothed: 0.0,
        }
    }

    /// Blend `raw` into the smoothed level and return the mapped display dB.
    pub fn update(&mut self, raw: f32) -> f32 {
        self.smoothed += (raw - self.smoothed) * self.params.factor;
        self.display_db()
    }

    pub fn smoothed(&self) -> f32 {
        self.smoothed
    }

    pub fn dbfs(&self) -> f32 {
        amplitude_to_dbfs(self.smoothed, self.params.epsilon)
    }

    pub fn display_db(&self) -> f32 {
        let (in_lo, in_hi) = self.params.dbfs_range;
        let (out_lo, out_hi) = self.params.display_range;
        map_clamped(self.dbfs(), in_lo, in_hi, out_lo, out_hi)
    }
}

#[inline]
pub fn amplitude_to_dbfs(amplitude: f32, epsilon: f32) -> f32 {
    20.0 * amplitude.max(epsilon).log10()
}

/// Linear range mapping with the output clamped to `[out_lo, out_hi]`.
#[inline]
pub fn map_clamped(v: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    let t = (v - in_lo) / (in_hi - in_lo);
    let out = out_lo + (out_hi - out_lo) * t;
    let (lo, hi) = if out_lo <= out_hi {
        (out_lo, out_hi)
    } else {
        (out_hi, out_lo)
    };
    out.clamp(lo, hi)
}
