// Simulated CO2 concentration: a linear rise followed by a bounded drift.

use super::constants::CO2_STALE_PPM;
use super::params::Co2Params;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Co2Phase {
    Rising,
    Drifting,
}

/// How the face on the right should look for a given reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Co2Mood {
    Fresh,
    Stale,
    Poor,
}

impl Co2Mood {
    pub fn for_ppm(ppm: f32, alarm_ppm: f32) -> Self {
        if ppm >= alarm_ppm {
            Co2Mood::Poor
        } else if ppm >= CO2_STALE_PPM {
            Co2Mood::Stale
        } else {
            Co2Mood::Fresh
        }
    }
}

pub struct Co2Simulator {
    params: Co2Params,
    start_sec: f64,
    ppm: f32,
    drift_target: f32,
    phase: Co2Phase,
    rng: StdRng,
}

impl Co2Simulator {
    pub fn new(params: Co2Params, start_sec: f64, seed: u64) -> Self {
        Self {
            ppm: params.start_ppm,
            drift_target: params.target_ppm,
            params,
            start_sec,
            phase: Co2Phase::Rising,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn ppm(&self) -> f32 {
        self.ppm
    }

    pub fn phase(&self) -> Co2Phase {
        self.phase
    }

    pub fn drift_target(&self) -> f32 {
        self.drift_target
    }

    /// Advance the simulation to `now_sec` for frame `frame_index` and return ppm.
    ///
    /// Once the rise has completed the simulator stays in the drift phase, even
    /// if a later `now_sec` reads as an earlier elapsed time.
    pub fn advance(&mut self, now_sec: f64, frame_index: u64) -> f32 {
        let elapsed = now_sec - self.start_sec;
        if self.phase == Co2Phase::Rising && elapsed > self.params.rise_seconds {
            self.phase = Co2Phase::Drifting;
            // frames may skip the exact end of the rise; drift starts from its end value
            self.ppm = self.params.target_ppm;
            log::debug!("[co2] rise complete at {:.1}s, drifting", elapsed);
        }
        match self.phase {
            Co2Phase::Rising => {
                let t = (elapsed / self.params.rise_seconds).clamp(0.0, 1.0) as f32;
                let span = self.params.target_ppm - self.params.start_ppm;
                self.ppm = self.params.start_ppm + span * t;
            }
            Co2Phase::Drifting => {
                let every = self.params.resample_every_frames.max(1);
                if frame_index % every == 0 {
                    self.resample_drift_target();
                }
                self.ppm += (self.drift_target - self.ppm) * self.params.chase;
            }
        }
        self.ppm
    }

    fn resample_drift_target(&mut self) {
        let spread = self.params.drift_spread_ppm;
        let offset = if spread > 0.0 {
            self.rng.gen_range(-spread..spread)
        } else {
            0.0
        };
        self.drift_target = (self.params.target_ppm + offset)
            .clamp(self.params.drift_min_ppm, self.params.drift_max_ppm);
    }
}
