// Alarm tone lifecycle.
//
// A single tone source is allocated the first time an alarm should be heard
// and lives for the rest of the session. Afterwards only its amplitude moves.

use super::error::ToneError;
use super::params::ToneParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
}

/// A running oscillator whose loudness can be ramped.
pub trait ToneSource {
    fn set_amplitude(&self, value: f32, ramp_sec: f64);
    fn start(&self) -> Result<(), ToneError>;
}

/// Audio output able to build tone sources.
pub trait ToneBackend {
    type Source: ToneSource;
    fn create(&mut self, waveform: Waveform, frequency_hz: f32) -> Result<Self::Source, ToneError>;
}

pub enum ToneStage<S> {
    Silent,
    Sounding { source: S, target: f32 },
}

pub struct ToneController<B: ToneBackend> {
    backend: B,
    params: ToneParams,
    stage: ToneStage<B::Source>,
    amplitude: f32,
}

impl<B: ToneBackend> ToneController<B> {
    pub fn new(backend: B, params: ToneParams) -> Self {
        Self {
            backend,
            params,
            stage: ToneStage::Silent,
            amplitude: 0.0,
        }
    }

    pub fn is_sounding(&self) -> bool {
        matches!(self.stage, ToneStage::Sounding { .. })
    }

    /// The tone source, once allocated.
    pub fn source(&self) -> Option<&B::Source> {
        match &self.stage {
            ToneStage::Silent => None,
            ToneStage::Sounding { source, .. } => Some(source),
        }
    }

    /// Modelled output amplitude following the same linear ramps as the source.
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn enabled(&self) -> bool {
        match &self.stage {
            ToneStage::Silent => false,
            ToneStage::Sounding { target, .. } => *target > 0.0,
        }
    }

    /// Drive the tone from this frame's `tone_on`, `dt_sec` after the last call.
    pub fn update(&mut self, tone_on: bool, dt_sec: f64) {
        if tone_on && !self.is_sounding() {
            match self.allocate() {
                Ok(source) => {
                    self.stage = ToneStage::Sounding {
                        source,
                        target: 0.0,
                    };
                }
                Err(e) => {
                    // stay silent, next frame tries again
                    log::error!("[tone] {}", e);
                    return;
                }
            }
        }

        let ToneStage::Sounding { source, target } = &mut self.stage else {
            return;
        };
        let (want, ramp) = if tone_on {
            (self.params.on_level, self.params.ramp_up_sec)
        } else {
            (0.0, self.params.ramp_down_sec)
        };
        if *target != want {
            *target = want;
            source.set_amplitude(want, ramp);
        }
        self.amplitude = step_linear(self.amplitude, want, self.params.on_level, ramp, dt_sec);
    }

    fn allocate(&mut self) -> Result<B::Source, ToneError> {
        let source = self.backend.create(Waveform::Sine, self.params.frequency_hz)?;
        source.set_amplitude(0.0, 0.0);
        source.start()?;
        log::info!("[tone] alarm source allocated at {:.0} Hz", self.params.frequency_hz);
        Ok(source)
    }
}

/// Move `current` towards `target` at the slope of a full `span` ramp over `ramp_sec`.
#[inline]
fn step_linear(current: f32, target: f32, span: f32, ramp_sec: f64, dt_sec: f64) -> f32 {
    if ramp_sec <= 0.0 {
        return target;
    }
    let max_step = (span as f64 * dt_sec / ramp_sec) as f32;
    let delta = target - current;
    if delta.abs() <= max_step {
        target
    } else {
        current + max_step * delta.signum()
    }
}
