use crate::core::{ToneBackend, ToneError, ToneSource, Waveform};
use web_sys as web;

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &'static str,
) -> Result<web::GainNode, ToneError> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(ToneError::NodeCreation {
                node: label,
                detail: format!("{:?}", e),
            })
        }
    }
}

/// Browsers keep a fresh context suspended until a user gesture.
#[inline]
pub fn resume(audio_ctx: &web::AudioContext) {
    if audio_ctx.state() == web::AudioContextState::Suspended {
        _ = audio_ctx.resume();
    }
}

/// Builds oscillator tone sources on a shared `AudioContext`.
pub struct WebToneBackend {
    audio_ctx: web::AudioContext,
}

impl WebToneBackend {
    pub fn new(audio_ctx: web::AudioContext) -> Self {
        Self { audio_ctx }
    }
}

/// Oscillator -> gain -> destination. The gain carries the alarm amplitude.
///
/// Nodes are only wired into the graph once the oscillator has started, so a
/// source that fails to start leaves nothing connected behind.
pub struct WebTone {
    audio_ctx: web::AudioContext,
    osc: web::OscillatorNode,
    gain: web::GainNode,
}

impl ToneBackend for WebToneBackend {
    type Source = WebTone;

    fn create(&mut self, waveform: Waveform, frequency_hz: f32) -> Result<WebTone, ToneError> {
        let osc = web::OscillatorNode::new(&self.audio_ctx).map_err(|e| {
            log::error!("OscillatorNode error: {:?}", e);
            ToneError::NodeCreation {
                node: "Oscillator",
                detail: format!("{:?}", e),
            }
        })?;
        match waveform {
            Waveform::Sine => osc.set_type(web::OscillatorType::Sine),
        }
        osc.frequency().set_value(frequency_hz);
        let gain = create_gain(&self.audio_ctx, 0.0, "Alarm")?;
        Ok(WebTone {
            audio_ctx: self.audio_ctx.clone(),
            osc,
            gain,
        })
    }
}

impl ToneSource for WebTone {
    fn set_amplitude(&self, value: f32, ramp_sec: f64) {
        let param = self.gain.gain();
        if ramp_sec <= 0.0 {
            param.set_value(value);
            return;
        }
        let now = self.audio_ctx.current_time();
        _ = param.cancel_scheduled_values(now);
        _ = param.set_value_at_time(param.value(), now);
        _ = param.linear_ramp_to_value_at_time(value, now + ramp_sec);
    }

    fn start(&self) -> Result<(), ToneError> {
        self.osc
            .start()
            .map_err(|e| ToneError::Start(format!("{:?}", e)))?;
        self.osc
            .connect_with_audio_node(&self.gain)
            .and_then(|_| self.gain.connect_with_audio_node(&self.audio_ctx.destination()))
            .map_err(|e| {
                _ = self.osc.stop();
                _ = self.osc.disconnect();
                ToneError::Start(format!("{:?}", e))
            })?;
        Ok(())
    }
}
