//! Microphone capture through `getUserMedia` and an analyser tap.

use crate::core::MicError;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

const ANALYSER_FFT_SIZE: u32 = 1024;

struct LiveInput {
    stream: web::MediaStream,
    source: web::MediaStreamAudioSourceNode,
    analyser: web::AnalyserNode,
}

#[derive(Default)]
pub struct Microphone {
    live: Option<LiveInput>,
    requesting: bool,
    buf: Vec<f32>,
}

impl Microphone {
    pub fn is_requesting(&self) -> bool {
        self.requesting
    }

    pub fn set_requesting(&mut self, requesting: bool) {
        self.requesting = requesting;
    }

    /// Route a granted stream into a fresh analyser.
    pub fn attach(
        &mut self,
        audio_ctx: &web::AudioContext,
        stream: web::MediaStream,
    ) -> Result<(), MicError> {
        self.stop();
        let source = audio_ctx
            .create_media_stream_source(&stream)
            .map_err(|e| MicError::Graph(format!("{:?}", e)))?;
        let analyser =
            web::AnalyserNode::new(audio_ctx).map_err(|e| MicError::Graph(format!("{:?}", e)))?;
        analyser.set_fft_size(ANALYSER_FFT_SIZE);
        source
            .connect_with_audio_node(&analyser)
            .map_err(|e| MicError::Graph(format!("{:?}", e)))?;
        self.buf.resize(analyser.fft_size() as usize, 0.0);
        self.live = Some(LiveInput {
            stream,
            source,
            analyser,
        });
        Ok(())
    }

    /// Release the device. Safe to call when nothing is attached.
    pub fn stop(&mut self) {
        if let Some(live) = self.live.take() {
            _ = live.source.disconnect();
            let tracks: js_sys::Array = live.stream.get_tracks();
            for track in tracks.iter() {
                if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
                    track.stop();
                }
            }
        }
    }

    /// RMS amplitude of the latest analyser window, 0..1.
    pub fn level(&mut self) -> Option<f32> {
        let live = self.live.as_ref()?;
        live.analyser.get_float_time_domain_data(&mut self.buf);
        if self.buf.is_empty() {
            return Some(0.0);
        }
        let sum_sq: f32 = self.buf.iter().map(|s| s * s).sum();
        Some((sum_sq / self.buf.len() as f32).sqrt())
    }
}

/// Ask the browser for an audio-only input stream.
pub async fn request_stream() -> Result<web::MediaStream, MicError> {
    let window = web::window().ok_or(MicError::NoMediaDevices)?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|_| MicError::NoMediaDevices)?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_audio(&wasm_bindgen::JsValue::TRUE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| MicError::PermissionDenied(format!("{:?}", e)))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| MicError::PermissionDenied(format!("{:?}", e)))?;
    stream
        .dyn_into::<web::MediaStream>()
        .map_err(|e| MicError::Graph(format!("{:?}", e)))
}
