// Per-frame orchestration of the dashboard session.
//
// `Dashboard` owns every piece of mutable session state. The render loop calls
// `tick` once per animation frame and input handlers call
// `press` between frames; both run on the browser's single event
// loop so no locking is involved.

use super::alarm::{AlarmArbiter, AlarmState, MuteState};
use super::co2::{Co2Mood, Co2Simulator};
use super::input::{route_press, PressAction};
use super::layout::{is_portrait, HitRegions, Layout};
use super::params::DashboardParams;
use super::smoothing::SignalSmoother;
use super::tone::{ToneBackend, ToneController};
use glam::DVec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeasurementState {
    pub active: bool,
    /// Last microphone reading, frozen while inactive.
    pub raw_level: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub now_sec: f64,
    pub dt_sec: f64,
    /// Instantaneous microphone level, if a reading was taken this frame.
    pub raw_level: Option<f32>,
    pub width: f64,
    pub height: f64,
}

/// What the renderer needs to draw one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameSnapshot {
    pub frame_index: u64,
    pub display_db: f32,
    pub ppm: f32,
    pub mood: Co2Mood,
    pub alarms: AlarmState,
    pub mutes: MuteState,
    pub active: bool,
    pub tone_amplitude: f32,
    /// `None` while the portrait advisory replaces the dashboard.
    pub layout: Option<Layout>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    Ignored,
    MuteLeft(bool),
    MuteRight(bool),
    /// Measurement should start; the caller opens the microphone and then
    /// reports success through [`Dashboard::set_measurement_active`].
    StartRequested,
    Stopped,
}

pub struct Dashboard<B: ToneBackend> {
    smoother: SignalSmoother,
    co2: Co2Simulator,
    arbiter: AlarmArbiter,
    tone: ToneController<B>,
    measurement: MeasurementState,
    mutes: MuteState,
    hit_regions: HitRegions,
    frame_index: u64,
}

impl<B: ToneBackend> Dashboard<B> {
    pub fn new(backend: B, params: DashboardParams, start_sec: f64, seed: u64) -> Self {
        Self {
            smoother: SignalSmoother::new(params.smoothing),
            co2: Co2Simulator::new(params.co2, start_sec, seed),
            arbiter: AlarmArbiter::new(params.alarms),
            tone: ToneController::new(backend, params.tone),
            measurement: MeasurementState::default(),
            mutes: MuteState::default(),
            hit_regions: HitRegions::default(),
            frame_index: 0,
        }
    }

    pub fn tick(&mut self, input: FrameInput) -> FrameSnapshot {
        self.frame_index += 1;

        if self.measurement.active {
            if let Some(raw) = input.raw_level {
                self.measurement.raw_level = raw;
            }
        }
        let display_db = self.smoother.update(self.measurement.raw_level);
        let ppm = self.co2.advance(input.now_sec, self.frame_index);
        let alarms = self
            .arbiter
            .evaluate(self.measurement.active, display_db, ppm, self.mutes);
        self.tone.update(alarms.tone_on, input.dt_sec);

        // simulation keeps running behind the portrait advisory
        let layout = if is_portrait(input.width, input.height) {
            self.hit_regions = HitRegions::default();
            None
        } else {
            let layout = Layout::compute(input.width, input.height);
            self.hit_regions = layout.hit_regions(alarms.left_active, alarms.right_active);
            Some(layout)
        };

        FrameSnapshot {
            frame_index: self.frame_index,
            display_db,
            ppm,
            mood: Co2Mood::for_ppm(ppm, self.arbiter.thresholds().co2_ppm),
            alarms,
            mutes: self.mutes,
            active: self.measurement.active,
            tone_amplitude: self.tone.amplitude(),
            layout,
        }
    }

    /// Route a press at canvas pixel `p` against the last published regions.
    pub fn press(&mut self, p: DVec2) -> PressOutcome {
        match route_press(p, &self.hit_regions) {
            Some(PressAction::ToggleMuteLeft) => {
                self.mutes.mute_left = !self.mutes.mute_left;
                log::info!("[press] sound alarm muted={}", self.mutes.mute_left);
                PressOutcome::MuteLeft(self.mutes.mute_left)
            }
            Some(PressAction::ToggleMuteRight) => {
                self.mutes.mute_right = !self.mutes.mute_right;
                log::info!("[press] co2 alarm muted={}", self.mutes.mute_right);
                PressOutcome::MuteRight(self.mutes.mute_right)
            }
            Some(PressAction::ToggleMeasurement) => {
                if self.measurement.active {
                    self.set_measurement_active(false);
                    PressOutcome::Stopped
                } else {
                    PressOutcome::StartRequested
                }
            }
            None => PressOutcome::Ignored,
        }
    }

    /// Mutes are left untouched here.
    pub fn set_measurement_active(&mut self, active: bool) {
        if self.measurement.active != active {
            log::info!("[measure] {}", if active { "started" } else { "stopped" });
        }
        self.measurement.active = active;
    }

    pub fn measurement(&self) -> MeasurementState {
        self.measurement
    }

    pub fn mutes(&self) -> MuteState {
        self.mutes
    }

    pub fn hit_regions(&self) -> &HitRegions {
        &self.hit_regions
    }

    pub fn tone(&self) -> &ToneController<B> {
        &self.tone
    }

    pub fn co2(&self) -> &Co2Simulator {
        &self.co2
    }

    pub fn smoother(&self) -> &SignalSmoother {
        &self.smoother
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}
