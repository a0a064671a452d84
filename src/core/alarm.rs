use super::params::AlarmThresholds;

/// Per-side mute flags. Only the mute buttons change these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MuteState {
    pub mute_left: bool,
    pub mute_right: bool,
}

/// Result of one alarm evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlarmState {
    /// Sound-level banner visible.
    pub left_active: bool,
    /// CO2 banner visible.
    pub right_active: bool,
    /// At least one visible alarm is not muted.
    pub tone_on: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AlarmArbiter {
    thresholds: AlarmThresholds,
}

impl AlarmArbiter {
    pub fn new(thresholds: AlarmThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> AlarmThresholds {
        self.thresholds
    }

    /// Pure combinational check, no latching between frames.
    pub fn evaluate(&self, active: bool, mapped_db: f32, ppm: f32, mutes: MuteState) -> AlarmState {
        let left_active = active && mapped_db > self.thresholds.loud_db;
        let right_active = ppm >= self.thresholds.co2_ppm;
        let tone_on = (left_active && !mutes.mute_left) || (right_active && !mutes.mute_right);
        AlarmState {
            left_active,
            right_active,
            tone_on,
        }
    }
}
