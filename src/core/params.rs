use super::constants::*;

#[derive(Clone, Debug)]
pub struct SmoothingParams {
    pub factor: f32,
    pub epsilon: f32,
    pub dbfs_range: (f32, f32),
    pub display_range: (f32, f32),
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            factor: SMOOTHING_FACTOR,
            epsilon: LEVEL_EPSILON,
            dbfs_range: (DBFS_MIN, DBFS_MAX),
            display_range: (DISPLAY_DB_MIN, DISPLAY_DB_MAX),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Co2Params {
    pub start_ppm: f32,
    pub target_ppm: f32,
    pub rise_seconds: f64,
    pub drift_spread_ppm: f32,
    pub drift_min_ppm: f32,
    pub drift_max_ppm: f32,
    pub resample_every_frames: u64,
    pub chase: f32,
}

impl Default for Co2Params {
    fn default() -> Self {
        Self {
            start_ppm: CO2_START_PPM,
            target_ppm: CO2_TARGET_PPM,
            rise_seconds: CO2_RISE_SECONDS,
            drift_spread_ppm: CO2_DRIFT_SPREAD_PPM,
            drift_min_ppm: CO2_DRIFT_MIN_PPM,
            drift_max_ppm: CO2_DRIFT_MAX_PPM,
            resample_every_frames: CO2_DRIFT_RESAMPLE_FRAMES,
            chase: CO2_DRIFT_CHASE,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AlarmThresholds {
    /// Mapped dB must be strictly above this to raise the sound alarm.
    pub loud_db: f32,
    /// ppm at or above this raises the CO2 alarm.
    pub co2_ppm: f32,
}

impl Default for AlarmThresholds {
    fn default() -> Self {
        Self {
            loud_db: LOUD_ALARM_DB,
            co2_ppm: CO2_ALARM_PPM,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ToneParams {
    pub frequency_hz: f32,
    pub on_level: f32,
    pub ramp_up_sec: f64,
    pub ramp_down_sec: f64,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self {
            frequency_hz: TONE_FREQUENCY_HZ,
            on_level: TONE_ON_LEVEL,
            ramp_up_sec: TONE_RAMP_UP_SEC,
            ramp_down_sec: TONE_RAMP_DOWN_SEC,
        }
    }
}

/// Everything the dashboard needs to be tuned, grouped for construction.
#[derive(Clone, Debug, Default)]
pub struct DashboardParams {
    pub smoothing: SmoothingParams,
    pub co2: Co2Params,
    pub alarms: AlarmThresholds,
    pub tone: ToneParams,
}
