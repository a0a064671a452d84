// Tuning constants for the air-quality dashboard.

// Microphone smoothing
pub const SMOOTHING_FACTOR: f32 = 0.15; // lower = smoother, slower response
pub const LEVEL_EPSILON: f32 = 1e-6; // keeps log10 finite on silence

// dBFS -> displayed dB mapping
pub const DBFS_MIN: f32 = -60.0;
pub const DBFS_MAX: f32 = 0.0;
pub const DISPLAY_DB_MIN: f32 = 30.0;
pub const DISPLAY_DB_MAX: f32 = 100.0;

// CO2 simulation
pub const CO2_START_PPM: f32 = 600.0;
pub const CO2_TARGET_PPM: f32 = 1300.0;
pub const CO2_RISE_SECONDS: f64 = 165.0;
pub const CO2_DRIFT_SPREAD_PPM: f32 = 150.0; // +/- around the target
pub const CO2_DRIFT_MIN_PPM: f32 = 1100.0;
pub const CO2_DRIFT_MAX_PPM: f32 = 1400.0;
pub const CO2_DRIFT_RESAMPLE_FRAMES: u64 = 240;
pub const CO2_DRIFT_CHASE: f32 = 0.01; // fraction of the gap closed per frame

// Face mood boundaries
pub const CO2_STALE_PPM: f32 = 800.0;

// Alarm thresholds
pub const LOUD_ALARM_DB: f32 = 85.0; // strictly above
pub const CO2_ALARM_PPM: f32 = 1200.0; // at or above

// Alarm tone
pub const TONE_FREQUENCY_HZ: f32 = 880.0;
pub const TONE_ON_LEVEL: f32 = 0.18;
pub const TONE_RAMP_UP_SEC: f64 = 0.05;
pub const TONE_RAMP_DOWN_SEC: f64 = 0.10;

// Layout proportions
pub const TOP_AREA_FRACTION: f64 = 0.7;
pub const BANNER_TOP_FRACTION: f64 = 0.02; // of top height
pub const BANNER_HEIGHT_FRACTION: f64 = 0.16; // of top height
pub const MUTE_BUTTON_WIDTH_FRACTION: f64 = 0.44; // of half width
pub const MUTE_BUTTON_HEIGHT_FRACTION: f64 = 0.55; // of banner height
pub const MUTE_BUTTON_LEFT_INSET: f64 = 0.04; // of half width
pub const MUTE_BUTTON_RIGHT_INSET: f64 = 0.52; // of half width
pub const MUTE_BUTTON_GAP_FRACTION: f64 = 0.02; // of top height, below banner

// Gauge sweep in degrees
pub const GAUGE_ANGLE_MIN_DEG: f64 = -180.0;
pub const GAUGE_ANGLE_MAX_DEG: f64 = 0.0;

// A mouse press this soon after a touch press is the browser's emulated copy
pub const TOUCH_MOUSE_DEDUP_MS: f64 = 500.0;
