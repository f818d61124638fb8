use chrono::{DateTime, Local, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    pub const INTRADAY_TIME_FORMAT: &str = "%H:%M";
    pub const SNAPSHOT_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Millisecond epoch to a UTC instant. `None` when out of chrono's range.
pub fn epoch_ms_to_datetime(epoch_ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(epoch_ms)
}

pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    // Used for display purposes
    match epoch_ms_to_datetime(epoch_ms) {
        Some(dt) => dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

/// Formats a plot x coordinate (seconds since epoch, UTC) with `format`.
pub fn epoch_secs_f64_to_label(epoch_secs: f64, format: &str) -> String {
    if !epoch_secs.is_finite() {
        return String::new();
    }
    match epoch_ms_to_datetime((epoch_secs * 1000.0).round() as i64) {
        Some(dt) => dt.format(format).to_string(),
        None => String::new(),
    }
}

/// Local wall-clock time for the "Prices as of" banner
pub fn local_now_stamp() -> String {
    Local::now()
        .format(TimeUtils::SNAPSHOT_STAMP_FORMAT)
        .to_string()
}
