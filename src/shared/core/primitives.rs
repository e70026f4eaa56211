use chrono::Utc;

/// Milliseconds since the unix epoch, the unit every due date is stored in.
pub type EpochMillis = i64;

pub fn now_millis() -> EpochMillis {
    Utc::now().timestamp_millis()
}
