use chrono::TimeDelta;
use tracing::error;

pub const SEC_IN_MS: i64 = 1000;

pub fn delta_from_millis(ms: i64) -> TimeDelta {
    TimeDelta::try_milliseconds(ms).unwrap_or_else(|| {
        error!("time: {}ms is out of range, using zero delta", ms);
        TimeDelta::zero()
    })
}
