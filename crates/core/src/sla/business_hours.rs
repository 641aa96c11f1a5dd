//! Business-hours duration arithmetic
//!
//! Computes how many working milliseconds fall between two instants under
//! a daily Monday-Friday window. This is the single primitive every SLA
//! figure in the engine is built on.
//!
//! The function is pure: it never reads the wall clock, so callers supply
//! "now" explicitly and any number of concurrent readers may recompute
//! without coordination. Timestamps are epoch milliseconds interpreted as
//! wall-clock local time.

use chrono::{DateTime, Datelike, NaiveDateTime, NaiveTime, Weekday};
use helpdesk_domain::BusinessWindow;

/// Working milliseconds in `[start_ms, end_ms]` under the given window.
///
/// Returns 0 when `start_ms` is absent/zero or the range is inverted or
/// empty. Saturdays and Sundays never contribute, regardless of overlap.
/// Cost is proportional to the number of calendar days spanned, so
/// multi-week ranges stay cheap.
pub fn working_ms(start_ms: i64, end_ms: i64, window: &BusinessWindow) -> i64 {
    if start_ms <= 0 || end_ms <= start_ms {
        return 0;
    }
    let (Some(start), Some(end)) = (to_naive(start_ms), to_naive(end_ms)) else {
        return 0;
    };
    let Some(open) = NaiveTime::from_hms_opt(window.start_hour, window.start_minute, 0) else {
        return 0;
    };
    let Some(close) = NaiveTime::from_hms_opt(window.end_hour, window.end_minute, 0) else {
        return 0;
    };

    let mut total = 0_i64;
    let mut day = start.date();
    let last = end.date();
    while day <= last {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            let day_open = to_ms(day.and_time(open));
            let day_close = to_ms(day.and_time(close));
            let overlap = end_ms.min(day_close) - start_ms.max(day_open);
            if overlap > 0 {
                total += overlap;
            }
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    total
}

fn to_naive(ms: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.naive_utc())
}

fn to_ms(dt: NaiveDateTime) -> i64 {
    dt.and_utc().timestamp_millis()
}
