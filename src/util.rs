use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};

/// Maximum instant the Personio API represents (`9999-12-31T23:59:59.999Z`).
///
/// Used as the upper bound of an open-ended date range.
pub fn date_max() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(9999, 12, 31)
        .and_then(|date| date.and_hms_milli_opt(23, 59, 59, 999))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Returns the length of the overlap of two time ranges.
///
/// If the ranges are disjoint the result is negative and its magnitude is the
/// distance between them. Touching ranges yield zero.
pub fn time_intersection<Tz: TimeZone>(
    start1: &DateTime<Tz>,
    end1: &DateTime<Tz>,
    start2: &DateTime<Tz>,
    end2: &DateTime<Tz>,
) -> TimeDelta {
    let end_min = if end2 < end1 { end2 } else { end1 };
    let start_max = if start2 > start1 { start2 } else { start1 };

    end_min.clone().signed_duration_since(start_max.clone())
}
