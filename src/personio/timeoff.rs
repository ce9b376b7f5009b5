use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

use crate::personio::employee::Employee;
use crate::personio::parse::null_as_default;
use crate::util::time_intersection;

/// A single time-off period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeOff {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// First day of the period (inclusive).
    pub start_date: DateTime<FixedOffset>,
    /// Last day of the period (inclusive).
    pub end_date: DateTime<FixedOffset>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub days_count: f64,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub half_day_start: bool,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub half_day_end: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_off_type: TimeOffType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub employee: Employee,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_by: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certificate: Certificate,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl TimeOff {
    /// Returns `true` if this period and `[start, end]` share at least one instant.
    pub fn overlaps<Tz: TimeZone>(&self, start: &DateTime<Tz>, end: &DateTime<Tz>) -> bool {
        let own_start = self.start_date.with_timezone(&start.timezone());
        let own_end = self.end_date.with_timezone(&end.timezone());
        time_intersection(&own_start, &own_end, start, end) >= chrono::TimeDelta::zero()
    }
}

/// Kind of absence, e.g. "Paid vacation".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeOffType {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: TimeOffTypeAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeOffTypeAttributes {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
}

/// Sick-note certificate state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

/// Typed wrapper upstream puts around each time-off (`{type, attributes}`).
#[derive(Debug, Deserialize)]
pub(crate) struct TimeOffContainer {
    pub attributes: TimeOff,
}

/// Accepts `true`/`false` as well as `1`/`0`; upstream sends both. `null` reads as `false`.
fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(false),
        Some(Flag::Bool(value)) => Ok(value),
        Some(Flag::Int(1)) => Ok(true),
        Some(Flag::Int(0)) => Ok(false),
        Some(Flag::Int(other)) => Err(serde::de::Error::custom(format!(
            "boolean unmarshal error: invalid input {other}"
        ))),
    }
}
