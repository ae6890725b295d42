// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod topics;

use crate::presentation::http::error::{HttpError, HttpResult};
use chrono::{DateTime, Utc};

pub(crate) const DEFAULT_LIMIT: i64 = 10;
pub(crate) const DEFAULT_PAGE: i64 = 1;

/// Absent or non-positive values fall back to the default.
pub(crate) fn positive_or(value: Option<i64>, default: i64) -> i64 {
    value.filter(|v| *v > 0).unwrap_or(default)
}

/// Blank input means "no bound".
pub(crate) fn parse_timestamp(name: &str, raw: Option<&str>) -> HttpResult<Option<DateTime<Utc>>> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| {
            DateTime::parse_from_rfc3339(value)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|err| HttpError::bad_request(format!("invalid {name}: {err}")))
        })
        .transpose()
}
