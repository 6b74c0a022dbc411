// Parameter parsing for the façade. Malformed values are reported as
// `InvalidParameter` and recovered by the caller into an empty result.

use tracing::warn;

use crate::error::QueryError;

/// The whole trimmed value must be an integer: `"1941abc"` and `"2.5"` are rejected,
/// not truncated to a numeric prefix.
pub(crate) fn parse_integer(name: &'static str, raw: &str) -> Result<i64, QueryError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| QueryError::InvalidParameter {
            name,
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

/// Accepts `true` / `false` in any ASCII case.
pub(crate) fn parse_status(name: &'static str, raw: &str) -> Result<bool, QueryError> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(QueryError::InvalidParameter {
            name,
            value: raw.to_string(),
            reason: "expected 'true' or 'false'".to_string(),
        })
    }
}

/// Log a malformed parameter and turn it into "no result".
pub(crate) fn recover<T>(operation: &'static str, parsed: Result<T, QueryError>) -> Option<T> {
    match parsed {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(operation, error = %e, "Malformed parameter, returning no results");
            None
        }
    }
}
