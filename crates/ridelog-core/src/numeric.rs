//! The numeric token predicate shared by every input grammar.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{RideError, Result};

static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?$").expect("numeric pattern is valid"));

/// Whether `token` is a signed or unsigned integer or decimal literal.
///
/// A decimal point must be followed by at least one digit, so `"3."` and
/// `".5"` are rejected.
pub fn is_numeric(token: &str) -> bool {
    NUMERIC.is_match(token)
}

/// Parse a numeric token that carries no fractional part.
pub fn parse_whole(token: &str) -> Result<i64> {
    if !is_numeric(token) || token.contains('.') {
        return Err(RideError::format(token, "a whole number"));
    }
    token
        .parse::<i64>()
        .map_err(|_| RideError::format(token, "a whole number"))
}
