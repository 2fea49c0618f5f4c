//! Host <-> script argument marshaling.
//!
//! Constructor arguments are validated and defaulted independently: a
//! missing or wrong-typed positional argument falls back to its documented
//! default instead of failing the construction call. Strings transcode as
//! UTF-8; numbers truncate toward zero. Domain clamps (percentages, floors)
//! are applied by the host types at construction time, not here.

use rquickjs::{function::Opt, Value};

/// Numeric view of a script value: integers and floats, nothing coerced.
pub(crate) fn number(value: &Value<'_>) -> Option<f64> {
    value
        .as_int()
        .map(f64::from)
        .or_else(|| value.as_float())
}

pub(crate) fn string_arg(value: &Opt<Value<'_>>, default: &str) -> String {
    value
        .0
        .as_ref()
        .and_then(|v| v.as_string())
        .and_then(|s| s.to_string().ok())
        .unwrap_or_else(|| default.to_owned())
}

pub(crate) fn int_arg(value: &Opt<Value<'_>>, default: i32) -> i32 {
    value
        .0
        .as_ref()
        .and_then(number)
        .map(|n| n as i32)
        .unwrap_or(default)
}
