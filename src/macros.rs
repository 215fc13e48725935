//! The [`value!`](crate::value!) macro, literal syntax for building
//! [`Value`](crate::Value) trees inline.

/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Object keys may be string or integer literals; integer keys keep their
/// numeric kind, so the configured radix applies to them at render time.
/// Any other expression is converted through serde, with a failed
/// conversion degrading to [`Value::Null`](crate::Value::Null).
///
/// # Examples
///
/// ```rust
/// use serde_stringify::{stringify, value};
///
/// let report = value!({
///     "passed": 12,
///     "failed": 0,
///     "slowest": ["fsync", "compact"],
///     "notes": null
/// });
/// assert_eq!(
///     stringify(&report),
///     "{failed: 0, notes: <nil>, passed: 12, slowest: [fsync, compact]}"
/// );
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([ $($element:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($element)),*])
    };

    ({ $($key:literal : $entry:tt),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut map = $crate::Map::new();
        $(
            map.insert($key, $crate::value!($entry));
        )*
        $crate::Value::Object(map)
    }};

    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}

#[cfg(test)]
mod tests {
    use crate::{stringify, stringify_with_options, Key, Options, Value};

    #[test]
    fn test_keyword_literals() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
    }

    #[test]
    fn test_expression_fallback() {
        let retries = 2 + 1;
        assert_eq!(value!(retries).as_i64(), Some(3));
        assert_eq!(value!("warn").as_str(), Some("warn"));

        let missing: Option<u16> = None;
        assert_eq!(value!(missing), Value::Null);
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(stringify(&value!([])), "[]");
        assert_eq!(stringify(&value!({})), "{}");
    }

    #[test]
    fn test_array_keeps_order() {
        let levels = value!(["debug", "info", "error"]);
        assert_eq!(stringify(&levels), "[debug, info, error]");
    }

    #[test]
    fn test_object_keys_by_kind() {
        let ports = value!({8080: "http", 8443: "https", "admin": true});
        let map = ports.as_object().unwrap();
        assert_eq!(
            map.get(&Key::Int(8080)).and_then(Value::as_str),
            Some("http")
        );
        assert_eq!(map.get("admin").and_then(Value::as_bool), Some(true));
    }

    #[test]
    fn test_integer_keys_follow_the_radix() {
        let mask = value!({255: "all"});
        assert_eq!(
            stringify_with_options(&mask, Options::new().with_base(16)),
            "{ff: all}"
        );
    }

    #[test]
    fn test_nested_trees() {
        let job = value!({
            "name": "nightly-backup",
            "steps": [{"cmd": "dump"}, {"cmd": "upload", "retry": 2}],
            "timeout": null,
        });
        assert_eq!(
            stringify(&job),
            "{name: nightly-backup, steps: [{cmd: dump}, {cmd: upload, retry: 2}], timeout: <nil>}"
        );
    }
}
