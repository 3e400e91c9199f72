/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// ```rust
/// use pg_escape::{sql_value, Value};
///
/// let value = sql_value!({ "ids": [1, 2, 3], "active": true, "note": null });
/// assert!(value.is_object());
/// assert_eq!(sql_value!(null), Value::Null);
/// ```
#[macro_export]
macro_rules! sql_value {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::sql_value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::ValueMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ValueMap::new();
        $(
            object.insert($key.to_string(), $crate::sql_value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Anything with a `From` conversion
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Formats a query template, converting each argument with `Value::from`.
///
/// Expands to a call to [`format`](crate::format) and returns its `Result`.
///
/// ```rust
/// use pg_escape::sql_format;
///
/// let sql = sql_format!("SELECT %I FROM t WHERE id = %L", "name", 7).unwrap();
/// assert_eq!(sql, "SELECT name FROM t WHERE id = 7");
/// ```
#[macro_export]
macro_rules! sql_format {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format($template, &[$($crate::Value::from($arg)),*])
    };
}
