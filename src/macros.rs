/// Builds a [`FlatMap`](crate::FlatMap) from a JSON-like literal.
///
/// Keys must be string literals; values are any expressions convertible into a
/// [`FlatValue`](crate::FlatValue). Entries keep their written order.
///
/// # Examples
///
/// ```rust
/// use serde_flatjson::{flatjson, FlatValue};
///
/// let user_id = 7;
/// let map = flatjson!({
///     "name": "Alice",
///     "id": user_id,
///     "delta": -3,
/// });
///
/// assert_eq!(map.get("id"), Some(&FlatValue::Integer(7)));
/// assert_eq!(map.keys().next().map(String::as_str), Some("name"));
/// ```
#[macro_export]
macro_rules! flatjson {
    ({}) => {
        $crate::FlatMap::new()
    };

    ({ $($key:literal : $value:expr),* $(,)? }) => {{
        let mut map = $crate::FlatMap::new();
        $(
            map.insert(($key).to_string(), $crate::FlatValue::from($value));
        )*
        map
    }};
}
