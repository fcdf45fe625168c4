//! Serde helpers for tool parameters.

use serde::{Deserialize, Deserializer};

/// Deserialize `Option<Option<T>>` so an update can tell "leave as is" from "clear".
///
/// - Missing field → `None` (requires `#[serde(default)]` on the field)
/// - Field is `null` → `Some(None)`, sent upstream as `null`
/// - Field has value → `Some(Some(value))`
///
/// Usage:
/// ```ignore
/// #[derive(Deserialize)]
/// struct UpdateThing {
///     #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
///     company_id: Option<Option<String>>,
/// }
/// ```
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

/// Deserialize an optional integer the API may send as a number, a float or a string.
///
/// Currency micros are `BigFloat` upstream, which arrive in any of these forms.
pub fn lenient_i64<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    match Option::<Value>::deserialize(de)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid integer: {n}"))),
        Some(Value::String(s)) => s
            .parse::<f64>()
            .map(|f| Some(f.round() as i64))
            .map_err(|_| D::Error::custom(format!("invalid integer: {s}"))),
        Some(other) => Err(D::Error::custom(format!("invalid integer: {other}"))),
    }
}
