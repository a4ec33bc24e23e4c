use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Deserializes a JSON array element-by-element, dropping elements
/// that do not match the expected shape.
///
/// Strictness stays per-object: a malformed element fails on its own
/// and is skipped with a warning, the surviving elements keep their
/// source order.
pub(super) fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping malformed list element: {e}");
                None
            }
        })
        .collect())
}
