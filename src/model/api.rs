use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Deserializes a field that distinguishes "absent" from explicit `null`.
///
/// Pair with `#[serde(default)]`: an absent field stays `None`, a `null` becomes
/// `Some(None)` and a value becomes `Some(Some(value))`.
pub fn deserialize_double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
