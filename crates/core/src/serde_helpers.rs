//! Lenient number decoding for request bodies.
//!
//! Browser clients often send ids taken from JSON object keys or `<select>`
//! values, which arrive as strings (`"3"`). Both `3` and `"3"` are accepted.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    Text(String),
}

fn resolve<T, E>(raw: NumberOrString<T>) -> Result<T, E>
where
    T: FromStr,
    E: serde::de::Error,
{
    match raw {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("expected a number, got '{text}'"))),
    }
}

pub fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
{
    resolve(NumberOrString::<T>::deserialize(deserializer)?)
}

/// Optional variant of [`number_or_string`]; use with `#[serde(default)]`.
pub fn opt_number_or_string<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
{
    Option::<NumberOrString<T>>::deserialize(deserializer)?.map(resolve).transpose()
}

/// Optional list whose elements may each be a number or a numeric string;
/// use with `#[serde(default)]`.
pub fn opt_vec_number_or_string<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
{
    Option::<Vec<NumberOrString<T>>>::deserialize(deserializer)?
        .map(|items| items.into_iter().map(resolve).collect())
        .transpose()
}
