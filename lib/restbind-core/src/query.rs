//! Query parameter serialization.
//!
//! Each query binding points at an argument holding an object. Its entries
//! become query parameters:
//!
//! | value              | result                                     |
//! |--------------------|--------------------------------------------|
//! | `null`             | skipped                                    |
//! | array              | one appended entry per element             |
//! | object             | JSON text, set as a single entry           |
//! | scalar             | rendered, set as a single entry            |
//!
//! Array elements that are objects or arrays are JSON-encoded, scalar
//! elements are rendered as-is.
//!
//! Non-array values are *set*, not appended: when two query objects carry the
//! same key with scalar values, only the last one survives. Arrays always
//! append.

use serde_json::Value;

use crate::arguments::{is_falsy, render};
use crate::{Args, Error, ParameterBinding, Result};

/// Ordered multimap of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// No parameter.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a pair, keeping earlier pairs with the same key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Set `key` to a single value.
    ///
    /// The first existing pair is updated in place and the other pairs with
    /// that key are dropped; an absent key is appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter().position(|(existing, _)| *existing == key) {
            Some(first) => {
                let mut index = 0;
                self.pairs.retain(|(existing, _)| {
                    let keep = index == first || *existing != key;
                    index += 1;
                    keep
                });
                if let Some(pair) = self.pairs.get_mut(first) {
                    pair.1 = value;
                }
            }
            None => self.pairs.push((key, value)),
        }
    }

    /// First value of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Every value of `key`, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// No pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Form-urlencoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> Result<String> {
        serde_urlencoded::to_string(&self.pairs).map_err(Into::into)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Serialize the query bindings of one call.
///
/// A binding whose argument is absent or falsy is skipped, so query objects
/// are optional. A truthy argument that is not an object is a binding error.
pub fn serialize(bindings: &[ParameterBinding], args: &Args) -> Result<QueryParams> {
    let mut query = QueryParams::new();

    for binding in bindings {
        let Some(argument) = args.get(binding.index).filter(|value| !is_falsy(value)) else {
            continue;
        };
        let Value::Object(entries) = argument else {
            return Err(Error::binding(format!(
                "query argument {} must be an object, got `{argument}`",
                binding.index
            )));
        };

        for (key, value) in entries {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        query.append(key.clone(), encode_element(item));
                    }
                }
                Value::Object(_) => query.set(key.clone(), value.to_string()),
                scalar => query.set(key.clone(), render(scalar)),
            }
        }
    }

    Ok(query)
}

fn encode_element(item: &Value) -> String {
    match item {
        Value::Object(_) | Value::Array(_) => item.to_string(),
        scalar => render(scalar),
    }
}
