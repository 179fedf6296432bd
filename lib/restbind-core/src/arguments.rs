//! Positional call arguments.
//!
//! A bound method receives its arguments as an ordered list of JSON values.
//! Bindings refer to them by index, see [`crate::ParameterBinding`].

use serde::Serialize;
use serde_json::Value;

use crate::Result;

/// Ordered positional arguments of one method call.
///
/// Use the [`args!`](crate::args) macro to build it from any `Serialize` values:
///
/// ```
/// use restbind_core::args;
///
/// let args = args![42, "alice"].expect("serializable");
/// assert_eq!(args.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args(Vec<Value>);

impl Args {
    /// Empty argument list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a serializable argument.
    pub fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.0.push(to_value(value)?);
        Ok(())
    }

    /// Append a serializable argument, builder style.
    pub fn with<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self> {
        self.push(value)?;
        Ok(self)
    }

    /// Append an already converted value.
    pub fn push_value(&mut self, value: Value) {
        self.0.push(value);
    }

    /// Argument at `index`, `None` when the call supplied fewer arguments.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No argument at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the arguments in call order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }

    /// Collect fallible conversions, stopping at the first error.
    pub fn try_from_values(values: impl IntoIterator<Item = Result<Value>>) -> Result<Self> {
        values.into_iter().collect()
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for Args {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Build an [`Args`] list from serializable expressions.
///
/// Evaluates to `restbind_core::Result<Args>`; the first argument that fails
/// to serialize is reported as a serialization error.
#[macro_export]
macro_rules! args {
    () => {
        ::core::result::Result::<$crate::Args, $crate::Error>::Ok($crate::Args::new())
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Args::try_from_values([$($crate::to_value(&$arg)),+])
    };
}

/// Convert a serializable value into a JSON value.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(Into::into)
}

/// Render a value the way it is spliced into a URL, query or header.
///
/// Strings are used verbatim, anything else as its compact JSON text.
/// Integral floats render without a fraction, so `2.0` gives `2`.
#[must_use]
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
                if f == 0.0 {
                    "0".to_string()
                } else {
                    format!("{f:.0}")
                }
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// `null`, `false`, zero and the empty string.
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
