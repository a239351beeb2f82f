use std::fmt::Display;

use float_cmp::approx_eq;
use serde::Deserialize;
use serde::Serialize;

/// A single tag parameter value.
///
/// Values render bare via [`Display`] (`hello`, `42`, `3.14`, `true`).
/// Double-quoting of text values in named `key=value` pairs is handled by
/// [`Params`](crate::Params) during serialization, not here, since the same
/// text value appears unquoted when used positionally.
///
/// Three kinds are supported:
///
/// - **String**: bare text, e.g. a path expression like `point` or
///   `items.length`
/// - **Number**: integer or floating-point, e.g. `42` or `3.14`
/// - **Boolean**: `true` or `false`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Value {
	/// A text value, e.g. `point` or `charm`.
	String(String),
	/// A numeric value (integer or float), e.g. `42` or `3.14`.
	Number(OrderedFloat),
	/// A boolean value: `true` or `false`.
	Boolean(bool),
}

impl Value {
	/// Whether this is the text kind of value. Positional serialization under
	/// [`PositionalPolicy::TextOnly`](crate::PositionalPolicy::TextOnly) keeps
	/// only text values.
	pub fn is_text(&self) -> bool {
		matches!(self, Self::String(_))
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::String(value) => write!(f, "{value}"),
			Self::Number(value) => write!(f, "{value}"),
			Self::Boolean(value) => write!(f, "{value}"),
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Number(OrderedFloat(f64::from(value)))
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Number(OrderedFloat(value as f64))
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Self::Number(OrderedFloat(f64::from(value)))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Number(OrderedFloat(value))
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Boolean(value)
	}
}

/// A float wrapper that implements `PartialEq` via approximate comparison,
/// allowing `Value` to derive `PartialEq` cleanly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderedFloat(pub f64);

impl PartialEq for OrderedFloat {
	fn eq(&self, other: &Self) -> bool {
		approx_eq!(f64, self.0, other.0)
	}
}

impl Display for OrderedFloat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}
