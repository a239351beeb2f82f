use serde::Deserialize;
use serde::Serialize;

use crate::Value;

/// How positional values are selected when serializing a parameter list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PositionalPolicy {
	/// Emit only text values from the positional list. Numbers and booleans
	/// passed positionally are dropped without error.
	#[default]
	TextOnly,
	/// Emit every positional value, rendering numbers and booleans bare.
	RenderAll,
}

/// An ordered parameter list for a tag: positional values followed by named
/// `key=value` pairs.
///
/// Named pairs keep their insertion order. Text values in named pairs are
/// wrapped in double quotes during serialization; numbers and booleans are
/// emitted bare.
///
/// ```
/// use hbtag::Params;
/// use hbtag::PositionalPolicy;
///
/// let params = Params::new()
/// 	.value("up")
/// 	.value("down")
/// 	.named("strange", "charm");
///
/// assert_eq!(
/// 	params.format(PositionalPolicy::default()).as_deref(),
/// 	Some(r#"up down strange="charm""#),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Params {
	positional: Vec<Value>,
	named: Vec<(String, Value)>,
}

impl Params {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a positional value.
	#[must_use]
	pub fn value(mut self, value: impl Into<Value>) -> Self {
		self.positional.push(value.into());
		self
	}

	/// Append a named `key=value` pair.
	#[must_use]
	pub fn named(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.named.push((key.into(), value.into()));
		self
	}

	pub fn is_empty(&self) -> bool {
		self.positional.is_empty() && self.named.is_empty()
	}

	/// Serialize the parameter list for splicing into a tag.
	///
	/// Returns `None` when there is nothing to emit. Absent is distinct from
	/// an empty string: the tag assembly in [`TagFormatter`] decides its own
	/// spacing around an absent parameter list, so this never manufactures
	/// separators on its own.
	///
	/// The positional part and the named part are each joined by single
	/// spaces, then joined to each other by a single space when both are
	/// present.
	///
	/// [`TagFormatter`]: crate::TagFormatter
	pub fn format(&self, policy: PositionalPolicy) -> Option<String> {
		if self.is_empty() {
			return None;
		}

		let values = format_positional(&self.positional, policy);
		let named = format_named(&self.named);

		match (values, named) {
			(Some(values), Some(named)) => Some(format!("{values} {named}")),
			(values @ Some(_), None) => values,
			(None, named @ Some(_)) => named,
			(None, None) => None,
		}
	}
}

impl From<&str> for Params {
	fn from(value: &str) -> Self {
		Self::new().value(value)
	}
}

impl From<String> for Params {
	fn from(value: String) -> Self {
		Self::new().value(value)
	}
}

impl From<Value> for Params {
	fn from(value: Value) -> Self {
		Self::new().value(value)
	}
}

impl FromIterator<Value> for Params {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		Self {
			positional: iter.into_iter().collect(),
			named: Vec::new(),
		}
	}
}

fn format_positional(values: &[Value], policy: PositionalPolicy) -> Option<String> {
	let rendered: Vec<String> = values
		.iter()
		.filter(|value| policy == PositionalPolicy::RenderAll || value.is_text())
		.map(ToString::to_string)
		.collect();

	if rendered.is_empty() {
		None
	} else {
		Some(rendered.join(" "))
	}
}

/// Text values are double-quoted, everything else is rendered bare. Embedded
/// quotes in text values pass through unescaped.
fn format_named(pairs: &[(String, Value)]) -> Option<String> {
	if pairs.is_empty() {
		return None;
	}

	let rendered: Vec<String> = pairs
		.iter()
		.map(|(key, value)| match value {
			Value::String(text) => format!("{key}=\"{text}\""),
			other => format!("{key}={other}"),
		})
		.collect();

	Some(rendered.join(" "))
}

/// Build a [`Params`] list from positional values and trailing named pairs.
///
/// Positional values come first, separated by commas. A semicolon introduces
/// the named pairs.
///
/// ```
/// use hbtag::Params;
/// use hbtag::params;
///
/// let params = params!["up", "down"; strange = "charm", foo = 1];
/// assert_eq!(
/// 	params,
/// 	Params::new()
/// 		.value("up")
/// 		.value("down")
/// 		.named("strange", "charm")
/// 		.named("foo", 1),
/// );
/// ```
#[macro_export]
macro_rules! params {
	() => { $crate::Params::new() };
	($($value:expr),+ $(,)?) => {
		$crate::Params::new()$(.value($value))+
	};
	($($value:expr),* ; $($key:ident = $named:expr),+ $(,)?) => {
		$crate::Params::new()$(.value($value))*$(.named(stringify!($key), $named))+
	};
}
