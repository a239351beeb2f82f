use std::fmt::Display;

use derive_more::Deref;
use derive_more::DerefMut;
use serde::Deserialize;
use serde::Serialize;

/// Markup that has already been assembled into its final textual form.
///
/// Host rendering pipelines that escape plain strings on output can splice a
/// `SafeString` through without re-escaping it. Every tag-emitting operation
/// on [`TagFormatter`](crate::TagFormatter) returns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref, DerefMut, Serialize, Deserialize)]
pub struct SafeString(String);

impl SafeString {
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// View the markup as a plain `&str`.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Unwrap into the underlying `String`, discarding the safety marker.
	pub fn into_inner(self) -> String {
		self.0
	}
}

impl Display for SafeString {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<String> for SafeString {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for SafeString {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl From<SafeString> for String {
	fn from(value: SafeString) -> Self {
		value.0
	}
}

impl AsRef<str> for SafeString {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl PartialEq<str> for SafeString {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for SafeString {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

impl PartialEq<SafeString> for &str {
	fn eq(&self, other: &SafeString) -> bool {
		*self == other.0
	}
}
