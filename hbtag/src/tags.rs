use tracing::trace;

use crate::Params;
use crate::PositionalPolicy;
use crate::SafeString;

/// Serializes calls into Handlebars tag markup.
///
/// The formatter is a pure string producer: it does not parse, validate, or
/// evaluate anything, and tag names pass through untouched. The only state
/// it carries is the [`PositionalPolicy`] applied when rendering parameter
/// lists, so the value is `Copy` and free to construct.
///
/// ```
/// use hbtag::Params;
/// use hbtag::TagFormatter;
///
/// let hb = TagFormatter::new();
///
/// assert_eq!(hb.expression("hello"), "{{hello}}");
/// assert_eq!(
/// 	hb.helper("myHelper", &Params::new().value("param1").value("param2")),
/// 	"{{myHelper param1 param2}}",
/// );
/// assert_eq!(
/// 	hb.block("myBlockHelper", &Params::from("param"), || "<p>Hello</p>".to_string()),
/// 	"{{#myBlockHelper param}}<p>Hello</p>{{/myBlockHelper}}",
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagFormatter {
	policy: PositionalPolicy,
}

impl TagFormatter {
	pub fn new() -> Self {
		Self::default()
	}

	/// A formatter that serializes positional parameter values under the
	/// given policy.
	pub fn with_policy(policy: PositionalPolicy) -> Self {
		Self { policy }
	}

	pub fn policy(&self) -> PositionalPolicy {
		self.policy
	}

	/// An expression tag: `{{name}}`.
	pub fn expression(&self, name: impl AsRef<str>) -> SafeString {
		let name = name.as_ref();
		SafeString::from(format!("{{{{{name}}}}}"))
	}

	/// A helper call tag: `{{name param1 param2 key="value"}}`.
	///
	/// The space after the name is always emitted, so a helper whose
	/// parameter list serializes to absent comes out as `{{name }}`. Callers
	/// who want a bare `{{name}}` use [`expression`](Self::expression) or the
	/// [`emit`](Self::emit) dispatch.
	pub fn helper(&self, name: impl AsRef<str>, params: &Params) -> SafeString {
		let name = name.as_ref();
		let params = params.format(self.policy).unwrap_or_default();
		SafeString::from(format!("{{{{{name} {params}}}}}"))
	}

	/// A triple-brace expression tag: `{{{value}}}`.
	pub fn unescaped(&self, value: impl AsRef<str>) -> SafeString {
		let value = value.as_ref();
		SafeString::from(format!("{{{{{{{value}}}}}}}"))
	}

	/// A partial reference tag: `{{> name param1 param2 }}`.
	///
	/// Both the space after the name and the trailing space before the
	/// closing braces are always emitted, so a partial with no parameters
	/// comes out as `{{> name  }}`.
	pub fn partial(&self, name: impl AsRef<str>, params: &Params) -> SafeString {
		let name = name.as_ref();
		let params = params.format(self.policy).unwrap_or_default();
		SafeString::from(format!("{{{{> {name} {params} }}}}"))
	}

	/// A block helper tag wrapping captured content:
	/// `{{#name params}}content{{/name}}`.
	///
	/// The content producer runs synchronously, exactly once, before this
	/// call returns; its output is embedded verbatim between the opening and
	/// closing tags.
	pub fn block(
		&self,
		name: impl AsRef<str>,
		params: &Params,
		content: impl FnOnce() -> String,
	) -> SafeString {
		let name = name.as_ref();
		let params = params.format(self.policy).unwrap_or_default();
		trace!(name, "capturing block content");
		let content = content();
		SafeString::from(format!(
			"{{{{#{name} {params}}}}}{content}{{{{/{name}}}}}"
		))
	}

	/// An `each` block over the given item expression:
	/// `{{#each item}}content{{/each}}`.
	pub fn each(&self, item: impl AsRef<str>, content: impl FnOnce() -> String) -> SafeString {
		self.block("each", &Params::from(item.as_ref()), content)
	}

	/// An `if` block over the given condition expression:
	/// `{{#if condition}}content{{/if}}`.
	pub fn if_block(
		&self,
		condition: impl AsRef<str>,
		content: impl FnOnce() -> String,
	) -> SafeString {
		self.block("if", &Params::from(condition.as_ref()), content)
	}

	/// The `{{else}}` expression tag.
	pub fn else_tag(&self) -> SafeString {
		self.expression("else")
	}

	/// Dispatch on the shape of the call: a content producer emits a block
	/// tag, non-empty parameters emit a helper tag, and a bare name emits an
	/// expression tag.
	pub fn emit<F>(&self, name: impl AsRef<str>, params: &Params, content: Option<F>) -> SafeString
	where
		F: FnOnce() -> String,
	{
		match content {
			Some(content) => self.block(name, params, content),
			None if params.is_empty() => self.expression(name),
			None => self.helper(name, params),
		}
	}

	/// The no-content form of [`emit`](Self::emit): an expression tag when
	/// `params` is empty, a helper tag otherwise.
	pub fn tag(&self, name: impl AsRef<str>, params: &Params) -> SafeString {
		self.emit(name, params, None::<fn() -> String>)
	}
}
