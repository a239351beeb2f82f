//! `hbtag` generates Handlebars tag markup from Rust call sites:
//! expressions, helper calls, unescaped expressions, partial references, and
//! block helpers whose inner content is captured from a closure.
//!
//! It is a formatting utility, not a template engine. Nothing here parses,
//! compiles, or evaluates templates; the crate only serializes calls into the
//! correct textual tag syntax, with the parameter-formatting and quoting
//! rules the syntax expects. Escaping of surrounding output is the host
//! renderer's concern, which is why every operation returns a [`SafeString`]
//! the host can splice through its own escaping untouched.
//!
//! ## Modules
//!
//! - [`TagFormatter`] assembles the tags: `{{name}}`, `{{name params}}`,
//!   `{{{value}}}`, `{{> name params }}`, and
//!   `{{#name params}}...{{/name}}`.
//! - [`Params`] and [`Value`] model the parameter list: positional values
//!   followed by named `key=value` pairs, built either with chained calls or
//!   the [`params!`] macro.
//! - [`PositionalPolicy`] decides whether non-text positional values are
//!   dropped or rendered.
//! - [`SafeString`] marks emitted markup as final output.
//!
//! ## Quick start
//!
//! ```rust
//! use hbtag::TagFormatter;
//! use hbtag::params;
//!
//! let hb = TagFormatter::new();
//!
//! assert_eq!(hb.expression("hello"), "{{hello}}");
//! assert_eq!(
//! 	hb.helper("transaction", &params!["amount"; currency = "EUR"]),
//! 	r#"{{transaction amount currency="EUR"}}"#,
//! );
//!
//! let list = hb.each("points", || format!("<li>{}</li>", hb.expression("label")));
//! assert_eq!(list, "{{#each points}}<li>{{label}}</li>{{/each}}");
//! ```

pub use params::*;
pub use safe_string::*;
pub use tags::*;
pub use value::*;

mod params;
mod safe_string;
mod tags;
mod value;

#[cfg(test)]
mod __fixtures;
