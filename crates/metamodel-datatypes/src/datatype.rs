// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use metamodel_format_strings::Locale;

use crate::error::ParseResult;

/// Conversion between a value type and its textual representation.
///
/// `None` is the absent value on both sides: formatting it yields an empty
/// string and parsing blank text yields it.
pub trait Datatype: Send + Sync {
	type Value;

	/// Stable identifier of the datatype, e.g. `"boolean"`.
	fn id(&self) -> &'static str;

	/// Format using the locale-independent representation.
	fn format(&self, value: Option<&Self::Value>) -> String;

	/// Format using the conventions registered for `locale`.
	fn format_with_locale(&self, value: Option<&Self::Value>, locale: &Locale) -> String;

	/// Parse the locale-independent representation.
	fn parse(&self, text: Option<&str>) -> ParseResult<Option<Self::Value>>;

	/// Parse using the conventions registered for `locale`.
	fn parse_with_locale(&self, text: Option<&str>, locale: &Locale)
		-> ParseResult<Option<Self::Value>>;
}

/// `text` unless it is absent, empty, or only whitespace.
pub(crate) fn non_blank(text: Option<&str>) -> Option<&str> {
	text.filter(|t| !t.trim().is_empty())
}
