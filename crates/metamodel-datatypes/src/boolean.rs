// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Boolean datatype with locale-specific true/false tokens.

use std::fmt;
use std::sync::Arc;

use metamodel_format_strings::{FormatStringsRegistry, Locale};
use tracing::trace;

use crate::datatype::{non_blank, Datatype};
use crate::error::{ParseError, ParseResult};

const TRUE_STRING: &str = "true";
const FALSE_STRING: &str = "false";

/// Formats and parses `bool` values.
///
/// Without a locale the vocabulary is always `"true"`/`"false"`. With a
/// locale, the tokens registered for it in the [`FormatStringsRegistry`] are
/// used, falling back to `"true"`/`"false"` when none are registered.
#[derive(Clone)]
pub struct BooleanDatatype {
	registry: Arc<dyn FormatStringsRegistry>,
}

impl BooleanDatatype {
	pub const ID: &'static str = "boolean";

	pub fn new(registry: Arc<dyn FormatStringsRegistry>) -> Self {
		Self { registry }
	}
}

fn format_with(value: bool, true_string: &str, false_string: &str) -> String {
	if value {
		true_string.to_string()
	} else {
		false_string.to_string()
	}
}

fn parse_with(text: &str, true_string: &str, false_string: &str) -> ParseResult<bool> {
	let lower = text.to_lowercase();
	if lower == true_string {
		Ok(true)
	} else if lower == false_string {
		Ok(false)
	} else {
		Err(ParseError::unrecognized(text))
	}
}

impl Datatype for BooleanDatatype {
	type Value = bool;

	fn id(&self) -> &'static str {
		Self::ID
	}

	fn format(&self, value: Option<&bool>) -> String {
		match value {
			Some(&value) => format_with(value, TRUE_STRING, FALSE_STRING),
			None => String::new(),
		}
	}

	fn format_with_locale(&self, value: Option<&bool>, locale: &Locale) -> String {
		let Some(&value) = value else {
			return String::new();
		};

		match self.registry.format_strings(locale) {
			Some(strings) => format_with(value, strings.true_string(), strings.false_string()),
			None => {
				trace!(%locale, "no boolean vocabulary for locale, using defaults");
				self.format(Some(&value))
			}
		}
	}

	fn parse(&self, text: Option<&str>) -> ParseResult<Option<bool>> {
		match non_blank(text) {
			Some(text) => parse_with(text, TRUE_STRING, FALSE_STRING).map(Some),
			None => Ok(None),
		}
	}

	fn parse_with_locale(&self, text: Option<&str>, locale: &Locale) -> ParseResult<Option<bool>> {
		let Some(text) = non_blank(text) else {
			return Ok(None);
		};

		match self.registry.format_strings(locale) {
			Some(strings) => {
				parse_with(text, strings.true_string(), strings.false_string()).map(Some)
			}
			None => {
				trace!(%locale, "no boolean vocabulary for locale, using defaults");
				self.parse(Some(text))
			}
		}
	}
}

impl fmt::Display for BooleanDatatype {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("BooleanDatatype")
	}
}

impl fmt::Debug for BooleanDatatype {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BooleanDatatype").finish_non_exhaustive()
	}
}
