// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale identifiers used as registry lookup keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing a locale tag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocaleError {
	#[error("locale tag is empty")]
	Empty,

	#[error("invalid language subtag '{0}'")]
	InvalidLanguage(String),

	#[error("invalid subtag '{subtag}' in locale '{tag}'")]
	InvalidSubtag { tag: String, subtag: String },
}

/// A language tag such as `es`, `pt-BR` or `zh-Hant-TW`.
///
/// Tags are normalized on construction: `_` separators become `-`, the
/// language subtag is lower-cased, two-letter region subtags are upper-cased
/// and four-letter script subtags are title-cased. Two locales compare equal
/// when their normalized tags are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
	tag: String,
}

impl Locale {
	/// Parse and normalize a locale tag.
	pub fn parse(tag: &str) -> Result<Self, LocaleError> {
		let tag = tag.trim();
		if tag.is_empty() {
			return Err(LocaleError::Empty);
		}

		let mut subtags = tag.split(['-', '_']);
		let language = subtags.next().unwrap_or_default();
		if !(2..=8).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
			return Err(LocaleError::InvalidLanguage(language.to_string()));
		}

		let mut normalized = language.to_ascii_lowercase();
		for subtag in subtags {
			if subtag.is_empty()
				|| subtag.len() > 8
				|| !subtag.chars().all(|c| c.is_ascii_alphanumeric())
			{
				return Err(LocaleError::InvalidSubtag {
					tag: tag.to_string(),
					subtag: subtag.to_string(),
				});
			}
			normalized.push('-');
			normalized.push_str(&normalize_subtag(subtag));
		}

		Ok(Self { tag: normalized })
	}

	/// The normalized tag, e.g. `pt-BR`.
	pub fn as_str(&self) -> &str {
		&self.tag
	}

	/// The language subtag, e.g. `pt` for `pt-BR`.
	pub fn language(&self) -> &str {
		self.tag.split('-').next().unwrap_or(&self.tag)
	}

	/// Whether this locale carries anything beyond the language subtag.
	pub fn has_qualifiers(&self) -> bool {
		self.tag.contains('-')
	}

	/// The locale reduced to its language subtag.
	pub fn language_only(&self) -> Self {
		Self {
			tag: self.language().to_string(),
		}
	}
}

fn normalize_subtag(subtag: &str) -> String {
	match subtag.len() {
		2 if subtag.chars().all(|c| c.is_ascii_alphabetic()) => subtag.to_ascii_uppercase(),
		4 if subtag.chars().all(|c| c.is_ascii_alphabetic()) => {
			let lower = subtag.to_ascii_lowercase();
			let mut chars = lower.chars();
			match chars.next() {
				Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
				None => lower,
			}
		}
		_ => subtag.to_ascii_lowercase(),
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.tag)
	}
}

impl FromStr for Locale {
	type Err = LocaleError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl TryFrom<String> for Locale {
	type Error = LocaleError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(&value)
	}
}

impl From<Locale> for String {
	fn from(locale: Locale) -> Self {
		locale.tag
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_parse_language_only() {
		let locale = Locale::parse("es").unwrap();
		assert_eq!(locale.as_str(), "es");
		assert_eq!(locale.language(), "es");
		assert!(!locale.has_qualifiers());
	}

	#[test]
	fn test_parse_normalizes_case_and_separator() {
		assert_eq!(Locale::parse("PT_br").unwrap().as_str(), "pt-BR");
		assert_eq!(Locale::parse("zh-hant-tw").unwrap().as_str(), "zh-Hant-TW");
		assert_eq!(Locale::parse(" en-US ").unwrap().as_str(), "en-US");
	}

	#[test]
	fn test_language_only() {
		let locale = Locale::parse("pt-BR").unwrap();
		assert!(locale.has_qualifiers());
		assert_eq!(locale.language_only(), Locale::parse("pt").unwrap());
	}

	#[test]
	fn test_empty_is_rejected() {
		assert_eq!(Locale::parse(""), Err(LocaleError::Empty));
		assert_eq!(Locale::parse("   "), Err(LocaleError::Empty));
	}

	#[test]
	fn test_invalid_tags_are_rejected() {
		assert!(matches!(
			Locale::parse("e"),
			Err(LocaleError::InvalidLanguage(_))
		));
		assert!(matches!(
			Locale::parse("12"),
			Err(LocaleError::InvalidLanguage(_))
		));
		assert!(matches!(
			Locale::parse("en--US"),
			Err(LocaleError::InvalidSubtag { .. })
		));
		assert!(matches!(
			Locale::parse("en-U$"),
			Err(LocaleError::InvalidSubtag { .. })
		));
	}

	#[test]
	fn test_serde_uses_tag_string() {
		let locale = Locale::parse("de-AT").unwrap();
		let json = serde_json::to_string(&locale).unwrap();
		assert_eq!(json, "\"de-AT\"");
		let parsed: Locale = serde_json::from_str("\"de_at\"").unwrap();
		assert_eq!(parsed, locale);
		assert!(serde_json::from_str::<Locale>("\"\"").is_err());
	}

	proptest! {
		/// Normalization is idempotent.
		#[test]
		fn parse_is_idempotent(lang in "[a-zA-Z]{2,3}", region in "[a-zA-Z]{2}") {
			let tag = format!("{}_{}", lang, region);
			let once = Locale::parse(&tag).unwrap();
			let twice = Locale::parse(once.as_str()).unwrap();
			prop_assert_eq!(once, twice);
		}

		/// The language subtag is always lower-case.
		#[test]
		fn language_is_lowercase(lang in "[a-zA-Z]{2,8}") {
			let locale = Locale::parse(&lang).unwrap();
			prop_assert_eq!(locale.language(), lang.to_ascii_lowercase());
		}
	}
}
