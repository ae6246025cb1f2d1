// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

/// The true/false vocabulary registered for a locale.
///
/// Parsers lower-case their input before comparing it with these tokens, so
/// tokens meant to be matched case-insensitively should be stored lower-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatStrings {
	true_string: String,
	false_string: String,
}

impl FormatStrings {
	pub fn new(true_string: impl Into<String>, false_string: impl Into<String>) -> Self {
		Self {
			true_string: true_string.into(),
			false_string: false_string.into(),
		}
	}

	pub fn true_string(&self) -> &str {
		&self.true_string
	}

	pub fn false_string(&self) -> &str {
		&self.false_string
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_accessors() {
		let strings = FormatStrings::new("sí", "no");
		assert_eq!(strings.true_string(), "sí");
		assert_eq!(strings.false_string(), "no");
	}

	#[test]
	fn test_deserialize_from_toml_table() {
		let strings: FormatStrings = toml::from_str(
			r#"
			true_string = "ja"
			false_string = "nein"
			"#,
		)
		.unwrap();
		assert_eq!(strings, FormatStrings::new("ja", "nein"));
	}
}
