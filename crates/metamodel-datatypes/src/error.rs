// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Result type alias for datatype parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors produced when text cannot be converted to a datatype value.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
	/// The input matched neither token of the active vocabulary.
	#[error("Can't parse '{input}'")]
	UnrecognizedToken { input: String, position: usize },
}

impl ParseError {
	pub(crate) fn unrecognized(input: &str) -> Self {
		ParseError::UnrecognizedToken {
			input: input.to_string(),
			position: 0,
		}
	}

	/// The original, unmodified input text.
	pub fn input(&self) -> &str {
		match self {
			ParseError::UnrecognizedToken { input, .. } => input,
		}
	}

	/// Offset of the failure within the input. Whole-token comparisons have
	/// no meaningful offset, so this is always 0.
	pub fn position(&self) -> usize {
		match self {
			ParseError::UnrecognizedToken { position, .. } => *position,
		}
	}
}
