// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use thiserror::Error;

use crate::locale::LocaleError;

/// Errors raised while loading format strings configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read config file {path}: {source}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse config file {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("invalid locale '{locale}': {source}")]
	InvalidLocale {
		locale: String,
		#[source]
		source: LocaleError,
	},

	#[error("invalid value for {key}: {message}")]
	InvalidValue { key: String, message: String },
}
