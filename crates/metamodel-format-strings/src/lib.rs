// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-locale format strings for metamodel datatypes.
//!
//! This crate provides the lookup side of locale-aware formatting:
//!
//! - [`Locale`]: a normalized language tag used as the lookup key
//! - [`FormatStrings`]: the true/false vocabulary registered for a locale
//! - [`FormatStringsRegistry`]: the lookup contract datatypes depend on
//! - [`InMemoryFormatStringsRegistry`]: a thread-safe implementation
//! - [`load_config`]: layered configuration (defaults, TOML file, environment)
//!
//! # Example
//!
//! ```
//! use metamodel_format_strings::{
//!     FormatStrings, FormatStringsRegistry, InMemoryFormatStringsRegistry, Locale,
//! };
//!
//! let registry = InMemoryFormatStringsRegistry::new();
//! let es: Locale = "es".parse().unwrap();
//! registry.register(&es, FormatStrings::new("sí", "no"));
//!
//! let strings = registry.format_strings(&es).unwrap();
//! assert_eq!(strings.true_string(), "sí");
//! ```

pub mod config;
pub mod error;
mod format_strings;
mod locale;
mod registry;

pub use config::{
	load_config, load_config_with_file, load_from_sources, ConfigSource, DefaultsSource,
	EnvSource, FormatStringsConfig, FormatStringsConfigLayer, Precedence, TomlSource,
};
pub use error::ConfigError;
pub use format_strings::FormatStrings;
pub use locale::{Locale, LocaleError};
pub use registry::{FormatStringsRegistry, InMemoryFormatStringsRegistry};
