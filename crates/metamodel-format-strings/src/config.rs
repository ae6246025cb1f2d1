// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Layered configuration for the format strings registry.
//!
//! Sources are merged in precedence order (highest wins):
//! 1. Environment variables (`METAMODEL_FORMAT_STRINGS_*`)
//! 2. Config file (`/etc/metamodel/format-strings.toml`, or the path in
//!    `METAMODEL_FORMAT_STRINGS_FILE`)
//! 3. Built-in defaults
//!
//! ```toml
//! use_language_only = false
//!
//! [locales.es]
//! true_string = "sí"
//! false_string = "no"
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::error::ConfigError;
use crate::format_strings::FormatStrings;
use crate::locale::Locale;
use crate::registry::InMemoryFormatStringsRegistry;

pub const ENV_USE_LANGUAGE_ONLY: &str = "METAMODEL_FORMAT_STRINGS_USE_LANGUAGE_ONLY";
pub const ENV_CONFIG_FILE: &str = "METAMODEL_FORMAT_STRINGS_FILE";
pub const DEFAULT_CONFIG_PATH: &str = "/etc/metamodel/format-strings.toml";

/// Partially specified configuration produced by a single source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormatStringsConfigLayer {
	pub use_language_only: Option<bool>,
	pub locales: Option<BTreeMap<String, FormatStrings>>,
}

impl FormatStringsConfigLayer {
	/// Overlay `other` on top of `self`. Locale tables are merged per entry.
	pub fn merge(&mut self, other: Self) {
		if other.use_language_only.is_some() {
			self.use_language_only = other.use_language_only;
		}
		if let Some(locales) = other.locales {
			self.locales.get_or_insert_with(BTreeMap::new).extend(locales);
		}
	}

	pub fn finalize(self) -> FormatStringsConfig {
		FormatStringsConfig {
			use_language_only: self.use_language_only.unwrap_or(false),
			locales: self.locales.unwrap_or_default(),
		}
	}
}

/// Fully resolved configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormatStringsConfig {
	pub use_language_only: bool,
	pub locales: BTreeMap<String, FormatStrings>,
}

impl FormatStringsConfig {
	/// Build a registry holding every configured vocabulary.
	pub fn build_registry(&self) -> Result<InMemoryFormatStringsRegistry, ConfigError> {
		let registry = InMemoryFormatStringsRegistry::with_language_only(self.use_language_only);
		for (tag, strings) in &self.locales {
			let locale = Locale::parse(tag).map_err(|e| ConfigError::InvalidLocale {
				locale: tag.clone(),
				source: e,
			})?;
			validate_format_strings(tag, strings)?;
			registry.register(&locale, strings.clone());
		}

		info!(
			locales = registry.len(),
			use_language_only = self.use_language_only,
			"format strings registry built"
		);
		Ok(registry)
	}
}

fn validate_format_strings(tag: &str, strings: &FormatStrings) -> Result<(), ConfigError> {
	if strings.true_string().trim().is_empty() || strings.false_string().trim().is_empty() {
		return Err(ConfigError::InvalidValue {
			key: format!("locales.{tag}"),
			message: "true_string and false_string must not be blank".to_string(),
		});
	}
	// Parsers lower-case their input, so a token with upper-case characters
	// could never be parsed back.
	for token in [strings.true_string(), strings.false_string()] {
		if token.to_lowercase() != token {
			return Err(ConfigError::InvalidValue {
				key: format!("locales.{tag}"),
				message: format!("token '{token}' must be lower-case"),
			});
		}
	}
	if strings.true_string().to_lowercase() == strings.false_string().to_lowercase() {
		return Err(ConfigError::InvalidValue {
			key: format!("locales.{tag}"),
			message: format!(
				"true_string and false_string are both '{}'",
				strings.true_string()
			),
		});
	}
	Ok(())
}

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<FormatStringsConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<FormatStringsConfigLayer, ConfigError> {
		Ok(FormatStringsConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(DEFAULT_CONFIG_PATH)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<FormatStringsConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(FormatStringsConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: FormatStringsConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
pub struct EnvSource;

impl EnvSource {
	fn load_with(
		&self,
		lookup: impl Fn(&str) -> Option<String>,
	) -> Result<FormatStringsConfigLayer, ConfigError> {
		let use_language_only = match lookup(ENV_USE_LANGUAGE_ONLY).filter(|v| !v.is_empty()) {
			Some(v) => Some(parse_env_bool(ENV_USE_LANGUAGE_ONLY, &v)?),
			None => None,
		};

		Ok(FormatStringsConfigLayer {
			use_language_only,
			locales: None,
		})
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<FormatStringsConfigLayer, ConfigError> {
		debug!("loading environment variables");
		self.load_with(env_var)
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn parse_env_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
	if value.eq_ignore_ascii_case("true") || value == "1" {
		Ok(true)
	} else if value.eq_ignore_ascii_case("false") || value == "0" {
		Ok(false)
	} else {
		Err(ConfigError::InvalidValue {
			key: key.to_string(),
			message: format!("invalid bool value '{value}'"),
		})
	}
}

/// Load configuration from all sources with standard precedence.
pub fn load_config() -> Result<FormatStringsConfig, ConfigError> {
	let file = match env_var(ENV_CONFIG_FILE) {
		Some(path) => TomlSource::new(path),
		None => TomlSource::system(),
	};
	load_with_file_source(file)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<PathBuf>,
) -> Result<FormatStringsConfig, ConfigError> {
	load_with_file_source(TomlSource::new(config_path))
}

fn load_with_file_source(file: TomlSource) -> Result<FormatStringsConfig, ConfigError> {
	let mut sources: Vec<Box<dyn ConfigSource>> =
		vec![Box::new(DefaultsSource), Box::new(file), Box::new(EnvSource)];
	load_from_sources(&mut sources)
}

/// Merge `sources` in precedence order and finalize the result.
pub fn load_from_sources(
	sources: &mut [Box<dyn ConfigSource>],
) -> Result<FormatStringsConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = FormatStringsConfigLayer::default();
	for source in sources.iter() {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	Ok(merged.finalize())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	struct FixedSource(Precedence, FormatStringsConfigLayer);

	impl ConfigSource for FixedSource {
		fn name(&self) -> &'static str {
			"fixed"
		}

		fn precedence(&self) -> Precedence {
			self.0
		}

		fn load(&self) -> Result<FormatStringsConfigLayer, ConfigError> {
			Ok(self.1.clone())
		}
	}

	fn locales(entries: &[(&str, &str, &str)]) -> BTreeMap<String, FormatStrings> {
		entries
			.iter()
			.map(|(tag, t, f)| (tag.to_string(), FormatStrings::new(*t, *f)))
			.collect()
	}

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Environment > Precedence::ConfigFile);
		assert!(Precedence::ConfigFile > Precedence::Defaults);
	}

	#[test]
	fn test_defaults_finalize() {
		let config = FormatStringsConfigLayer::default().finalize();
		assert!(!config.use_language_only);
		assert!(config.locales.is_empty());
	}

	#[test]
	fn test_merge_overwrites_flag_and_extends_locales() {
		let mut base = FormatStringsConfigLayer {
			use_language_only: Some(false),
			locales: Some(locales(&[("es", "sí", "no"), ("de", "wahr", "falsch")])),
		};
		base.merge(FormatStringsConfigLayer {
			use_language_only: Some(true),
			locales: Some(locales(&[("de", "ja", "nein")])),
		});
		base.merge(FormatStringsConfigLayer::default());

		let config = base.finalize();
		assert!(config.use_language_only);
		assert_eq!(config.locales.len(), 2);
		assert_eq!(config.locales["de"], FormatStrings::new("ja", "nein"));
		assert_eq!(config.locales["es"], FormatStrings::new("sí", "no"));
	}

	#[test]
	fn test_sources_applied_in_precedence_order() {
		let mut sources: Vec<Box<dyn ConfigSource>> = vec![
			Box::new(FixedSource(
				Precedence::Environment,
				FormatStringsConfigLayer {
					use_language_only: Some(true),
					locales: None,
				},
			)),
			Box::new(FixedSource(
				Precedence::Defaults,
				FormatStringsConfigLayer {
					use_language_only: Some(false),
					locales: Some(locales(&[("fr", "vrai", "faux")])),
				},
			)),
		];
		let config = load_from_sources(&mut sources).unwrap();
		assert!(config.use_language_only);
		assert_eq!(config.locales.len(), 1);
	}

	#[test]
	fn test_toml_source_missing_file_returns_empty() {
		let layer = TomlSource::new("/nonexistent/format-strings.toml")
			.load()
			.unwrap();
		assert_eq!(layer, FormatStringsConfigLayer::default());
	}

	#[test]
	fn test_toml_source_reads_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(
			file,
			r#"
use_language_only = true

[locales.es]
true_string = "sí"
false_string = "no"

[locales.pt-BR]
true_string = "sim"
false_string = "não"
"#
		)
		.unwrap();

		let layer = TomlSource::new(file.path()).load().unwrap();
		assert_eq!(layer.use_language_only, Some(true));
		let locales = layer.locales.unwrap();
		assert_eq!(locales["pt-BR"], FormatStrings::new("sim", "não"));
	}

	#[test]
	fn test_toml_source_parse_error() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "use_language_only = \"maybe\"").unwrap();

		let err = TomlSource::new(file.path()).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
	}

	#[test]
	fn test_env_source_parses_flag() {
		let layer = EnvSource
			.load_with(|name| (name == ENV_USE_LANGUAGE_ONLY).then(|| "TRUE".to_string()))
			.unwrap();
		assert_eq!(layer.use_language_only, Some(true));

		let layer = EnvSource
			.load_with(|name| (name == ENV_USE_LANGUAGE_ONLY).then(|| "0".to_string()))
			.unwrap();
		assert_eq!(layer.use_language_only, Some(false));

		let layer = EnvSource.load_with(|_| None).unwrap();
		assert_eq!(layer.use_language_only, None);
	}

	#[test]
	fn test_env_source_rejects_invalid_flag() {
		let err = EnvSource
			.load_with(|_| Some("sometimes".to_string()))
			.unwrap_err();
		assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == ENV_USE_LANGUAGE_ONLY));
	}

	#[test]
	fn test_build_registry() {
		use crate::registry::FormatStringsRegistry;

		let config = FormatStringsConfig {
			use_language_only: true,
			locales: locales(&[("es", "sí", "no"), ("pt_BR", "sim", "não")]),
		};
		let registry = config.build_registry().unwrap();
		assert!(registry.uses_language_only());
		assert_eq!(registry.len(), 2);
		let pt = registry
			.format_strings(&Locale::parse("pt-PT").unwrap())
			.unwrap();
		assert_eq!(pt.true_string(), "sim");
	}

	#[test]
	fn test_build_registry_rejects_invalid_locale() {
		let config = FormatStringsConfig {
			use_language_only: false,
			locales: locales(&[("x", "yes", "no")]),
		};
		let err = config.build_registry().unwrap_err();
		assert!(matches!(err, ConfigError::InvalidLocale { locale, .. } if locale == "x"));
	}

	#[test]
	fn test_build_registry_rejects_ambiguous_tokens() {
		let config = FormatStringsConfig {
			use_language_only: false,
			locales: locales(&[("es", "si", "si")]),
		};
		assert!(matches!(
			config.build_registry(),
			Err(ConfigError::InvalidValue { .. })
		));

		let config = FormatStringsConfig {
			use_language_only: false,
			locales: locales(&[("es", " ", "no")]),
		};
		assert!(matches!(
			config.build_registry(),
			Err(ConfigError::InvalidValue { .. })
		));
	}

	#[test]
	fn test_build_registry_rejects_non_lowercase_tokens() {
		let config = FormatStringsConfig {
			use_language_only: false,
			locales: locales(&[("de", "Ja", "Nein")]),
		};
		let err = config.build_registry().unwrap_err();
		assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == "locales.de"));

		let config = FormatStringsConfig {
			use_language_only: false,
			locales: locales(&[("es", "si", "SI")]),
		};
		assert!(matches!(
			config.build_registry(),
			Err(ConfigError::InvalidValue { .. })
		));

		let config = FormatStringsConfig {
			use_language_only: false,
			locales: locales(&[("es", "sí", "no"), ("de", "ja", "nein")]),
		};
		assert_eq!(config.build_registry().unwrap().len(), 2);
	}

	#[test]
	fn test_system_source_path() {
		assert_eq!(TomlSource::system().path, PathBuf::from(DEFAULT_CONFIG_PATH));
	}

	#[test]
	fn test_config_serde_roundtrip() {
		let config = FormatStringsConfig {
			use_language_only: true,
			locales: locales(&[("de", "wahr", "falsch")]),
		};
		let toml_str = toml::to_string(&config).unwrap();
		let parsed: FormatStringsConfig = toml::from_str(&toml_str).unwrap();
		assert_eq!(config, parsed);
	}
}
