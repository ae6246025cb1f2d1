// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale to vocabulary lookup.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace};

use crate::format_strings::FormatStrings;
use crate::locale::Locale;

/// Source of per-locale [`FormatStrings`].
///
/// Implementations must be safe to query concurrently, and a lookup must not
/// change what later lookups return.
pub trait FormatStringsRegistry: Send + Sync {
	/// The vocabulary registered for `locale`, if any.
	fn format_strings(&self, locale: &Locale) -> Option<Arc<FormatStrings>>;
}

impl<T: FormatStringsRegistry + ?Sized> FormatStringsRegistry for Arc<T> {
	fn format_strings(&self, locale: &Locale) -> Option<Arc<FormatStrings>> {
		(**self).format_strings(locale)
	}
}

/// Thread-safe registry backed by a hash map.
///
/// With `use_language_only` set, both registration and lookup key on the
/// language subtag, so `pt-BR` and `pt-PT` share the entry for `pt`.
#[derive(Debug, Default)]
pub struct InMemoryFormatStringsRegistry {
	entries: RwLock<HashMap<Locale, Arc<FormatStrings>>>,
	use_language_only: bool,
}

impl InMemoryFormatStringsRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_language_only(use_language_only: bool) -> Self {
		Self {
			entries: RwLock::default(),
			use_language_only,
		}
	}

	pub fn uses_language_only(&self) -> bool {
		self.use_language_only
	}

	/// Register `strings` for `locale`, returning the entry it replaced.
	pub fn register(
		&self,
		locale: &Locale,
		strings: FormatStrings,
	) -> Option<Arc<FormatStrings>> {
		let key = self.key(locale);
		debug!(
			locale = %key,
			true_string = strings.true_string(),
			false_string = strings.false_string(),
			"registering format strings"
		);
		self.write().insert(key, Arc::new(strings))
	}

	/// Remove the entry for `locale`, returning it if present.
	pub fn unregister(&self, locale: &Locale) -> Option<Arc<FormatStrings>> {
		let key = self.key(locale);
		debug!(locale = %key, "unregistering format strings");
		self.write().remove(&key)
	}

	/// Registered locales in sorted order.
	pub fn locales(&self) -> Vec<Locale> {
		let mut locales: Vec<_> = self.read().keys().cloned().collect();
		locales.sort();
		locales
	}

	pub fn len(&self) -> usize {
		self.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.read().is_empty()
	}

	fn key(&self, locale: &Locale) -> Locale {
		if self.use_language_only && locale.has_qualifiers() {
			locale.language_only()
		} else {
			locale.clone()
		}
	}

	// The map is only ever mutated by single insert/remove calls, so a
	// poisoned lock still guards a consistent map.
	fn read(&self) -> RwLockReadGuard<'_, HashMap<Locale, Arc<FormatStrings>>> {
		self.entries.read().unwrap_or_else(|e| e.into_inner())
	}

	fn write(&self) -> RwLockWriteGuard<'_, HashMap<Locale, Arc<FormatStrings>>> {
		self.entries.write().unwrap_or_else(|e| e.into_inner())
	}
}

impl FormatStringsRegistry for InMemoryFormatStringsRegistry {
	fn format_strings(&self, locale: &Locale) -> Option<Arc<FormatStrings>> {
		let key = self.key(locale);
		let found = self.read().get(&key).cloned();
		if found.is_none() {
			trace!(locale = %key, "no format strings registered");
		}
		found
	}
}
