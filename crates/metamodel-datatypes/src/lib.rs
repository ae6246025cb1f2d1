// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Metamodel datatypes: conversion between values and locale-aware text.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use metamodel_datatypes::{BooleanDatatype, Datatype};
//! use metamodel_format_strings::{FormatStrings, InMemoryFormatStringsRegistry, Locale};
//!
//! let registry = InMemoryFormatStringsRegistry::new();
//! let es: Locale = "es".parse().unwrap();
//! registry.register(&es, FormatStrings::new("sí", "no"));
//!
//! let datatype = BooleanDatatype::new(Arc::new(registry));
//! assert_eq!(datatype.format_with_locale(Some(&true), &es), "sí");
//! assert_eq!(datatype.parse_with_locale(Some("NO"), &es), Ok(Some(false)));
//! assert_eq!(datatype.parse(Some("   ")), Ok(None));
//! assert!(datatype.parse(Some("yes")).is_err());
//! ```

mod boolean;
mod datatype;
mod error;

pub use boolean::BooleanDatatype;
pub use datatype::Datatype;
pub use error::{ParseError, ParseResult};
