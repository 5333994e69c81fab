// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Supabase connection settings.
//!
//! Credentials come from flags, the environment, or a `.env` file; they are
//! never compiled into the binary.

use thiserror::Error;

/// Validated Supabase connection settings.
#[derive(Debug, Clone)]
pub struct Config {
	pub base_url: String,
	pub service_key: String,
}

/// Errors in the supplied connection settings.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("invalid Supabase URL '{0}': expected an http(s) URL")]
	InvalidUrl(String),

	#[error("service role key must not be empty")]
	EmptyServiceKey,
}

impl Config {
	/// Validates the raw settings. A trailing slash on the base URL is
	/// stripped so endpoint paths can be appended directly.
	pub fn new(
		base_url: impl Into<String>,
		service_key: impl Into<String>,
	) -> Result<Self, ConfigError> {
		let base_url = base_url.into();
		let service_key = service_key.into();

		if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
			return Err(ConfigError::InvalidUrl(base_url));
		}
		if service_key.trim().is_empty() {
			return Err(ConfigError::EmptyServiceKey);
		}

		Ok(Self {
			base_url: base_url.trim_end_matches('/').to_string(),
			service_key,
		})
	}
}
