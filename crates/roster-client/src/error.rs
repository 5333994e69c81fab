// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for account and profile provisioning.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while provisioning accounts and profiles.
#[derive(Debug, Error)]
pub enum ProvisionError {
	/// Network-level error during HTTP communication.
	#[error("network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Auth admin endpoint returned a non-success status.
	#[error("identity creation failed ({status}): {body}")]
	Identity { status: u16, body: String },

	/// Profile endpoint returned a non-success status. The identity created
	/// in the preceding step is left in place.
	#[error("profile creation failed ({status}): {body}")]
	Profile { status: u16, body: String },

	/// Response body could not be decoded.
	#[error("invalid response: {0}")]
	InvalidResponse(String),

	/// Report could not be serialized.
	#[error("failed to serialize report: {0}")]
	ReportSerialize(#[from] serde_json::Error),

	/// Report file could not be written.
	#[error("failed to write report to {path}: {source}")]
	ReportWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias for provisioning operations.
pub type Result<T> = std::result::Result<T, ProvisionError>;
