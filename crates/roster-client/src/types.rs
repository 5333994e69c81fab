// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Provisioning records and the batch report.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ProvisionError, Result};

/// A single provisioning request with an already-normalized email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionRequest {
	pub email: String,
	pub password: String,
	pub display_name: String,
}

/// Outcome of one provisioning attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProvisionStatus {
	Success,
	Failed,
}

/// Per-entry outcome record, immutable once created.
///
/// `user_id` is present only for successful entries and is omitted from the
/// serialized record otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionResult {
	pub email: String,
	pub status: ProvisionStatus,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_id: Option<String>,
}

impl ProvisionResult {
	/// Creates a successful result carrying the identity's user id.
	pub fn success(email: impl Into<String>, user_id: impl Into<String>) -> Self {
		Self {
			email: email.into(),
			status: ProvisionStatus::Success,
			user_id: Some(user_id.into()),
		}
	}

	/// Creates a failed result with no user id.
	pub fn failed(email: impl Into<String>) -> Self {
		Self {
			email: email.into(),
			status: ProvisionStatus::Failed,
			user_id: None,
		}
	}
}

/// Ordered sequence of per-entry results for one batch run.
#[derive(Debug, Default, Clone)]
pub struct BatchReport {
	results: Vec<ProvisionResult>,
}

impl BatchReport {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a result in processing order.
	pub fn push(&mut self, result: ProvisionResult) {
		self.results.push(result);
	}

	pub fn results(&self) -> &[ProvisionResult] {
		&self.results
	}

	pub fn total(&self) -> usize {
		self.results.len()
	}

	pub fn successful(&self) -> usize {
		self.results
			.iter()
			.filter(|r| r.status == ProvisionStatus::Success)
			.count()
	}

	pub fn failed(&self) -> usize {
		self.results
			.iter()
			.filter(|r| r.status == ProvisionStatus::Failed)
			.count()
	}

	/// Writes the ordered result records to `path` as pretty-printed JSON.
	pub fn write_to_file(&self, path: &Path) -> Result<()> {
		let json = serde_json::to_vec_pretty(&self.results)?;
		std::fs::write(path, json).map_err(|source| ProvisionError::ReportWrite {
			path: path.to_path_buf(),
			source,
		})
	}
}
