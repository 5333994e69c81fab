// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Sequential batch provisioning over an ordered email list.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::client::SupabaseAdminClient;
use crate::name::{derive_display_name, normalize_email};
use crate::types::{BatchReport, ProvisionRequest, ProvisionResult};

/// Pacing options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
	/// Fixed pause between consecutive entries. Unconditional; there is no
	/// response-driven backoff.
	pub delay: Duration,
}

impl Default for BatchOptions {
	fn default() -> Self {
		Self {
			delay: Duration::from_millis(500),
		}
	}
}

/// Provisions every entry of `raw_emails` in input order.
///
/// Each raw entry is normalized, a display name is derived from it, and the
/// two-step provisioning sequence runs against `client`. A failed entry is
/// recorded and the run continues to the end of the input; per-entry errors
/// never propagate out of the loop. The delay is skipped after the last
/// entry.
///
/// `on_result` is called after each entry with the 1-based index, the total
/// count, and the recorded outcome.
pub async fn run_batch(
	client: &SupabaseAdminClient,
	raw_emails: &[String],
	password: &str,
	options: &BatchOptions,
	mut on_result: impl FnMut(usize, usize, &ProvisionResult),
) -> BatchReport {
	let total = raw_emails.len();
	let mut report = BatchReport::new();

	for (index, raw) in raw_emails.iter().enumerate() {
		let email = normalize_email(raw).to_string();
		let request = ProvisionRequest {
			display_name: derive_display_name(&email),
			password: password.to_string(),
			email,
		};

		debug!(index = index + 1, total, email = %request.email, "processing batch entry");

		let result = match client.provision(&request).await {
			Ok(user_id) => ProvisionResult::success(request.email, user_id),
			Err(e) => {
				warn!(email = %request.email, error = %e, "provisioning failed");
				ProvisionResult::failed(request.email)
			}
		};

		on_result(index + 1, total, &result);
		report.push(result);

		if index + 1 < total {
			sleep(options.delay).await;
		}
	}

	report
}
