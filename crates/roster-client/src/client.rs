// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Supabase admin API client.
//!
//! Two endpoints are involved per provisioned user: the auth admin endpoint
//! creates the identity, then the PostgREST endpoint inserts the matching
//! profile row. A profile failure leaves the identity in place; there is no
//! compensating deletion.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{ProvisionError, Result};
use crate::types::ProvisionRequest;

const IDENTITY_PATH: &str = "/auth/v1/admin/users";
const PROFILE_PATH: &str = "/rest/v1/profiles";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Placeholder profile fields; real values are filled in by the user later.
const DEFAULT_YEAR_ID: u32 = 1;
const DEFAULT_PHONE: &str = "123456789";
const DEFAULT_NATIONAL_ID: &str = "123456789";
const DEFAULT_AVATAR_IMAGE: &str = "https://example.com/avatar.jpg";
const DEFAULT_ABOUT: &str = "Student about text";
const DEFAULT_SPECIALIZATION: &str = "Student specialization";
const DEFAULT_ROLE: &str = "student role";

/// Client for the Supabase auth admin and PostgREST endpoints.
///
/// Requires the project's service role key, not the anon key.
#[derive(Debug, Clone)]
pub struct SupabaseAdminClient {
	http_client: Client,
	base_url: String,
	service_key: String,
}

#[derive(Debug, Serialize)]
struct CreateIdentityRequest<'a> {
	email: &'a str,
	password: &'a str,
	email_confirm: bool,
}

#[derive(Debug, Deserialize)]
struct CreateIdentityResponse {
	id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateProfileRequest<'a> {
	id: &'a str,
	name: &'a str,
	year_id: u32,
	phone: &'a str,
	national_id: &'a str,
	avatar_image: &'a str,
	is_graduated: bool,
	about: &'a str,
	specialization: &'a str,
	role: &'a str,
}

impl SupabaseAdminClient {
	/// Creates a new client for the given project base URL and service role
	/// key.
	pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
		let http_client = Client::builder()
			.user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
			.timeout(REQUEST_TIMEOUT)
			.build()
			.expect("failed to build HTTP client");

		Self {
			http_client,
			base_url: base_url.into(),
			service_key: service_key.into(),
		}
	}

	/// Creates an auth identity with the email auto-confirmed.
	///
	/// Returns the new identity's user id.
	pub async fn create_identity(&self, email: &str, password: &str) -> Result<String> {
		let url = format!("{}{IDENTITY_PATH}", self.base_url);
		debug!(url = %url, email = %email, "creating identity");

		let response = self
			.http_client
			.post(&url)
			.header("apikey", &self.service_key)
			.bearer_auth(&self.service_key)
			.json(&CreateIdentityRequest {
				email,
				password,
				email_confirm: true,
			})
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			error!(status = status.as_u16(), body = %body, "identity creation failed");
			return Err(ProvisionError::Identity {
				status: status.as_u16(),
				body,
			});
		}

		let body = response.text().await?;
		let created: CreateIdentityResponse = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "failed to decode identity response");
			ProvisionError::InvalidResponse(format!("identity response: {e}"))
		})?;

		match created.id {
			Some(id) if !id.is_empty() => {
				debug!(user_id = %id, "identity created");
				Ok(id)
			}
			_ => Err(ProvisionError::InvalidResponse(
				"identity response missing user id".to_string(),
			)),
		}
	}

	/// Inserts the profile row for an already-created identity.
	///
	/// All fields other than `id` and `name` are placeholders.
	pub async fn create_profile(&self, user_id: &str, display_name: &str) -> Result<()> {
		let url = format!("{}{PROFILE_PATH}", self.base_url);
		debug!(url = %url, user_id = %user_id, "creating profile");

		let response = self
			.http_client
			.post(&url)
			.header("apikey", &self.service_key)
			.bearer_auth(&self.service_key)
			.header("Prefer", "return=minimal")
			.json(&CreateProfileRequest {
				id: user_id,
				name: display_name,
				year_id: DEFAULT_YEAR_ID,
				phone: DEFAULT_PHONE,
				national_id: DEFAULT_NATIONAL_ID,
				avatar_image: DEFAULT_AVATAR_IMAGE,
				is_graduated: false,
				about: DEFAULT_ABOUT,
				specialization: DEFAULT_SPECIALIZATION,
				role: DEFAULT_ROLE,
			})
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			error!(status = status.as_u16(), body = %body, "profile creation failed");
			return Err(ProvisionError::Profile {
				status: status.as_u16(),
				body,
			});
		}

		debug!(user_id = %user_id, "profile created");
		Ok(())
	}

	/// Runs the two-step provisioning sequence for one request.
	///
	/// The profile step runs only if identity creation succeeded. Returns the
	/// identity's user id.
	pub async fn provision(&self, request: &ProvisionRequest) -> Result<String> {
		let user_id = self
			.create_identity(&request.email, &request.password)
			.await?;
		self.create_profile(&user_id, &request.display_name).await?;
		Ok(user_id)
	}
}
