// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Batch-runner ordering, accounting, and report-file tests.

use std::time::Duration;

use roster_client::{run_batch, BatchOptions, ProvisionStatus, SupabaseAdminClient};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn zero_delay() -> BatchOptions {
	BatchOptions {
		delay: Duration::ZERO,
	}
}

fn emails(raw: &[&str]) -> Vec<String> {
	raw.iter().map(|s| s.to_string()).collect()
}

async fn mount_identity(server: &MockServer, email: &str, template: ResponseTemplate) {
	Mock::given(method("POST"))
		.and(path("/auth/v1/admin/users"))
		.and(body_partial_json(json!({ "email": email })))
		.respond_with(template)
		.mount(server)
		.await;
}

async fn mount_profiles_ok(server: &MockServer) {
	Mock::given(method("POST"))
		.and(path("/rest/v1/profiles"))
		.respond_with(ResponseTemplate::new(201))
		.mount(server)
		.await;
}

#[tokio::test]
async fn every_input_yields_one_result_in_input_order() {
	let server = MockServer::start().await;

	mount_identity(
		&server,
		"a@x.com",
		ResponseTemplate::new(200).set_body_json(json!({ "id": "id-a" })),
	)
	.await;
	mount_identity(
		&server,
		"b@x.com",
		ResponseTemplate::new(422).set_body_string("User already registered"),
	)
	.await;
	mount_identity(
		&server,
		"c@x.com",
		ResponseTemplate::new(200).set_body_json(json!({ "id": "id-c" })),
	)
	.await;
	mount_profiles_ok(&server).await;

	let client = SupabaseAdminClient::new(server.uri(), "service-key");
	// Whitespace and a stray trailing quote are normalized before any
	// request goes out.
	let input = emails(&["a@x.com", "  b@x.com  ", "c@x.com'"]);

	let mut progress = Vec::new();
	let report = run_batch(
		&client,
		&input,
		"changepassword",
		&zero_delay(),
		|index, total, result| progress.push((index, total, result.status)),
	)
	.await;

	let results = report.results();
	assert_eq!(results.len(), 3);

	assert_eq!(results[0].email, "a@x.com");
	assert_eq!(results[0].status, ProvisionStatus::Success);
	assert_eq!(results[0].user_id.as_deref(), Some("id-a"));

	assert_eq!(results[1].email, "b@x.com");
	assert_eq!(results[1].status, ProvisionStatus::Failed);
	assert_eq!(results[1].user_id, None);

	assert_eq!(results[2].email, "c@x.com");
	assert_eq!(results[2].status, ProvisionStatus::Success);
	assert_eq!(results[2].user_id.as_deref(), Some("id-c"));

	assert_eq!(report.total(), 3);
	assert_eq!(report.successful(), 2);
	assert_eq!(report.failed(), 1);

	assert_eq!(
		progress,
		vec![
			(1, 3, ProvisionStatus::Success),
			(2, 3, ProvisionStatus::Failed),
			(3, 3, ProvisionStatus::Success),
		]
	);
}

#[tokio::test]
async fn a_failing_entry_does_not_abort_the_rest_of_the_batch() {
	let server = MockServer::start().await;

	mount_identity(
		&server,
		"first@x.com",
		ResponseTemplate::new(500).set_body_string("boom"),
	)
	.await;
	mount_identity(
		&server,
		"second@x.com",
		ResponseTemplate::new(200).set_body_json(json!({ "id": "id-2" })),
	)
	.await;
	mount_profiles_ok(&server).await;

	let client = SupabaseAdminClient::new(server.uri(), "service-key");
	let report = run_batch(
		&client,
		&emails(&["first@x.com", "second@x.com"]),
		"changepassword",
		&zero_delay(),
		|_, _, _| {},
	)
	.await;

	assert_eq!(report.total(), 2);
	assert_eq!(report.failed(), 1);
	assert_eq!(report.successful(), 1);
	assert_eq!(report.results()[1].user_id.as_deref(), Some("id-2"));
}

#[tokio::test]
async fn empty_input_produces_an_empty_report_and_no_requests() {
	let server = MockServer::start().await;

	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200))
		.expect(0)
		.mount(&server)
		.await;

	let client = SupabaseAdminClient::new(server.uri(), "service-key");
	let report = run_batch(&client, &[], "changepassword", &zero_delay(), |_, _, _| {}).await;

	assert_eq!(report.total(), 0);
	assert_eq!(report.successful(), 0);
	assert_eq!(report.failed(), 0);
}

#[tokio::test]
async fn report_file_contains_the_ordered_records() {
	let server = MockServer::start().await;

	mount_identity(
		&server,
		"ok@x.com",
		ResponseTemplate::new(200).set_body_json(json!({ "id": "id-ok" })),
	)
	.await;
	mount_identity(
		&server,
		"fail@x.com",
		ResponseTemplate::new(422).set_body_string("nope"),
	)
	.await;
	mount_profiles_ok(&server).await;

	let client = SupabaseAdminClient::new(server.uri(), "service-key");
	let report = run_batch(
		&client,
		&emails(&["ok@x.com", "fail@x.com"]),
		"changepassword",
		&zero_delay(),
		|_, _, _| {},
	)
	.await;

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("user_creation_results.json");
	report.write_to_file(&path).unwrap();

	let contents = std::fs::read_to_string(&path).unwrap();
	let records: serde_json::Value = serde_json::from_str(&contents).unwrap();

	assert_eq!(
		records,
		json!([
			{ "email": "ok@x.com", "status": "success", "user_id": "id-ok" },
			{ "email": "fail@x.com", "status": "failed" }
		])
	);
}
