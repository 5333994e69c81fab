// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Roster - provisions Supabase auth users and their profile records.

mod config;
mod prompt;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use roster_client::{
	normalize_email, run_batch, BatchOptions, ProvisionRequest, ProvisionStatus,
	SupabaseAdminClient,
};

use config::Config;

const DEFAULT_EMAIL: &str = "student@example.com";
const DEFAULT_PASSWORD: &str = "changepassword";
const DEFAULT_NAME: &str = "Student Name";
const DEFAULT_REPORT_PATH: &str = "user_creation_results.json";

/// Provision Supabase users and their profile records.
#[derive(Parser, Debug)]
#[command(name = "roster", about = "Provision Supabase users and profiles", version)]
struct Cli {
	/// Supabase project base URL, e.g. https://xyz.supabase.co
	#[arg(long, env = "SUPABASE_URL")]
	supabase_url: String,

	/// Service role key (not the anon key)
	#[arg(long, env = "SUPABASE_SERVICE_ROLE_KEY", hide_env_values = true)]
	service_role_key: String,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Create a single user and profile from flag values
	Create {
		#[arg(short, long, default_value = DEFAULT_EMAIL)]
		email: String,

		#[arg(short, long, default_value = DEFAULT_PASSWORD)]
		password: String,

		#[arg(short, long, default_value = DEFAULT_NAME)]
		name: String,
	},

	/// Prompt for user details on stdin
	Interactive,

	/// Create users for every email in a file (one address per line)
	Batch {
		/// Email list file
		file: PathBuf,

		/// Password assigned to every created user
		#[arg(short, long, default_value = DEFAULT_PASSWORD)]
		password: String,

		/// Report file for per-entry outcomes
		#[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
		output: PathBuf,

		/// Pause between entries, in milliseconds
		#[arg(long, default_value_t = 500)]
		delay_ms: u64,
	},
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	dotenvy::dotenv().ok();

	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "info".into()),
		)
		.init();

	let cli = Cli::parse();
	let config = Config::new(cli.supabase_url, cli.service_role_key)?;
	tracing::debug!(base_url = %config.base_url, "connecting to Supabase project");

	let client = SupabaseAdminClient::new(config.base_url, config.service_key);

	match cli.command {
		Command::Create {
			email,
			password,
			name,
		} => create_one(&client, &email, &password, &name).await,
		Command::Interactive => {
			println!("=== Supabase User Creator ===");
			let email = prompt::prompt_with_default("Enter user email", DEFAULT_EMAIL)?;
			let password = prompt::prompt_with_default("Enter password", DEFAULT_PASSWORD)?;
			let name = prompt::prompt_with_default("Enter user name", DEFAULT_NAME)?;
			create_one(&client, &email, &password, &name).await
		}
		Command::Batch {
			file,
			password,
			output,
			delay_ms,
		} => batch_from_file(&client, &file, &password, &output, delay_ms).await,
	}
}

async fn create_one(
	client: &SupabaseAdminClient,
	email: &str,
	password: &str,
	name: &str,
) -> anyhow::Result<()> {
	let request = ProvisionRequest {
		email: normalize_email(email).to_string(),
		password: password.to_string(),
		display_name: name.to_string(),
	};

	println!("Creating user with email: {}...", request.email);

	let user_id = client
		.provision(&request)
		.await
		.with_context(|| format!("user creation failed for {}", request.email))?;

	println!("User and profile created successfully.");
	println!("  User ID: {user_id}");
	println!("  Email:   {}", request.email);
	Ok(())
}

async fn batch_from_file(
	client: &SupabaseAdminClient,
	file: &Path,
	password: &str,
	output: &Path,
	delay_ms: u64,
) -> anyhow::Result<()> {
	let contents = std::fs::read_to_string(file)
		.with_context(|| format!("failed to read email list {}", file.display()))?;
	let emails: Vec<String> = contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(String::from)
		.collect();

	println!("=== Starting batch creation of {} users ===", emails.len());

	let options = BatchOptions {
		delay: Duration::from_millis(delay_ms),
	};
	let report = run_batch(
		client,
		&emails,
		password,
		&options,
		|index, total, result| match result.status {
			ProvisionStatus::Success => {
				println!("[{index}/{total}] {} created", result.email);
			}
			ProvisionStatus::Failed => {
				println!("[{index}/{total}] {} FAILED", result.email);
			}
		},
	)
	.await;

	report.write_to_file(output)?;

	println!();
	println!("=== Batch Creation Summary ===");
	println!("Total processed: {}", report.total());
	println!("Successful:      {}", report.successful());
	println!("Failed:          {}", report.failed());
	println!("Results saved to {}", output.display());

	Ok(())
}
