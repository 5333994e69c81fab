// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Supabase account and profile provisioning.
//!
//! This crate provides:
//! - A client for the Supabase auth admin and PostgREST endpoints
//! - Display-name derivation and email normalization helpers
//! - A sequential batch runner with a fixed inter-request delay
//! - A JSON results report for batch runs

pub mod batch;
pub mod client;
pub mod error;
pub mod name;
pub mod types;

pub use batch::{run_batch, BatchOptions};
pub use client::SupabaseAdminClient;
pub use error::{ProvisionError, Result};
pub use name::{derive_display_name, normalize_email};
pub use types::{BatchReport, ProvisionRequest, ProvisionResult, ProvisionStatus};
