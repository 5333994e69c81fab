// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Display-name derivation and email normalization.

/// Derives a display name from an email address.
///
/// The local part (everything before the first `@`) is split on `.`; each
/// non-empty segment is capitalized and the segments are joined with single
/// spaces. `ali.ahmed@example.com` becomes `Ali Ahmed`. Malformed input
/// (no `@`, no `.`) degrades to a single capitalized word.
pub fn derive_display_name(email: &str) -> String {
	let local = email.split('@').next().unwrap_or_default();
	local
		.split('.')
		.filter(|segment| !segment.is_empty())
		.map(capitalize)
		.collect::<Vec<_>>()
		.join(" ")
}

/// Strips surrounding whitespace and one trailing `'` left over from
/// copy-pasted shell quoting.
pub fn normalize_email(raw: &str) -> &str {
	let trimmed = raw.trim();
	trimmed.strip_suffix('\'').unwrap_or(trimmed)
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(segment: &str) -> String {
	let mut chars = segment.chars();
	match chars.next() {
		Some(first) => first
			.to_uppercase()
			.chain(chars.flat_map(char::to_lowercase))
			.collect(),
		None => String::new(),
	}
}
