// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Line-oriented stdin prompts for interactive mode.

use std::io::{self, BufRead, Write};

/// Prompts on stdout and reads one line from stdin.
///
/// Blank input falls back to `default`.
pub fn prompt_with_default(label: &str, default: &str) -> io::Result<String> {
	print!("{label} (or press Enter for default '{default}'): ");
	io::stdout().flush()?;

	let mut line = String::new();
	io::stdin().lock().read_line(&mut line)?;

	let value = line.trim();
	if value.is_empty() {
		Ok(default.to_string())
	} else {
		Ok(value.to_string())
	}
}
