// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Tracing setup.

use tracing_subscriber::EnvFilter;

use crate::config::LOG_FORMAT_ENV;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` controls the filter (default `info,tower_http=debug`);
/// `LOG_FORMAT=json` switches to structured JSON output for log
/// shippers, anything else keeps the human-readable format.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
