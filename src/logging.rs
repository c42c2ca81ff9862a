// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Log subscriber setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job. Logs go to stderr so reports on stdout stay machine-readable.

use crate::cli::LogFormat;

/// Filter used when RUST_LOG is unset.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "listeq=warn",
        1 => "listeq=info",
        2 => "listeq=debug",
        _ => "listeq=trace",
    }
}

/// Install the global subscriber. Later calls are no-ops.
#[cfg(feature = "logging")]
pub fn init(verbose: u8, format: LogFormat) {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;

    static INIT_ONCE: Once = Once::new();

    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
        let builder = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter);

        // A subscriber installed by an embedding test harness wins.
        let _ = match format {
            LogFormat::Pretty => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
    });
}

#[cfg(not(feature = "logging"))]
pub fn init(_verbose: u8, _format: LogFormat) {}
