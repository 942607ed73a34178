// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for PrintFarm.
//
// Per-call failures of the cloud adapter never surface here; they are folded
// into `CallOutcome` inside `printfarm-print`.  This enum only covers the
// things that can go wrong while wiring the service together.

use thiserror::Error;

/// Top-level error type for startup and construction failures.
#[derive(Debug, Error)]
pub enum PrintfarmError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP client setup failed: {0}")]
    HttpClient(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for PrintfarmError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PrintfarmError>;
