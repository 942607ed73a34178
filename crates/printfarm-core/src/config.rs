// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.
//
// Settings are read once at startup from built-in defaults, an optional
// `.env` file, and the process environment (case-insensitive, no prefix).
// They are immutable for the lifetime of the process.

use std::time::Duration;

use config::{Config, ConfigBuilder, Environment, builder::DefaultState};
use serde::{Deserialize, Deserializer};

use crate::error::{PrintfarmError, Result};

/// Default cloud API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.simplyprint.io";

/// Default timeout for a single outbound call to the cloud service.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Process-wide settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Static key forwarded in the `X-API-KEY` header.
    pub simplyprint_api_key: String,
    /// Tenant identifier, appended to the base URL.
    pub simplyprint_company_id: String,
    pub simplyprint_base_url: String,
    /// Per-call timeout for outbound requests, in seconds.
    pub request_timeout_secs: u64,
    pub app_name: String,
    /// Enables debug-level logging when `RUST_LOG` is unset.
    pub debug: bool,
    pub server_host: String,
    pub server_port: u16,
    /// Origins allowed by the CORS layer.  Comma-separated in the
    /// environment.
    #[serde(deserialize_with = "comma_list")]
    pub cors_origins: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simplyprint_api_key: "key".into(),
            simplyprint_company_id: "123".into(),
            simplyprint_base_url: DEFAULT_BASE_URL.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            app_name: "PrintFarm Onground Backend".into(),
            debug: true,
            server_host: "0.0.0.0".into(),
            server_port: 4000,
            cors_origins: vec!["http://localhost:3000".into()],
        }
    }
}

impl Settings {
    /// Load settings from `.env` (if present) and the process environment.
    pub fn load() -> Result<Self> {
        dotenv_loaded(dotenv_flow::dotenv_flow())?;
        Self::from_environment(Environment::default())
    }

    /// Load settings from the given environment source layered over the
    /// built-in defaults.
    ///
    /// Values are taken as strings and converted per field, so ids such as
    /// `0123` keep their exact spelling.
    pub fn from_environment(env: Environment) -> Result<Self> {
        let config = with_defaults(Config::builder())?.add_source(env).build()?;

        Ok(config.try_deserialize()?)
    }

    /// Socket address string the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// A missing `.env` file is normal.  An unreadable or malformed one is not.
fn dotenv_loaded<T>(result: std::result::Result<T, dotenv_flow::Error>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(PrintfarmError::Config(format!("failed to load .env: {e}"))),
    }
}

/// Accept either a list or a single comma-separated string.
fn comma_list<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect(),
        OneOrMany::Many(list) => list,
    })
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>> {
    let defaults = Settings::default();
    Ok(builder
        .set_default("simplyprint_api_key", defaults.simplyprint_api_key)?
        .set_default("simplyprint_company_id", defaults.simplyprint_company_id)?
        .set_default("simplyprint_base_url", defaults.simplyprint_base_url)?
        .set_default("request_timeout_secs", defaults.request_timeout_secs as i64)?
        .set_default("app_name", defaults.app_name)?
        .set_default("debug", defaults.debug)?
        .set_default("server_host", defaults.server_host)?
        .set_default("server_port", i64::from(defaults.server_port))?
        .set_default("cors_origins", defaults.cors_origins)?)
}
