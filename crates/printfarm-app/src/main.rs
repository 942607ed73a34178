// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PrintFarm Onground — intranet service for 3D printer orchestration.
//
// Entry point. Loads settings, initialises logging, builds the SimplyPrint
// client and serves the HTTP API.

use tokio::net::TcpListener;
use tracing::info;

use printfarm_core::config::Settings;
use printfarm_core::error::Result;
use printfarm_print::SimplyPrintClient;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;

    let default_level = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    info!(app = %settings.app_name, "PrintFarm starting");

    let client = SimplyPrintClient::from_settings(&settings)?;
    let app = printfarm_app::app(&settings, client)?;

    let listener = TcpListener::bind(settings.bind_address()).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
