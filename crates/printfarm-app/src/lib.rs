// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PrintFarm Onground — HTTP application.  Wires the printer routes, CORS and
// the root/health endpoints around a shared `SimplyPrintClient`.

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::get;
use serde_json::{Value, json};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use printfarm_core::config::Settings;
use printfarm_core::error::{PrintfarmError, Result};
use printfarm_print::SimplyPrintClient;

/// State shared by every handler.  Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<SimplyPrintClient>,
    pub app_name: Arc<str>,
}

impl AppState {
    pub fn new(settings: &Settings, client: SimplyPrintClient) -> Self {
        Self {
            client: Arc::new(client),
            app_name: settings.app_name.as_str().into(),
        }
    }
}

/// Build the full application router.
///
/// Fails only if a configured CORS origin is not a valid header value.
pub fn app(settings: &Settings, client: SimplyPrintClient) -> Result<Router> {
    let cors = cors_layer(&settings.cors_origins)?;
    let state = AppState::new(settings, client);

    Ok(Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(routes::router())
        .layer(cors)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|e| {
                PrintfarmError::Config(format!("invalid CORS origin '{origin}': {e}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": format!("{} Service", state.app_name),
        "status": "running",
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "onground-backend" }))
}
