// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Test harness: a fake SimplyPrint tenant plus the real application, both on
// random local ports.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Request};
use axum::middleware::{self, Next};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use printfarm_core::config::Settings;
use printfarm_print::SimplyPrintClient;

pub const COMPANY_ID: &str = "acme";

/// Raw (still percent-encoded) request paths the fake tenant received.
pub type SeenPaths = Arc<Mutex<Vec<String>>>;

/// Spawn `app` on a random port and return its address.
pub async fn serve(app: Router) -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}

/// A tenant with one printer (id 7) that accepts every action except pause.
/// Every request path is appended to `seen`.
pub fn fake_tenant(seen: SeenPaths) -> Router {
    Router::new()
        .route(
            "/acme/printers/Get",
            get(|| async {
                Json(json!({
                    "status": true,
                    "data": [
                        {"id": 7, "name": "Ender3", "status": "printing", "is_online": true},
                        {"id": 8}
                    ]
                }))
            }),
        )
        .route(
            "/acme/printers/Get/:id",
            get(|Path(id): Path<String>| async move {
                if id == "7" {
                    Json(json!({
                        "status": true,
                        "data": {"id": 7, "name": "Ender3", "status": "printing", "ip_address": "10.0.0.7", "is_online": true}
                    }))
                } else {
                    Json(json!({"status": false, "message": "Printer not found"}))
                }
            }),
        )
        .route(
            "/acme/printers/PrintJob",
            post(|Json(body): Json<Value>| async move {
                Json(json!({
                    "status": true,
                    "message": format!("started {}", body["file_id"].as_str().unwrap_or("?")),
                }))
            }),
        )
        .route(
            "/acme/printers/PausePrint",
            post(|| async { Json(json!({"status": false, "message": "Printer is not printing"})) }),
        )
        .route(
            "/acme/printers/ResumePrint",
            post(|| async { Json(json!({"status": true, "message": "resumed"})) }),
        )
        .route(
            "/acme/printers/CancelPrint",
            post(|| async { Json(json!({"status": true})) }),
        )
        .fallback(|| async { Json(json!({"status": false, "message": "no such endpoint"})) })
        .layer(middleware::from_fn(move |request: Request, next: Next| {
            seen.lock().unwrap().push(request.uri().path().to_owned());
            next.run(request)
        }))
}

pub struct Harness {
    pub base: String,
    /// Paths the fake tenant was asked for; empty for `against`.
    pub upstream_paths: SeenPaths,
    _upstream: Option<JoinHandle<()>>,
    _app: JoinHandle<()>,
}

impl Harness {
    /// Application backed by `fake_tenant()`.
    pub async fn start() -> Self {
        let seen = SeenPaths::default();
        let (upstream_addr, upstream) = serve(fake_tenant(seen.clone())).await;
        let mut harness = Self::against(&format!("http://{upstream_addr}")).await;
        harness._upstream = Some(upstream);
        harness.upstream_paths = seen;
        harness
    }

    /// Application backed by whatever listens at `upstream_url`.
    pub async fn against(upstream_url: &str) -> Self {
        let settings = Settings {
            simplyprint_api_key: "test-key".into(),
            simplyprint_company_id: COMPANY_ID.into(),
            simplyprint_base_url: upstream_url.into(),
            ..Default::default()
        };
        let client = SimplyPrintClient::new(
            &settings.simplyprint_api_key,
            &settings.simplyprint_company_id,
            &settings.simplyprint_base_url,
            Duration::from_secs(5),
        )
        .unwrap();
        let app = printfarm_app::app(&settings, client).unwrap();
        let (addr, handle) = serve(app).await;

        Self {
            base: format!("http://{addr}"),
            upstream_paths: SeenPaths::default(),
            _upstream: None,
            _app: handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn upstream_paths(&self) -> Vec<String> {
        self.upstream_paths.lock().unwrap().clone()
    }
}
