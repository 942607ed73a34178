// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printer routes under /api/v1/printers.
//
//   GET  /api/v1/printers/                      list printers
//   GET  /api/v1/printers/{id}                  printer info (404 if unknown)
//   POST /api/v1/printers/{id}/start?file_id=   start a print job
//   POST /api/v1/printers/{id}/pause
//   POST /api/v1/printers/{id}/resume
//   POST /api/v1/printers/{id}/cancel

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use tracing::debug;

use printfarm_core::types::{OperationResult, Printer};

use crate::AppState;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct PrinterList {
    pub success: bool,
    pub printers: Vec<Printer>,
}

#[derive(Debug, Serialize)]
pub struct PrinterDetail {
    pub success: bool,
    pub printer: Printer,
}

#[derive(Debug, Deserialize)]
pub struct StartParams {
    pub file_id: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/printers", get(list_printers))
        .route("/api/v1/printers/", get(list_printers))
        .route("/api/v1/printers/:printer_id", get(get_printer))
        .route("/api/v1/printers/:printer_id/start", post(start_print_job))
        .route("/api/v1/printers/:printer_id/pause", post(pause_print))
        .route("/api/v1/printers/:printer_id/resume", post(resume_print))
        .route("/api/v1/printers/:printer_id/cancel", post(cancel_print))
}

async fn list_printers(State(state): State<AppState>) -> Json<PrinterList> {
    let printers = state.client.list_printers().await;
    Json(PrinterList {
        success: true,
        printers,
    })
}

async fn get_printer(
    State(state): State<AppState>,
    Path(printer_id): Path<String>,
) -> Result<Json<PrinterDetail>, ApiError> {
    match state.client.get_printer_info(&printer_id).await {
        Some(printer) => Ok(Json(PrinterDetail {
            success: true,
            printer,
        })),
        None => {
            debug!(%printer_id, "printer lookup came back empty");
            Err(ApiError::NotFound("Printer not found"))
        }
    }
}

async fn start_print_job(
    State(state): State<AppState>,
    Path(printer_id): Path<String>,
    Query(params): Query<StartParams>,
) -> Json<OperationResult> {
    Json(
        state
            .client
            .start_print_job(&printer_id, &params.file_id)
            .await,
    )
}

async fn pause_print(
    State(state): State<AppState>,
    Path(printer_id): Path<String>,
) -> Json<OperationResult> {
    Json(state.client.pause_print(&printer_id).await)
}

async fn resume_print(
    State(state): State<AppState>,
    Path(printer_id): Path<String>,
) -> Json<OperationResult> {
    Json(state.client.resume_print(&printer_id).await)
}

async fn cancel_print(
    State(state): State<AppState>,
    Path(printer_id): Path<String>,
) -> Json<OperationResult> {
    Json(state.client.cancel_print(&printer_id).await)
}
