// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Async client for the SimplyPrint cloud printer-management API.
//
// Endpoints used (relative to `{base_url}/{company_id}/`):
//   - GET  printers/Get            list printers
//   - GET  printers/Get/{id}       single printer
//   - POST printers/PrintJob       start a job      {printer_id, file_id}
//   - POST printers/PausePrint     pause            {printer_id}
//   - POST printers/ResumePrint    resume           {printer_id}
//   - POST printers/CancelPrint    cancel           {printer_id}
//
// Every call is a single attempt.  Failures never escape as errors: reads
// degrade to empty/absent results and actions report `success: false`.

use std::error::Error as _;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};
use serde_json::{Value, json};
use tracing::{debug, info, instrument, warn};

use printfarm_core::config::Settings;
use printfarm_core::error::{PrintfarmError, Result};
use printfarm_core::types::{OperationResult, Printer, PrinterAction};

use crate::wire::CallOutcome;

/// Header carrying the static API key.
const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// Client bound to one SimplyPrint tenant.
///
/// Holds only immutable configuration, so a single instance can be shared
/// across tasks behind an `Arc`.
#[derive(Debug, Clone)]
pub struct SimplyPrintClient {
    /// `{base_url}/{company_id}`, without a trailing slash.  Endpoint paths
    /// are appended segment by segment, never by string concatenation.
    base: Url,
    /// Pre-configured with the API key header, JSON content type and timeout.
    http: reqwest::Client,
}

impl SimplyPrintClient {
    /// Create a client for the given tenant.
    ///
    /// Fails if the API key cannot be sent as a header value, the base URL
    /// cannot carry path segments, or the HTTP client cannot be built.
    pub fn new(api_key: &str, company_id: &str, base_url: &str, timeout: Duration) -> Result<Self> {
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|e| PrintfarmError::Config(format!("API key is not a valid header value: {e}")))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| PrintfarmError::HttpClient(e.to_string()))?;

        let mut base = Url::parse(base_url)
            .map_err(|e| PrintfarmError::Config(format!("invalid SimplyPrint base URL {base_url:?}: {e}")))?;
        base.path_segments_mut()
            .map_err(|()| PrintfarmError::Config(format!("SimplyPrint base URL {base_url:?} cannot carry a path")))?
            .pop_if_empty()
            .push(company_id);
        debug!(base_path = %base, timeout_ms = timeout.as_millis() as u64, "SimplyPrint client configured");

        Ok(Self { base, http })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            &settings.simplyprint_api_key,
            &settings.simplyprint_company_id,
            &settings.simplyprint_base_url,
            settings.request_timeout(),
        )
    }

    /// Return the tenant base path all endpoints hang off.
    pub fn base_path(&self) -> &str {
        self.base.as_str()
    }

    /// Append `segments` below the tenant base path.  Each segment is
    /// percent-encoded on its own, so `/`, `?` and `#` inside a caller's id
    /// cannot change which endpoint is hit.
    fn endpoint_url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.base.clone();
        // `new` rejected bases without a path, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.extend(segments);
        }
        url
    }

    /// List every printer in the tenant.
    ///
    /// Returns an empty list both when the tenant has no printers and when
    /// the call fails; failures are logged at `warn`.
    #[instrument(skip(self))]
    pub async fn list_printers(&self) -> Vec<Printer> {
        let envelope = self
            .make_request(Method::GET, self.endpoint_url(["printers", "Get"]), None)
            .await
            .into_envelope();

        if !envelope.status {
            warn!(message = ?envelope.message, "printer list unavailable");
            return Vec::new();
        }

        match envelope.printers() {
            Ok(remote) => {
                let printers: Vec<Printer> =
                    remote.into_iter().map(|p| p.into_printer("")).collect();
                debug!(count = printers.len(), "received printer list");
                printers
            }
            Err(e) => {
                warn!(error = %e, "printer list payload malformed");
                Vec::new()
            }
        }
    }

    /// Fetch a single printer.  `None` when the service reports failure or
    /// the call fails.
    #[instrument(skip(self))]
    pub async fn get_printer_info(&self, printer_id: &str) -> Option<Printer> {
        // Dot segments are dropped by the URL builder and would turn this
        // into a list request.
        if matches!(printer_id, "" | "." | "..") {
            debug!("printer id cannot name a path segment");
            return None;
        }

        let envelope = self
            .make_request(Method::GET, self.endpoint_url(["printers", "Get", printer_id]), None)
            .await
            .into_envelope();

        if !envelope.status {
            debug!(message = ?envelope.message, "printer not available");
            return None;
        }

        match envelope.printer() {
            Ok(remote) => Some(remote.into_printer(printer_id)),
            Err(e) => {
                warn!(error = %e, "printer payload malformed");
                None
            }
        }
    }

    /// Start printing `file_id` on the given printer.
    pub async fn start_print_job(&self, printer_id: &str, file_id: &str) -> OperationResult {
        let body = json!({ "printer_id": printer_id, "file_id": file_id });
        self.perform(PrinterAction::Start, printer_id, body).await
    }

    pub async fn pause_print(&self, printer_id: &str) -> OperationResult {
        let body = json!({ "printer_id": printer_id });
        self.perform(PrinterAction::Pause, printer_id, body).await
    }

    pub async fn resume_print(&self, printer_id: &str) -> OperationResult {
        let body = json!({ "printer_id": printer_id });
        self.perform(PrinterAction::Resume, printer_id, body).await
    }

    pub async fn cancel_print(&self, printer_id: &str) -> OperationResult {
        let body = json!({ "printer_id": printer_id });
        self.perform(PrinterAction::Cancel, printer_id, body).await
    }

    #[instrument(skip(self, body))]
    async fn perform(&self, action: PrinterAction, printer_id: &str, body: Value) -> OperationResult {
        let result = self
            .make_request(Method::POST, self.endpoint_url(action.endpoint().split('/')), Some(&body))
            .await
            .into_envelope()
            .into_operation_result();

        info!(%action, success = result.success, message = %result.message, "printer action forwarded");
        result
    }

    /// Issue one outbound call and classify what came back.
    #[instrument(skip(self, body, url), fields(url = %url))]
    async fn make_request(&self, method: Method, url: Url, body: Option<&Value>) -> CallOutcome {
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await.and_then(|r| r.error_for_status()) {
            Ok(response) => response,
            Err(e) => {
                let detail = describe(&e);
                warn!(error = %detail, "SimplyPrint request failed");
                return CallOutcome::Transport(detail);
            }
        };

        match response.json::<Value>().await {
            Ok(body) => CallOutcome::Ok(body),
            Err(e) if e.is_decode() => {
                let detail = describe(&e);
                warn!(error = %detail, "SimplyPrint response was not JSON");
                CallOutcome::Decode(detail)
            }
            Err(e) => {
                let detail = describe(&e);
                warn!(error = %detail, "SimplyPrint response body could not be read");
                CallOutcome::Transport(detail)
            }
        }
    }
}

/// Render a reqwest error together with its source chain, which is where the
/// useful part ("connection refused", "operation timed out") usually lives.
fn describe(err: &reqwest::Error) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}
