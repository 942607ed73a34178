// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Wire-level types for the SimplyPrint JSON envelope.
//
// Every reply from the cloud service has the shape
//
//   { "status": bool, "data": <any>?, "message": <string>? }
//
// Each field is optional on decode.  Printer objects inside `data` are
// decoded one at a time, field by field, and absent fields map to fixed
// local defaults.  One malformed printer does not hide the rest.

use printfarm_core::types::{OFFLINE_STATUS, OperationResult, Printer, UNKNOWN_PRINTER_NAME};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Outcome of a single outbound call.
///
/// `Transport` covers connection failures, timeouts and non-2xx statuses.
/// `Decode` covers a 2xx reply whose body is not JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    Ok(Value),
    Transport(String),
    Decode(String),
}

impl CallOutcome {
    /// Collapse the outcome into the uniform envelope callers inspect.
    ///
    /// Failures become `{status: false, message}`; a successful body is
    /// decoded as-is.  A body that is JSON but not an envelope counts as a
    /// decode failure.
    pub fn into_envelope(self) -> ApiEnvelope {
        match self {
            Self::Ok(body) => match serde_json::from_value::<ApiEnvelope>(body) {
                Ok(envelope) => envelope,
                Err(e) => ApiEnvelope::failure(format!("Unexpected error: {e}")),
            },
            Self::Transport(detail) => ApiEnvelope::failure(format!("API request failed: {detail}")),
            Self::Decode(detail) => ApiEnvelope::failure(format!("Unexpected error: {detail}")),
        }
    }
}

/// The JSON envelope returned by every SimplyPrint endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiEnvelope {
    pub status: bool,
    pub data: Option<Value>,
    pub message: Option<String>,
}

impl ApiEnvelope {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Decode `data` as an array of printer objects.  Absent `data` is an
    /// empty list.
    ///
    /// Only a `data` that is not an array is an error.  Elements that fail
    /// to decode are logged and skipped.
    pub fn printers(self) -> Result<Vec<RemotePrinter>, serde_json::Error> {
        let items: Vec<Value> = match self.data {
            Some(data) => serde_json::from_value(data)?,
            None => return Ok(Vec::new()),
        };

        let printers = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<RemotePrinter>(item) {
                Ok(printer) => Some(printer),
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed printer");
                    None
                }
            })
            .collect();
        Ok(printers)
    }

    /// Decode `data` as a single printer object.  Absent `data` is an object
    /// with every field missing.
    pub fn printer(self) -> Result<RemotePrinter, serde_json::Error> {
        match self.data {
            Some(data) => serde_json::from_value(data),
            None => Ok(RemotePrinter::default()),
        }
    }

    pub fn into_operation_result(self) -> OperationResult {
        OperationResult {
            success: self.status,
            message: self.message.unwrap_or_default(),
        }
    }
}

/// A printer object as the cloud service sends it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RemotePrinter {
    /// Numeric on the wire in practice, but strings are accepted too.
    pub id: Option<Value>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub ip_address: Option<String>,
    pub printer_type: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_online: Option<bool>,
}

impl RemotePrinter {
    /// Map onto the local `Printer` record, using `fallback_id` when the
    /// remote object carries no id.
    pub fn into_printer(self, fallback_id: &str) -> Printer {
        Printer {
            id: self
                .id
                .and_then(id_to_string)
                .unwrap_or_else(|| fallback_id.to_string()),
            name: self.name.unwrap_or_else(|| UNKNOWN_PRINTER_NAME.into()),
            status: self.status.unwrap_or_else(|| OFFLINE_STATUS.into()),
            ip_address: self.ip_address,
            printer_type: self.printer_type,
            in_service: self.is_online.unwrap_or(false),
        }
    }
}

/// Accept the flag as a bool, `0`/`1`, or one of the usual truthy/falsy
/// strings.
fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    let flag = match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Bool(b) => Some(b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => return Err(de::Error::custom(format!("expected 0 or 1, got {n}"))),
        },
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => return Err(de::Error::custom(format!("expected a boolean, got {s:?}"))),
        },
        other => return Err(de::Error::custom(format!("expected a boolean, got {other}"))),
    };
    Ok(flag)
}

fn id_to_string(id: Value) -> Option<String> {
    match id {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
