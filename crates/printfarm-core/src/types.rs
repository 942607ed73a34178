// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the PrintFarm onground backend.

use serde::{Deserialize, Serialize};

/// Display name used when the cloud service does not name a printer.
pub const UNKNOWN_PRINTER_NAME: &str = "Unknown Printer";

/// Status label used when the cloud service reports no status.
pub const OFFLINE_STATUS: &str = "offline";

/// A printer as reported by the cloud printer-management service.
///
/// This is a flat snapshot built fresh on every call.  Nothing about it is
/// cached or tracked locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Printer {
    pub id: String,
    pub name: String,
    /// Free-form status label supplied by the cloud service (e.g. "printing").
    pub status: String,
    pub ip_address: Option<String>,
    pub printer_type: Option<String>,
    /// Derived from the cloud service's `is_online` flag.
    pub in_service: bool,
}

/// Acknowledgement for a mutating printer action (start, pause, resume, cancel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    pub success: bool,
    pub message: String,
}

/// Printer actions forwarded to the cloud service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrinterAction {
    Start,
    Pause,
    Resume,
    Cancel,
}

impl PrinterAction {
    /// Endpoint path (relative to the tenant base path) for this action.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Start => "printers/PrintJob",
            Self::Pause => "printers/PausePrint",
            Self::Resume => "printers/ResumePrint",
            Self::Cancel => "printers/CancelPrint",
        }
    }
}

impl std::fmt::Display for PrinterAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Cancel => "cancel",
        };
        f.write_str(name)
    }
}
