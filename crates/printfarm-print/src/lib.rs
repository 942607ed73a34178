// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PrintFarm Print — adapter for the SimplyPrint cloud printer-management API.
// This crate bridges between the core domain types defined in
// `printfarm-core` and the remote service's JSON envelope.

pub mod simplyprint;
pub mod wire;

pub use simplyprint::SimplyPrintClient;
pub use wire::{ApiEnvelope, CallOutcome, RemotePrinter};
