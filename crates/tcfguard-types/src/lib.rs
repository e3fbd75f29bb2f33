//! Stable DTOs and IDs used across the tcfguard workspace.
//!
//! - data types for the emitted report
//! - stable string IDs for purposes, flags and codes
//! - explain registry for configuration guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    Finding, ReportEnvelope, SCHEMA_REPORT_V1, TcfData, TcfReportV1, ToolMeta, VendorDecision,
    Verdict,
};
