use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Stable schema identifier for tcfguard reports.
pub const SCHEMA_REPORT_V1: &str = "tcfguard.report.v1";

/// `fail` means at least one purpose could not be evaluated and stayed fully restricted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Final decision for one bidder after every purpose ran.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VendorDecision {
    pub bidder: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<u32>,

    /// Flag name -> `true` when the capability stays blocked.
    pub actions: BTreeMap<String, bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    /// Purpose the finding is attached to; absent for tool-level findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<u8>,
    pub code: String,
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// SHA-256 over `code|purpose`, stable across runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

/// Summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct TcfData {
    pub profile: String,
    pub bidders_scanned: u32,
    pub purposes_evaluated: u32,
    pub purposes_failed: u32,

    /// Flag name -> number of bidders for which the capability is permitted.
    #[serde(default)]
    pub permitted: BTreeMap<String, u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = TcfData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub vendors: Vec<VendorDecision>,
    pub findings: Vec<Finding>,
    pub data: TData,
}

pub type TcfReportV1 = ReportEnvelope<TcfData>;

impl VendorDecision {
    pub fn is_blocked(&self, flag: &str) -> Option<bool> {
        self.actions.get(flag).copied()
    }
}
