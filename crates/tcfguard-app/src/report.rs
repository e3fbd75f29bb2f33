use anyhow::Context;
use std::collections::BTreeMap;
use tcfguard_types::{
    Finding, SCHEMA_REPORT_V1, TcfData, TcfReportV1, ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<TcfReportV1> {
    let report: TcfReportV1 = serde_json::from_str(text).context("parse report json")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {}", report.schema);
    }
    Ok(report)
}

pub fn serialize_report(report: &TcfReportV1) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// A failing report carrying a single tool-level finding.
pub fn runtime_error_report(message: &str) -> TcfReportV1 {
    let now = OffsetDateTime::now_utc();
    TcfReportV1 {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "tcfguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        vendors: Vec::new(),
        findings: vec![Finding {
            purpose: None,
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            help: Some("Fix the tool error and re-run tcfguard.".to_string()),
            fingerprint: None,
        }],
        data: TcfData {
            profile: "unknown".to_string(),
            bidders_scanned: 0,
            purposes_evaluated: 0,
            purposes_failed: 0,
            permitted: BTreeMap::new(),
        },
    }
}
