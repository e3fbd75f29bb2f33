//! The `enforce` use case: resolve config, evaluate every purpose, produce a report.

use anyhow::Context;
use tcfguard_domain::consent::{ConsentRecord, DecodedConsent};
use tcfguard_domain::model::Bidder;
use tcfguard_domain::vendor_list::VendorList;
use tcfguard_domain::{EnforcementRequest, evaluate};
use tcfguard_settings::{Overrides, ResolvedConfig, TcfConfigV1};
use tcfguard_types::{ReportEnvelope, SCHEMA_REPORT_V1, TcfReportV1, ToolMeta, Verdict};
use time::OffsetDateTime;

/// Input for the enforce use case.
#[derive(Clone, Debug)]
pub struct EnforceInput<'a> {
    /// Host config contents (empty string if not found).
    pub host_config_text: &'a str,
    /// Account config contents, layered over the host config.
    pub account_config_text: Option<&'a str>,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Decoded consent record as JSON; `None` means no consent.
    pub consent_json: Option<&'a str>,
    /// Vendor list as JSON; `None` means an empty list.
    pub vendor_list_json: Option<&'a str>,
    pub bidders: Vec<Bidder>,
}

/// Output from the enforce use case.
#[derive(Clone, Debug)]
pub struct EnforceOutput {
    pub report: TcfReportV1,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

pub fn run_enforce(input: EnforceInput<'_>) -> anyhow::Result<EnforceOutput> {
    let started_at = OffsetDateTime::now_utc();

    let host = parse_config(input.host_config_text).context("parse host config")?;
    let account = input
        .account_config_text
        .map(|text| parse_config(text).context("parse account config"))
        .transpose()?;

    let resolved = tcfguard_settings::resolve_config(host, account, input.overrides.clone())
        .context("resolve config")?;

    let consent = input
        .consent_json
        .map(|text| DecodedConsent::from_json(text).context("parse consent record"))
        .transpose()?;
    let vendor_list = input
        .vendor_list_json
        .map(|text| VendorList::from_json(text).context("parse vendor list"))
        .transpose()?;

    if consent.is_none() {
        tracing::info!("no consent record supplied; treating as no consent");
    }

    let request = EnforcementRequest {
        bidders: &input.bidders,
        consent: consent.as_ref().map(|c| c as &dyn ConsentRecord),
        vendor_list: vendor_list.as_ref(),
    };
    let domain_report = evaluate(&request, &resolved.effective);

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "tcfguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict: domain_report.verdict,
        vendors: domain_report.vendor_decisions(),
        findings: domain_report.findings(),
        data: domain_report.data,
    };

    Ok(EnforceOutput {
        report,
        resolved_config: resolved,
    })
}

/// Empty text means defaults.
fn parse_config(text: &str) -> anyhow::Result<TcfConfigV1> {
    if text.trim().is_empty() {
        Ok(TcfConfigV1::default())
    } else {
        tcfguard_settings::parse_config_toml(text)
    }
}

/// Parse `NAME` or `NAME=VENDOR_ID`.
pub fn parse_bidder(spec: &str) -> anyhow::Result<Bidder> {
    let (name, vendor_id) = match spec.split_once('=') {
        Some((name, id)) => {
            let id: u32 = id
                .trim()
                .parse()
                .with_context(|| format!("invalid vendor id in bidder '{spec}'"))?;
            (name.trim(), Some(id))
        }
        None => (spec.trim(), None),
    };
    if name.is_empty() {
        anyhow::bail!("bidder name is empty in '{spec}'");
    }
    Ok(Bidder::new(name, vendor_id))
}

/// Map verdict to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
