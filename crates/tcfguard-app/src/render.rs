//! Markdown rendering of an in-memory report.

use tcfguard_types::explain::all_flags;
use tcfguard_types::{TcfReportV1, Verdict};

pub fn render_markdown(report: &TcfReportV1) -> String {
    let mut out = String::new();

    out.push_str("# tcfguard report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Profile: `{}`\n- Bidders: {}\n- Purposes: {} evaluated / {} failed\n\n",
        verdict,
        report.data.profile,
        report.data.bidders_scanned,
        report.data.purposes_evaluated,
        report.data.purposes_failed
    ));

    if !report.findings.is_empty() {
        out.push_str("## Findings\n\n");
        for f in &report.findings {
            match f.purpose {
                Some(p) => out.push_str(&format!("- purpose {} `{}`: {}\n", p, f.code, f.message)),
                None => out.push_str(&format!("- `{}`: {}\n", f.code, f.message)),
            }
            if let Some(help) = &f.help {
                out.push_str(&format!("  - help: {}\n", help));
            }
        }
        out.push('\n');
    }

    if report.vendors.is_empty() {
        out.push_str("No bidders.\n");
        return out;
    }

    let flags = all_flags();
    out.push_str("## Vendors\n\n");
    out.push_str("| bidder | vendor |");
    for flag in flags {
        out.push_str(&format!(" {flag} |"));
    }
    out.push_str("\n|---|---|");
    for _ in flags {
        out.push_str("---|");
    }
    out.push('\n');

    for v in &report.vendors {
        let vendor = v.vendor_id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string());
        out.push_str(&format!("| {} | {} |", v.bidder, vendor));
        for flag in flags {
            let cell = match v.is_blocked(flag) {
                Some(true) => "blocked",
                Some(false) => "allowed",
                None => "?",
            };
            out.push_str(&format!(" {cell} |"));
        }
        out.push('\n');
    }

    out
}
