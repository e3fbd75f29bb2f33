//! The `explain` use case: look up purpose, flag and code documentation.

use tcfguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes the available identifiers.
    NotFound {
        identifier: String,
        available_purposes: &'static [&'static str],
        available_flags: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a purpose key, flag name or code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_purposes: explain::all_purpose_keys(),
            available_flags: explain::all_flags(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Configuration\n");
    out.push_str("-------------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before:\n");
    out.push_str("```toml\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("After:\n");
    out.push_str("```toml\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    purposes: &[&'static str],
    flags: &[&'static str],
    codes: &[&'static str],
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown purpose, flag or code: {identifier}\n"));
    for (heading, items) in [
        ("Available purposes", purposes),
        ("Available flags", flags),
        ("Available codes", codes),
    ] {
        out.push_str(&format!("\n{heading}:\n"));
        for item in items {
            out.push_str(&format!("  - {item}\n"));
        }
    }

    out
}
