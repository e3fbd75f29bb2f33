//! Developer tasks (schema generation, report conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};
use tcfguard_test_util::normalize_nondeterministic;
use tcfguard_types::explain;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .or_else(|_| std::env::current_dir())
        .unwrap_or_else(|_| PathBuf::from("."));

    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        parent.to_path_buf()
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Golden reports checked by `conform` when no paths are given.
fn golden_reports_dir() -> PathBuf {
    project_root()
        .join("crates")
        .join("tcfguard-cli")
        .join("tests")
        .join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(tcfguard_types::TcfReportV1)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(tcfguard_settings::TcfConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "tcfguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "tcfguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {name}");
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {name}");
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Snake_case token: lowercase ASCII start, then lowercase, digits or `_`.
fn is_valid_token(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Problems with one report beyond what the JSON schema expresses.
fn report_hygiene(name: &str, value: &serde_json::Value) -> Vec<String> {
    let mut errors = Vec::new();
    let known_flags = explain::all_flags();

    if let Some(findings) = value.get("findings").and_then(|v| v.as_array()) {
        for (i, finding) in findings.iter().enumerate() {
            let code = finding.get("code").and_then(|v| v.as_str()).unwrap_or_default();
            if !is_valid_token(code) {
                errors.push(format!("{name}: findings[{i}].code '{code}' is not a snake_case token"));
            }
            if let Some(purpose) = finding.get("purpose").and_then(|v| v.as_u64())
                && !(1..=10).contains(&purpose)
            {
                errors.push(format!("{name}: findings[{i}].purpose {purpose} is out of range"));
            }
        }
    }

    if let Some(vendors) = value.get("vendors").and_then(|v| v.as_array()) {
        for (i, vendor) in vendors.iter().enumerate() {
            let Some(actions) = vendor.get("actions").and_then(|v| v.as_object()) else {
                continue;
            };
            for flag in known_flags {
                if !actions.contains_key(*flag) {
                    errors.push(format!("{name}: vendors[{i}].actions is missing '{flag}'"));
                }
            }
            for key in actions.keys() {
                if !known_flags.contains(&key.as_str()) {
                    errors.push(format!("{name}: vendors[{i}].actions has unknown flag '{key}'"));
                }
            }
        }
    }

    errors
}

fn report_paths(args: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    if !args.is_empty() {
        return Ok(args.iter().map(PathBuf::from).collect());
    }

    let dir = golden_reports_dir();
    let mut paths = Vec::new();
    for entry in fs::read_dir(&dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        let is_report = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("expected_") && n.ends_with(".json"));
        if is_report {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Validate reports against the generated report schema plus hygiene rules.
fn conform(args: &[String]) -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_report_schema()).context("Failed to encode schema")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile report schema: {e}"))?;
    println!("✓ tcfguard.report.v1 schema compiles");

    let paths = report_paths(args)?;
    if paths.is_empty() {
        bail!("no reports to check");
    }

    let mut errors = Vec::new();
    for path in &paths {
        let name = display_name(path);
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {name} as JSON"))?;
        let value = normalize_nondeterministic(value);

        for err in validator.iter_errors(&value) {
            errors.push(format!("{name}: schema validation: {err}"));
        }
        errors.extend(report_hygiene(&name, &value));
    }

    if errors.is_empty() {
        println!("✓ {} reports conform", paths.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!("Report conformance failed with {} errors", errors.len())
    }
}

/// Validate that all purpose keys, flags and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let groups: [(&str, &[&str]); 3] = [
        ("Purpose key", explain::all_purpose_keys()),
        ("Flag", explain::all_flags()),
        ("Code", explain::all_codes()),
    ];

    let mut errors = Vec::new();
    for (kind, ids) in groups {
        for id in ids {
            match explain::lookup_explanation(id) {
                Some(exp) => {
                    if exp.title.is_empty() {
                        errors.push(format!("{kind} '{id}' has empty title"));
                    }
                    if exp.description.is_empty() {
                        errors.push(format!("{kind} '{id}' has empty description"));
                    }
                    if exp.remediation.is_empty() {
                        errors.push(format!("{kind} '{id}' has empty remediation"));
                    }
                }
                None => errors.push(format!("{kind} '{id}' has no explanation")),
            }
        }
    }

    if errors.is_empty() {
        for (kind, ids) in groups {
            println!("✓ {} {kind}s have explanations", ids.len());
        }
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!("Explain coverage validation failed with {} errors", errors.len())
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform [PATH..]  Validate reports (default: golden fixtures) against the schema");
    eprintln!("  explain-coverage  Validate all purpose keys, flags and codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");
    let rest = args.get(2..).unwrap_or_default();

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(rest),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
