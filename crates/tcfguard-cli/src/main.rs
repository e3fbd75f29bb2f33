//! CLI entry point for tcfguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup and exit
//! codes. All business logic lives in the `tcfguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use tcfguard_app::{
    EnforceInput, ExplainOutput, format_explanation, format_not_found, parse_bidder,
    parse_report_json, render_markdown, run_enforce, run_explain, runtime_error_report,
    serialize_report, verdict_exit_code,
};
use tcfguard_settings::Overrides;
use tcfguard_types::TcfReportV1;

#[derive(Parser, Debug)]
#[command(
    name = "tcfguard",
    version,
    about = "TCF v2 purpose enforcement for bidder permissions"
)]
struct Cli {
    /// Path to the host config TOML. A missing file means defaults.
    #[arg(long, default_value = "tcfguard.toml")]
    config: Utf8PathBuf,

    /// Path to an account config TOML layered over the host config.
    #[arg(long)]
    account_config: Option<Utf8PathBuf>,

    /// Override profile (basic|full|no).
    #[arg(long)]
    profile: Option<String>,

    /// Override purpose one treatment interpretation (ignore|no_access_allowed|access_allowed).
    #[arg(long)]
    purpose_one_treatment: Option<String>,

    /// Log level used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate every purpose for a set of bidders and write the report.
    Check {
        /// Decoded consent record (JSON). Omitted means no consent.
        #[arg(long)]
        consent: Option<Utf8PathBuf>,

        /// Global vendor list (JSON). Omitted means an empty list.
        #[arg(long)]
        vendor_list: Option<Utf8PathBuf>,

        /// Bidder as NAME or NAME=VENDOR_ID. Repeatable.
        #[arg(long = "bidder", value_name = "NAME[=VENDOR_ID]")]
        bidders: Vec<String>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/tcfguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/tcfguard/report.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/tcfguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a purpose key, flag name or code.
    Explain {
        /// e.g. "p4", "sf1", "remove_user_buyer_uid" or "full_enforcement_unsupported".
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    match &cli.cmd {
        Commands::Check {
            consent,
            vendor_list,
            bidders,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_check(
            &cli,
            CheckArgs {
                consent: consent.as_deref(),
                vendor_list: vendor_list.as_deref(),
                bidders,
                report_out,
                write_markdown: *write_markdown,
                markdown_out,
            },
        ),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Explain { identifier } => cmd_explain(identifier),
    }
}

fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}

struct CheckArgs<'a> {
    consent: Option<&'a Utf8Path>,
    vendor_list: Option<&'a Utf8Path>,
    bidders: &'a [String],
    report_out: &'a Utf8Path,
    write_markdown: bool,
    markdown_out: &'a Utf8Path,
}

fn cmd_check(cli: &Cli, args: CheckArgs<'_>) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let host_text = read_host_config(&cli.config)?;
        let account_text = cli
            .account_config
            .as_deref()
            .map(|path| read_text(path, "account config"))
            .transpose()?;
        let consent_text = args
            .consent
            .map(|path| read_text(path, "consent record"))
            .transpose()?;
        let vendor_list_text = args
            .vendor_list
            .map(|path| read_text(path, "vendor list"))
            .transpose()?;

        let bidders = args
            .bidders
            .iter()
            .map(|b| parse_bidder(b))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let input = EnforceInput {
            host_config_text: &host_text,
            account_config_text: account_text.as_deref(),
            overrides: Overrides {
                profile: cli.profile.clone(),
                purpose_one_treatment_interpretation: cli.purpose_one_treatment.clone(),
            },
            consent_json: consent_text.as_deref(),
            vendor_list_json: vendor_list_text.as_deref(),
            bidders,
        };

        let output = run_enforce(input)?;

        write_report_file(args.report_out, &output.report).context("write report json")?;

        if args.write_markdown {
            let md = render_markdown(&output.report);
            write_text_file(args.markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            tracing::error!("{err:#}");
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report_file(args.report_out, &report);
            eprintln!("tcfguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// A missing host config means defaults; any other read failure is an error.
fn read_host_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path, "host config not found; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read host config: {path}")),
    }
}

fn read_text(path: &Utf8Path, what: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {what}: {path}"))
}

fn write_report_file(path: &Utf8Path, report: &TcfReportV1) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let data = serialize_report(report)?;
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = read_text(report_path, "report")?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(out_path, &md).context("write markdown output")?;
    } else {
        print!("{md}");
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_purposes,
            available_flags,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_purposes, available_flags, available_codes)
            );
            std::process::exit(1);
        }
    }
}
