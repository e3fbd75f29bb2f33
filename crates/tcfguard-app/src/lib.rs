//! Use case orchestration for tcfguard.
//!
//! This crate provides the application layer: use cases that coordinate settings resolution, the
//! domain engine and rendering. The CLI crate depends on this; it only handles argument parsing
//! and I/O.

#![forbid(unsafe_code)]

mod enforce;
mod explain;
mod render;
mod report;

pub use enforce::{EnforceInput, EnforceOutput, parse_bidder, run_enforce, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::render_markdown;
pub use report::{parse_report_json, runtime_error_report, serialize_report};
