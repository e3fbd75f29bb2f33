//! Config parsing and profile/preset resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{PurposeSettings, SCHEMA_CONFIG_V1, SpecialFeatureSettings, TcfConfigV1};
pub use presets::preset;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `tcfguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<TcfConfigV1> {
    let cfg: TcfConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine.
///
/// Layering, lowest to highest: profile preset, host config, account config, overrides.
pub fn resolve_config(
    host: TcfConfigV1,
    account: Option<TcfConfigV1>,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(host, account, overrides)
}
