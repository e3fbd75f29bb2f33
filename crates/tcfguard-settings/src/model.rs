use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_CONFIG_V1: &str = "tcfguard.config.v1";

/// `tcfguard.toml` schema v1.
///
/// User-facing and permissive: every key is optional and values are validated during resolution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TcfConfigV1 {
    /// Optional schema string for tooling (`tcfguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset: `basic` (default), `full` or `no`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// `ignore` (default), `no_access_allowed` or `access_allowed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose_one_treatment_interpretation: Option<String>,

    /// Bidders evaluated with `full` lowered to `basic` and vendor bits ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_enforcement_vendors: Option<Vec<String>>,

    /// Map of purpose key (`p1`..`p10`) -> settings.
    #[serde(default)]
    pub purposes: BTreeMap<String, PurposeSettings>,

    /// Map of special feature key (`sf1`) -> settings.
    #[serde(default)]
    pub special_features: BTreeMap<String, SpecialFeatureSettings>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PurposeSettings {
    /// `full`, `basic` or `no`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_purpose: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_vendors: Option<bool>,

    /// Bidder names that bypass enforcement for this purpose. Replaces lower layers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_exceptions: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpecialFeatureSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_exceptions: Option<Vec<String>>,
}
