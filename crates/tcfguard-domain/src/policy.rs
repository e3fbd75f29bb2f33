use crate::purpose::{EnforcementMode, PurposeId};
use std::collections::{BTreeMap, BTreeSet};

/// Per-purpose account settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurposeConfig {
    /// `None` resolves to `basic`.
    pub enforcement_mode: Option<EnforcementMode>,
    pub enforce_vendors: bool,
    /// Bidder names exempted from enforcement for this purpose.
    pub vendor_exceptions: BTreeSet<String>,
}

impl Default for PurposeConfig {
    fn default() -> Self {
        Self {
            enforcement_mode: None,
            enforce_vendors: true,
            vendor_exceptions: BTreeSet::new(),
        }
    }
}

impl PurposeConfig {
    pub fn with_mode(mode: EnforcementMode) -> Self {
        Self {
            enforcement_mode: Some(mode),
            ..Self::default()
        }
    }

    pub fn effective_mode(&self) -> EnforcementMode {
        self.enforcement_mode.unwrap_or_default()
    }

    pub fn is_vendor_exception(&self, bidder_name: &str) -> bool {
        self.vendor_exceptions.contains(bidder_name)
    }

    /// Settings applied to basic-enforcement vendors: `full` drops to `basic` and vendor bits are
    /// not consulted. Exceptions are kept.
    pub fn weakened(&self) -> Self {
        let enforcement_mode = match self.effective_mode() {
            EnforcementMode::Full => EnforcementMode::Basic,
            other => other,
        };
        Self {
            enforcement_mode: Some(enforcement_mode),
            enforce_vendors: false,
            vendor_exceptions: self.vendor_exceptions.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecialFeatureConfig {
    pub enforce: bool,
    pub vendor_exceptions: BTreeSet<String>,
}

impl Default for SpecialFeatureConfig {
    fn default() -> Self {
        Self {
            enforce: true,
            vendor_exceptions: BTreeSet::new(),
        }
    }
}

/// How to read a consent record that signals purpose one treatment (purpose 1 not disclosed).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PurposeOneTreatmentInterpretation {
    #[default]
    Ignore,
    NoAccessAllowed,
    AccessAllowed,
}

impl PurposeOneTreatmentInterpretation {
    pub fn as_str(self) -> &'static str {
        match self {
            PurposeOneTreatmentInterpretation::Ignore => "ignore",
            PurposeOneTreatmentInterpretation::NoAccessAllowed => "no_access_allowed",
            PurposeOneTreatmentInterpretation::AccessAllowed => "access_allowed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ignore" => Some(PurposeOneTreatmentInterpretation::Ignore),
            "no_access_allowed" => Some(PurposeOneTreatmentInterpretation::NoAccessAllowed),
            "access_allowed" => Some(PurposeOneTreatmentInterpretation::AccessAllowed),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub purposes: BTreeMap<PurposeId, PurposeConfig>,
    pub precise_geolocation: SpecialFeatureConfig,
    pub purpose_one_treatment_interpretation: PurposeOneTreatmentInterpretation,
    /// Bidders evaluated with weakened purpose settings.
    pub basic_enforcement_vendors: BTreeSet<String>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            profile: "basic".to_string(),
            purposes: PurposeId::ALL
                .into_iter()
                .map(|p| (p, PurposeConfig::default()))
                .collect(),
            precise_geolocation: SpecialFeatureConfig::default(),
            purpose_one_treatment_interpretation: PurposeOneTreatmentInterpretation::default(),
            basic_enforcement_vendors: BTreeSet::new(),
        }
    }
}

impl EffectiveConfig {
    /// Settings for `purpose`; a missing entry means the defaults.
    pub fn purpose_config(&self, purpose: PurposeId) -> PurposeConfig {
        self.purposes.get(&purpose).cloned().unwrap_or_default()
    }

    pub fn is_basic_enforcement_vendor(&self, bidder_name: &str) -> bool {
        self.basic_enforcement_vendors.contains(bidder_name)
    }
}
