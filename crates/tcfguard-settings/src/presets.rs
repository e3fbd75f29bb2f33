use tcfguard_domain::policy::{EffectiveConfig, PurposeConfig};
use tcfguard_domain::purpose::{EnforcementMode, PurposeId};
use tcfguard_domain::purposes::purpose_strategy;

/// Preset profiles. Unknown names fall back to `basic`.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "full" => full_profile(),
        "no" => no_profile(),
        "basic" => basic_profile(),
        other => {
            tracing::warn!(profile = other, "unknown profile, using 'basic'");
            basic_profile()
        }
    }
}

fn basic_profile() -> EffectiveConfig {
    with_modes("basic", |_| EnforcementMode::Basic)
}

/// `full` wherever the purpose implements it.
fn full_profile() -> EffectiveConfig {
    with_modes("full", |purpose| {
        if purpose_strategy(purpose).supports_full() {
            EnforcementMode::Full
        } else {
            EnforcementMode::Basic
        }
    })
}

fn no_profile() -> EffectiveConfig {
    with_modes("no", |_| EnforcementMode::No)
}

fn with_modes(profile: &str, mode: impl Fn(PurposeId) -> EnforcementMode) -> EffectiveConfig {
    EffectiveConfig {
        profile: profile.to_string(),
        purposes: PurposeId::ALL
            .into_iter()
            .map(|p| (p, PurposeConfig::with_mode(mode(p))))
            .collect(),
        ..EffectiveConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_profile_skips_purposes_without_full_support() {
        let cfg = preset("full");
        let basic: Vec<u8> = cfg
            .purposes
            .iter()
            .filter(|(_, c)| c.effective_mode() == EnforcementMode::Basic)
            .map(|(p, _)| p.code())
            .collect();
        assert_eq!(basic, vec![1, 2, 7]);
    }

    #[test]
    fn unknown_profile_falls_back_to_basic() {
        let cfg = preset("strict");
        assert_eq!(cfg.profile, "basic");
        assert!(
            cfg.purposes
                .values()
                .all(|c| c.effective_mode() == EnforcementMode::Basic && c.enforce_vendors)
        );
        assert!(cfg.precise_geolocation.enforce);
    }

    #[test]
    fn no_profile_still_enforces_vendors() {
        let cfg = preset("no");
        assert!(cfg.purposes.values().all(|c| c.enforce_vendors));
        assert_eq!(cfg.purpose_config(PurposeId::Three).effective_mode(), EnforcementMode::No);
    }
}
