use crate::model::{SCHEMA_CONFIG_V1, TcfConfigV1};
use crate::presets;
use anyhow::Context;
use tcfguard_domain::policy::{EffectiveConfig, PurposeOneTreatmentInterpretation};
use tcfguard_domain::purpose::{EnforcementMode, PurposeId};
use tcfguard_domain::purposes::purpose_strategy;
use tcfguard_types::ids;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub purpose_one_treatment_interpretation: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    host: TcfConfigV1,
    account: Option<TcfConfigV1>,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let layers: Vec<(&str, &TcfConfigV1)> = std::iter::once(("host", &host))
        .chain(account.as_ref().map(|a| ("account", a)))
        .collect();

    for (layer, cfg) in &layers {
        if let Some(schema) = cfg.schema.as_deref()
            && schema != SCHEMA_CONFIG_V1
        {
            anyhow::bail!(
                "unsupported {layer} config schema: {schema} (expected {SCHEMA_CONFIG_V1})"
            );
        }
    }

    let profile = overrides
        .profile
        .clone()
        .or_else(|| layers.iter().rev().find_map(|(_, c)| c.profile.clone()))
        .unwrap_or_else(|| "basic".to_string());

    let mut effective = presets::preset(&profile);

    for (layer, cfg) in &layers {
        apply_layer(&mut effective, cfg).with_context(|| format!("invalid {layer} config"))?;
    }

    if let Some(value) = overrides.purpose_one_treatment_interpretation.as_deref() {
        effective.purpose_one_treatment_interpretation = parse_interpretation(value)?;
    }

    for (purpose, cfg) in &effective.purposes {
        let full = cfg.effective_mode() == EnforcementMode::Full;
        if full && !purpose_strategy(*purpose).supports_full() {
            tracing::warn!(
                purpose = %purpose,
                "full enforcement requested but not implemented; the purpose will fail at evaluation"
            );
        }
    }

    Ok(ResolvedConfig { effective })
}

fn apply_layer(effective: &mut EffectiveConfig, cfg: &TcfConfigV1) -> anyhow::Result<()> {
    if let Some(value) = cfg.purpose_one_treatment_interpretation.as_deref() {
        effective.purpose_one_treatment_interpretation = parse_interpretation(value)?;
    }

    if let Some(vendors) = &cfg.basic_enforcement_vendors {
        effective.basic_enforcement_vendors = vendors.iter().cloned().collect();
    }

    for (key, settings) in &cfg.purposes {
        let purpose = PurposeId::from_config_key(key).with_context(|| {
            format!("{}: unknown purpose key '{key}' (expected p1..p10)", ids::CODE_UNKNOWN_PURPOSE)
        })?;
        let entry = effective.purposes.entry(purpose).or_default();

        if let Some(mode) = settings.enforce_purpose.as_deref() {
            let mode: EnforcementMode = mode
                .parse()
                .with_context(|| format!("invalid enforce_purpose for {key}"))?;
            entry.enforcement_mode = Some(mode);
        }
        if let Some(enforce_vendors) = settings.enforce_vendors {
            entry.enforce_vendors = enforce_vendors;
        }
        if let Some(exceptions) = &settings.vendor_exceptions {
            entry.vendor_exceptions = exceptions.iter().cloned().collect();
        }
    }

    for (key, settings) in &cfg.special_features {
        if key != ids::SPECIAL_FEATURE_PRECISE_GEO {
            anyhow::bail!("unknown special feature key '{key}' (expected sf1)");
        }
        let entry = &mut effective.precise_geolocation;
        if let Some(enforce) = settings.enforce {
            entry.enforce = enforce;
        }
        if let Some(exceptions) = &settings.vendor_exceptions {
            entry.vendor_exceptions = exceptions.iter().cloned().collect();
        }
    }

    Ok(())
}

fn parse_interpretation(v: &str) -> anyhow::Result<PurposeOneTreatmentInterpretation> {
    PurposeOneTreatmentInterpretation::parse(v).with_context(|| {
        format!(
            "unknown purpose_one_treatment_interpretation: {v} \
             (expected ignore|no_access_allowed|access_allowed)"
        )
    })
}
