use crate::consent::ConsentRecord;
use crate::model::{Bidder, EnforcementFlag, VendorPermission};
use crate::policy::{EffectiveConfig, PurposeOneTreatmentInterpretation};
use crate::purpose::PurposeId;
use crate::purposes::{PurposeStrategy, all_purpose_strategies};
use crate::report::{DomainReport, PurposeFailure};
use crate::special_features::PreciseGeolocationStrategy;
use crate::vendor_list::VendorList;
use std::collections::BTreeMap;
use tcfguard_types::{TcfData, Verdict};

/// Everything a single auction request contributes to enforcement.
#[derive(Clone, Copy)]
pub struct EnforcementRequest<'a> {
    pub bidders: &'a [Bidder],
    /// `None` means no consent for anything.
    pub consent: Option<&'a dyn ConsentRecord>,
    /// `None` is treated as an empty list.
    pub vendor_list: Option<&'a VendorList>,
}

pub fn evaluate(request: &EnforcementRequest<'_>, cfg: &EffectiveConfig) -> DomainReport {
    let empty_list = VendorList::empty();
    let vendor_list = request.vendor_list.unwrap_or(&empty_list);

    let (mut weak, mut standard): (Vec<VendorPermission>, Vec<VendorPermission>) = request
        .bidders
        .iter()
        .map(VendorPermission::from)
        .partition(|p| cfg.is_basic_enforcement_vendor(p.bidder_name()));

    let treatment = request.consent.is_some_and(|c| c.purpose_one_treatment());

    let mut failures: Vec<PurposeFailure> = Vec::new();
    let mut purposes_evaluated = 0u32;

    for strategy in all_purpose_strategies() {
        let purpose = strategy.purpose_id();

        if purpose == PurposeId::One && treatment {
            match cfg.purpose_one_treatment_interpretation {
                PurposeOneTreatmentInterpretation::Ignore => {}
                PurposeOneTreatmentInterpretation::NoAccessAllowed => {
                    tracing::debug!("purpose one treatment: access not allowed");
                    purposes_evaluated += 1;
                    continue;
                }
                PurposeOneTreatmentInterpretation::AccessAllowed => {
                    tracing::debug!("purpose one treatment: access allowed");
                    for permission in standard.iter_mut().chain(weak.iter_mut()) {
                        strategy.allow(permission.action_mut());
                    }
                    purposes_evaluated += 1;
                    continue;
                }
            }
        }

        match run_purpose(strategy.as_ref(), request, vendor_list, cfg, &mut standard, &mut weak) {
            Ok(()) => purposes_evaluated += 1,
            Err(error) => {
                tracing::warn!(
                    purpose = %purpose,
                    code = error.code(),
                    "{error}; purpose left fully restricted"
                );
                failures.push(PurposeFailure { purpose, error });
            }
        }
    }

    let mut permissions = standard;
    permissions.append(&mut weak);

    PreciseGeolocationStrategy.process(
        request.consent,
        &cfg.precise_geolocation,
        &mut permissions,
    );

    permissions.sort_by(|a, b| {
        a.bidder_name()
            .cmp(b.bidder_name())
            .then(a.vendor_id().cmp(&b.vendor_id()))
    });

    let verdict = if failures.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    let data = TcfData {
        profile: cfg.profile.clone(),
        bidders_scanned: saturating_count(permissions.len()),
        purposes_evaluated,
        purposes_failed: saturating_count(failures.len()),
        permitted: permitted_counts(&permissions),
    };

    DomainReport {
        verdict,
        permissions,
        failures,
        data,
    }
}

/// Standard bidders first, then basic-enforcement bidders under weakened settings. An error on
/// the standard slice leaves both slices untouched.
fn run_purpose(
    strategy: &dyn PurposeStrategy,
    request: &EnforcementRequest<'_>,
    vendor_list: &VendorList,
    cfg: &EffectiveConfig,
    standard: &mut [VendorPermission],
    weak: &mut [VendorPermission],
) -> Result<(), crate::error::EnforcementError> {
    let purpose_cfg = cfg.purpose_config(strategy.purpose_id());
    strategy.process_type_purpose_strategy(request.consent, vendor_list, &purpose_cfg, standard)?;
    strategy.process_type_purpose_strategy(
        request.consent,
        vendor_list,
        &purpose_cfg.weakened(),
        weak,
    )?;
    Ok(())
}

fn permitted_counts(permissions: &[VendorPermission]) -> BTreeMap<String, u32> {
    EnforcementFlag::ALL
        .into_iter()
        .map(|flag| {
            let count = saturating_count(
                permissions
                    .iter()
                    .filter(|p| !p.action().is_blocked(flag))
                    .count(),
            );
            (flag.id().to_string(), count)
        })
        .collect()
}

/// Report counters are `u32`; clamp rather than wrap.
fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
