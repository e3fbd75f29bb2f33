//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Vendor exception bypass and return-set membership
//! - Single-writer isolation of purpose flags
//! - Idempotence of purpose evaluation
//! - Monotonicity across enforcement modes

use crate::consent::{ConsentRecord, DecodedConsent, PublisherRestriction, RestrictionType};
use crate::engine::{EnforcementRequest, evaluate};
use crate::model::{Bidder, EnforcementFlag, VendorPermission};
use crate::policy::{EffectiveConfig, PurposeConfig};
use crate::purpose::{EnforcementMode, PurposeId};
use crate::purposes::{PurposeStrategy, purpose_strategy};
use crate::test_support::refs;
use crate::typestrategies::{
    BasicEnforcePurposeStrategy, FullEnforcePurposeStrategy, NoEnforcePurposeStrategy,
    TypeStrategy,
};
use crate::vendor_list::{VendorDeclaration, VendorList};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_purpose() -> impl Strategy<Value = PurposeId> {
    (0usize..10).prop_map(|idx| PurposeId::ALL[idx])
}

/// Subset of purposes 1..=10, one coin flip per purpose.
fn arb_purpose_codes() -> impl Strategy<Value = BTreeSet<u8>> {
    prop::collection::vec(any::<bool>(), 10).prop_map(|mask| {
        (1u8..=10)
            .zip(mask)
            .filter_map(|(code, set)| set.then_some(code))
            .collect()
    })
}

/// Subset of vendor ids 1..=6.
fn arb_vendor_ids() -> impl Strategy<Value = BTreeSet<u32>> {
    prop::collection::vec(any::<bool>(), 6).prop_map(|mask| {
        (1u32..=6)
            .zip(mask)
            .filter_map(|(id, set)| set.then_some(id))
            .collect()
    })
}

fn arb_restriction_type() -> impl Strategy<Value = RestrictionType> {
    prop_oneof![
        Just(RestrictionType::NotAllowed),
        Just(RestrictionType::RequireConsent),
        Just(RestrictionType::RequireLegitimateInterest),
        Just(RestrictionType::Undefined),
    ]
}

fn arb_restriction() -> impl Strategy<Value = PublisherRestriction> {
    (1u8..=10, arb_restriction_type(), arb_vendor_ids()).prop_map(
        |(purpose_id, restriction_type, vendor_ids)| PublisherRestriction {
            purpose_id,
            restriction_type,
            vendor_ids,
        },
    )
}

/// Several restrictions on one purpose, so the same vendor is often listed more than once.
fn arb_overlapping_restrictions(
    purpose: PurposeId,
) -> impl Strategy<Value = Vec<PublisherRestriction>> {
    prop::collection::vec((arb_restriction_type(), arb_vendor_ids()), 1..5).prop_map(
        move |entries| {
            entries
                .into_iter()
                .map(|(restriction_type, vendor_ids)| PublisherRestriction {
                    purpose_id: purpose.code(),
                    restriction_type,
                    vendor_ids,
                })
                .collect()
        },
    )
}

fn arb_consent() -> impl Strategy<Value = DecodedConsent> {
    (
        arb_purpose_codes(),
        arb_purpose_codes(),
        arb_vendor_ids(),
        arb_vendor_ids(),
        any::<bool>(),
        prop::collection::vec(arb_restriction(), 0..6),
    )
        .prop_map(
            |(purposes, li, vendors, vendor_li, geo, restrictions)| DecodedConsent {
                purposes_consent: purposes,
                purposes_li_transparency: li,
                vendor_consent: vendors,
                vendor_legitimate_interest: vendor_li,
                special_feature_opt_ins: if geo { BTreeSet::from([1]) } else { BTreeSet::new() },
                purpose_one_treatment: false,
                publisher_restrictions: restrictions,
            },
        )
}

fn arb_declaration(id: u32) -> impl Strategy<Value = VendorDeclaration> {
    (arb_purpose_codes(), arb_purpose_codes(), arb_purpose_codes()).prop_map(
        move |(purposes, leg_int_purposes, flexible_purposes)| VendorDeclaration {
            id,
            name: format!("vendor-{id}"),
            purposes,
            leg_int_purposes,
            flexible_purposes,
            special_features: BTreeSet::new(),
        },
    )
}

fn arb_vendor_list() -> impl Strategy<Value = VendorList> {
    arb_vendor_ids().prop_flat_map(|ids| {
        ids.into_iter()
            .map(arb_declaration)
            .collect::<Vec<_>>()
            .prop_map(|declarations| VendorList {
                vendor_list_version: 1,
                vendors: declarations.into_iter().map(|d| (d.id, d)).collect(),
            })
    })
}

/// Bidders named `b0..bN` with an optional vendor id.
fn arb_permissions() -> impl Strategy<Value = Vec<VendorPermission>> {
    prop::collection::vec(prop::option::of(1u32..=6), 0..8).prop_map(|ids| {
        ids.into_iter()
            .enumerate()
            .map(|(idx, id)| VendorPermission::new(format!("b{idx}"), id))
            .collect()
    })
}

fn arb_exceptions() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set((0usize..8).prop_map(|idx| format!("b{idx}")), 0..4)
}

/// A mode the purpose supports.
fn arb_supported_mode(purpose: PurposeId) -> BoxedStrategy<EnforcementMode> {
    if purpose_strategy(purpose).supports_full() {
        prop_oneof![
            Just(EnforcementMode::Full),
            Just(EnforcementMode::Basic),
            Just(EnforcementMode::No),
        ]
        .boxed()
    } else {
        prop_oneof![Just(EnforcementMode::Basic), Just(EnforcementMode::No)].boxed()
    }
}

fn arb_purpose_and_config() -> impl Strategy<Value = (PurposeId, PurposeConfig)> {
    arb_purpose().prop_flat_map(|purpose| {
        (
            Just(purpose),
            arb_supported_mode(purpose),
            any::<bool>(),
            arb_exceptions(),
        )
            .prop_map(|(purpose, mode, enforce_vendors, vendor_exceptions)| {
                (
                    purpose,
                    PurposeConfig {
                        enforcement_mode: Some(mode),
                        enforce_vendors,
                        vendor_exceptions,
                    },
                )
            })
    })
}

fn allowed_names(
    strategy: &dyn TypeStrategy,
    purpose: PurposeId,
    consent: &dyn ConsentRecord,
    vendor_list: &VendorList,
    permissions: &[VendorPermission],
    enforce_vendors: bool,
) -> BTreeSet<String> {
    let candidates = refs(permissions);
    strategy
        .allowed_by_type_strategy(purpose, consent, vendor_list, &candidates, enforce_vendors)
        .into_iter()
        .map(|p| p.bidder_name().to_string())
        .collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn exception_bypass_is_unconditional(
        (purpose, cfg) in arb_purpose_and_config(),
        consent in prop::option::of(arb_consent()),
        vendor_list in arb_vendor_list(),
        mut perms in arb_permissions(),
    ) {
        let strategy = purpose_strategy(purpose);
        let owned = EnforcementFlag::owned_by(purpose);
        let record = consent.as_ref().map(|c| c as &dyn ConsentRecord);

        let out = strategy
            .process_type_purpose_strategy(record, &vendor_list, &cfg, &mut perms)
            .expect("supported mode");

        for permission in out.iter() {
            if cfg.is_vendor_exception(permission.bidder_name()) {
                prop_assert!(!permission.action().is_blocked(owned));
            }
        }
    }

    #[test]
    fn result_contains_every_input_exactly_once(
        (purpose, cfg) in arb_purpose_and_config(),
        consent in arb_consent(),
        vendor_list in arb_vendor_list(),
        mut perms in arb_permissions(),
    ) {
        let before: Vec<(String, Option<u32>)> = perms
            .iter()
            .map(|p| (p.bidder_name().to_string(), p.vendor_id()))
            .collect();

        let out = purpose_strategy(purpose)
            .process_type_purpose_strategy(Some(&consent), &vendor_list, &cfg, &mut perms)
            .expect("supported mode");

        let after: Vec<(String, Option<u32>)> = out
            .iter()
            .map(|p| (p.bidder_name().to_string(), p.vendor_id()))
            .collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn purpose_never_writes_foreign_flags(
        (purpose, cfg) in arb_purpose_and_config(),
        consent in arb_consent(),
        vendor_list in arb_vendor_list(),
        mut perms in arb_permissions(),
        pre_permitted in prop::collection::vec(0usize..11, 0..6),
    ) {
        for permission in perms.iter_mut() {
            for idx in &pre_permitted {
                permission.action_mut().permit(EnforcementFlag::ALL[*idx]);
            }
        }
        let before: Vec<_> = perms.iter().map(|p| p.action().clone()).collect();
        let owned = EnforcementFlag::owned_by(purpose);

        purpose_strategy(purpose)
            .process_type_purpose_strategy(Some(&consent), &vendor_list, &cfg, &mut perms)
            .expect("supported mode");

        for (permission, prior) in perms.iter().zip(&before) {
            for flag in EnforcementFlag::ALL {
                if flag != owned {
                    prop_assert_eq!(permission.action().is_blocked(flag), prior.is_blocked(flag));
                } else if !prior.is_blocked(flag) {
                    // Never re-restricted.
                    prop_assert!(!permission.action().is_blocked(flag));
                }
            }
        }
    }

    #[test]
    fn processing_twice_equals_processing_once(
        (purpose, cfg) in arb_purpose_and_config(),
        consent in arb_consent(),
        vendor_list in arb_vendor_list(),
        perms in arb_permissions(),
    ) {
        let strategy = purpose_strategy(purpose);

        let mut once = perms.clone();
        strategy
            .process_type_purpose_strategy(Some(&consent), &vendor_list, &cfg, &mut once)
            .expect("supported mode");

        let mut twice = perms;
        for _ in 0..2 {
            strategy
                .process_type_purpose_strategy(Some(&consent), &vendor_list, &cfg, &mut twice)
                .expect("supported mode");
        }

        let once: Vec<_> = once.iter().map(|p| p.action().clone()).collect();
        let twice: Vec<_> = twice.iter().map(|p| p.action().clone()).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn modes_are_monotonic(
        purpose in arb_purpose(),
        consent in arb_consent(),
        vendor_list in arb_vendor_list(),
        perms in arb_permissions(),
        enforce_vendors in any::<bool>(),
    ) {
        let allowed = |strategy: &dyn TypeStrategy| {
            allowed_names(strategy, purpose, &consent, &vendor_list, &perms, enforce_vendors)
        };
        let no = allowed(&NoEnforcePurposeStrategy);
        let basic = allowed(&BasicEnforcePurposeStrategy);
        let full = allowed(&FullEnforcePurposeStrategy);

        prop_assert!(basic.is_subset(&no), "basic {:?} not within no {:?}", basic, no);
        prop_assert!(full.is_subset(&basic), "full {:?} not within basic {:?}", full, basic);
    }

    #[test]
    fn full_never_allows_a_vendor_under_not_allowed(
        (purpose, restrictions) in arb_purpose()
            .prop_flat_map(|purpose| (Just(purpose), arb_overlapping_restrictions(purpose))),
        consent in arb_consent(),
        vendor_list in arb_vendor_list(),
        perms in arb_permissions(),
        enforce_vendors in any::<bool>(),
    ) {
        let consent = DecodedConsent {
            publisher_restrictions: restrictions.clone(),
            ..consent
        };
        let barred: BTreeSet<u32> = restrictions
            .iter()
            .filter(|r| r.restriction_type == RestrictionType::NotAllowed)
            .flat_map(|r| r.vendor_ids.iter().copied())
            .collect();

        let candidates = refs(&perms);
        let allowed = FullEnforcePurposeStrategy.allowed_by_type_strategy(
            purpose,
            &consent,
            &vendor_list,
            &candidates,
            enforce_vendors,
        );

        for permission in allowed {
            let vendor_id = permission.vendor_id();
            prop_assert!(
                vendor_id.is_none_or(|id| !barred.contains(&id)),
                "vendor {:?} allowed despite NotAllowed",
                vendor_id
            );
        }
    }

    #[test]
    fn evaluate_is_deterministic_and_passes_without_unsupported_modes(
        consent in arb_consent(),
        vendor_list in arb_vendor_list(),
        ids in prop::collection::vec(prop::option::of(1u32..=6), 0..6),
    ) {
        let bidders: Vec<Bidder> = ids
            .iter()
            .enumerate()
            .rev()
            .map(|(idx, id)| Bidder::new(format!("b{idx}"), *id))
            .collect();
        let request = EnforcementRequest {
            bidders: &bidders,
            consent: Some(&consent),
            vendor_list: Some(&vendor_list),
        };
        let cfg = EffectiveConfig::default();

        let first = evaluate(&request, &cfg);
        let second = evaluate(&request, &cfg);

        prop_assert_eq!(first.verdict, tcfguard_types::Verdict::Pass);
        prop_assert_eq!(first.vendor_decisions(), second.vendor_decisions());
        prop_assert_eq!(first.permissions.len(), bidders.len());
        let names: Vec<&str> = first.permissions.iter().map(|p| p.bidder_name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        prop_assert_eq!(names, sorted);
    }
}
