//! Read-only view of a decoded TCF v2 consent record.
//!
//! Decoding the wire-format consent string happens elsewhere; this module only defines the
//! queries the engine needs plus a serde boundary format holding already-decoded bit sets.

use crate::purpose::PurposeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Queries the engine asks of a consent record.
///
/// Supplemental queries default to the restrictive answer.
pub trait ConsentRecord {
    /// Aggregate, vendor-independent purpose consent.
    fn has_purpose_consent(&self, purpose: PurposeId) -> bool;

    fn has_vendor_consent(&self, vendor_id: u32, purpose: PurposeId) -> bool;

    fn has_vendor_legitimate_interest(&self, vendor_id: u32, purpose: PurposeId) -> bool;

    /// Purpose-level legitimate-interest transparency.
    fn has_purpose_legitimate_interest(&self, _purpose: PurposeId) -> bool {
        false
    }

    fn publisher_restriction(&self, _purpose: PurposeId, _vendor_id: u32) -> Option<RestrictionType> {
        None
    }

    fn has_special_feature_opt_in(&self, _feature: u8) -> bool {
        false
    }

    fn purpose_one_treatment(&self) -> bool {
        false
    }
}

/// Stand-in for an absent consent record: nothing is consented.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoConsent;

impl ConsentRecord for NoConsent {
    fn has_purpose_consent(&self, _purpose: PurposeId) -> bool {
        false
    }

    fn has_vendor_consent(&self, _vendor_id: u32, _purpose: PurposeId) -> bool {
        false
    }

    fn has_vendor_legitimate_interest(&self, _vendor_id: u32, _purpose: PurposeId) -> bool {
        false
    }
}

/// Publisher restriction type as encoded in the consent string's restriction section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionType {
    NotAllowed,
    RequireConsent,
    RequireLegitimateInterest,
    #[serde(other)]
    Undefined,
}

impl RestrictionType {
    /// The stricter of two restrictions listed for the same purpose and vendor. `NotAllowed`
    /// wins; requiring both consent and legitimate interest is unsatisfiable and becomes
    /// `NotAllowed`; `Undefined` yields to anything.
    pub fn combine(self, other: RestrictionType) -> RestrictionType {
        use RestrictionType::*;
        match (self, other) {
            (NotAllowed, _) | (_, NotAllowed) => NotAllowed,
            (RequireConsent, RequireLegitimateInterest)
            | (RequireLegitimateInterest, RequireConsent) => NotAllowed,
            (Undefined, other) => other,
            (this, _) => this,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherRestriction {
    pub purpose_id: u8,
    pub restriction_type: RestrictionType,
    #[serde(default)]
    pub vendor_ids: BTreeSet<u32>,
}

/// Already-decoded consent bits.
///
/// Vendor bits are not purpose-scoped in TCF v2: a vendor consent bit covers every purpose the
/// user consented to at the purpose level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecodedConsent {
    pub purposes_consent: BTreeSet<u8>,
    #[serde(rename = "purposesLITransparency")]
    pub purposes_li_transparency: BTreeSet<u8>,
    pub vendor_consent: BTreeSet<u32>,
    pub vendor_legitimate_interest: BTreeSet<u32>,
    pub special_feature_opt_ins: BTreeSet<u8>,
    pub purpose_one_treatment: bool,
    pub publisher_restrictions: Vec<PublisherRestriction>,
}

impl DecodedConsent {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl ConsentRecord for DecodedConsent {
    fn has_purpose_consent(&self, purpose: PurposeId) -> bool {
        self.purposes_consent.contains(&purpose.code())
    }

    fn has_vendor_consent(&self, vendor_id: u32, _purpose: PurposeId) -> bool {
        self.vendor_consent.contains(&vendor_id)
    }

    fn has_vendor_legitimate_interest(&self, vendor_id: u32, _purpose: PurposeId) -> bool {
        self.vendor_legitimate_interest.contains(&vendor_id)
    }

    fn has_purpose_legitimate_interest(&self, purpose: PurposeId) -> bool {
        self.purposes_li_transparency.contains(&purpose.code())
    }

    /// Every matching restriction is folded with [`RestrictionType::combine`].
    fn publisher_restriction(&self, purpose: PurposeId, vendor_id: u32) -> Option<RestrictionType> {
        self.publisher_restrictions
            .iter()
            .filter(|r| r.purpose_id == purpose.code() && r.vendor_ids.contains(&vendor_id))
            .map(|r| r.restriction_type)
            .reduce(RestrictionType::combine)
    }

    fn has_special_feature_opt_in(&self, feature: u8) -> bool {
        self.special_feature_opt_ins.contains(&feature)
    }

    fn purpose_one_treatment(&self) -> bool {
        self.purpose_one_treatment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_boundary_format() {
        let consent = DecodedConsent::from_json(
            r#"{
                "purposesConsent": [1, 2],
                "purposesLITransparency": [7],
                "vendorConsent": [52],
                "vendorLegitimateInterest": [32],
                "specialFeatureOptIns": [1],
                "publisherRestrictions": [
                    {"purposeId": 2, "restrictionType": "not_allowed", "vendorIds": [52]},
                    {"purposeId": 3, "restrictionType": "something_new", "vendorIds": [52]}
                ]
            }"#,
        )
        .expect("parse consent");

        assert!(consent.has_purpose_consent(PurposeId::One));
        assert!(!consent.has_purpose_consent(PurposeId::Three));
        assert!(consent.has_purpose_legitimate_interest(PurposeId::Seven));
        assert!(consent.has_vendor_consent(52, PurposeId::Two));
        assert!(!consent.has_vendor_consent(32, PurposeId::Two));
        assert!(consent.has_vendor_legitimate_interest(32, PurposeId::Seven));
        assert!(consent.has_special_feature_opt_in(1));
        assert!(!consent.purpose_one_treatment());
        assert_eq!(
            consent.publisher_restriction(PurposeId::Two, 52),
            Some(RestrictionType::NotAllowed)
        );
        assert_eq!(
            consent.publisher_restriction(PurposeId::Three, 52),
            Some(RestrictionType::Undefined)
        );
        assert_eq!(consent.publisher_restriction(PurposeId::Two, 32), None);
    }

    #[test]
    fn overlapping_restrictions_resolve_to_the_strictest() {
        let record = |types: &[RestrictionType]| DecodedConsent {
            publisher_restrictions: types
                .iter()
                .map(|restriction_type| PublisherRestriction {
                    purpose_id: 4,
                    restriction_type: *restriction_type,
                    vendor_ids: BTreeSet::from([1]),
                })
                .collect(),
            ..DecodedConsent::default()
        };
        let resolved = |types: &[RestrictionType]| {
            record(types).publisher_restriction(PurposeId::Four, 1)
        };

        use RestrictionType::*;
        assert_eq!(resolved(&[Undefined, NotAllowed]), Some(NotAllowed));
        assert_eq!(resolved(&[RequireConsent, NotAllowed]), Some(NotAllowed));
        assert_eq!(resolved(&[NotAllowed, RequireLegitimateInterest]), Some(NotAllowed));
        assert_eq!(resolved(&[RequireConsent, RequireLegitimateInterest]), Some(NotAllowed));
        assert_eq!(resolved(&[Undefined, RequireConsent]), Some(RequireConsent));
        assert_eq!(resolved(&[RequireConsent, RequireConsent]), Some(RequireConsent));
        assert_eq!(resolved(&[Undefined]), Some(Undefined));
        assert_eq!(resolved(&[]), None);
    }

    #[test]
    fn empty_object_consents_to_nothing() {
        let consent = DecodedConsent::from_json("{}").expect("parse consent");
        for purpose in PurposeId::ALL {
            assert!(!consent.has_purpose_consent(purpose));
            assert!(!consent.has_purpose_legitimate_interest(purpose));
        }
    }

    #[test]
    fn no_consent_answers_restrictively() {
        let consent = NoConsent;
        assert!(!consent.has_purpose_consent(PurposeId::One));
        assert!(!consent.has_vendor_consent(1, PurposeId::One));
        assert!(!consent.has_vendor_legitimate_interest(1, PurposeId::One));
        assert!(!consent.has_purpose_legitimate_interest(PurposeId::One));
        assert_eq!(consent.publisher_restriction(PurposeId::One, 1), None);
        assert!(!consent.has_special_feature_opt_in(1));
        assert!(!consent.purpose_one_treatment());
    }
}
