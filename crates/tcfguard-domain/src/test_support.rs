use crate::consent::{DecodedConsent, PublisherRestriction, RestrictionType};
use crate::model::VendorPermission;
use crate::policy::PurposeConfig;
use crate::purpose::{EnforcementMode, PurposeId};
use crate::vendor_list::{VendorDeclaration, VendorList};
use std::collections::BTreeSet;

pub fn permissions(bidders: &[(&str, Option<u32>)]) -> Vec<VendorPermission> {
    bidders
        .iter()
        .map(|(name, id)| VendorPermission::new(*name, *id))
        .collect()
}

pub fn refs(permissions: &[VendorPermission]) -> Vec<&VendorPermission> {
    permissions.iter().collect()
}

pub fn names<'a>(permissions: &[&'a VendorPermission]) -> Vec<&'a str> {
    permissions.iter().map(|p| p.bidder_name()).collect()
}

/// Purpose consent for `purposes` and vendor consent for `vendors`.
pub fn consent(purposes: &[u8], vendors: &[u32]) -> DecodedConsent {
    DecodedConsent {
        purposes_consent: purposes.iter().copied().collect(),
        vendor_consent: vendors.iter().copied().collect(),
        ..DecodedConsent::default()
    }
}

/// Purpose LI transparency for `purposes` and vendor LI for `vendors`.
pub fn legitimate_interest(purposes: &[u8], vendors: &[u32]) -> DecodedConsent {
    DecodedConsent {
        purposes_li_transparency: purposes.iter().copied().collect(),
        vendor_legitimate_interest: vendors.iter().copied().collect(),
        ..DecodedConsent::default()
    }
}

pub fn with_restriction(
    mut consent: DecodedConsent,
    purpose: PurposeId,
    restriction_type: RestrictionType,
    vendors: &[u32],
) -> DecodedConsent {
    consent.publisher_restrictions.push(PublisherRestriction {
        purpose_id: purpose.code(),
        restriction_type,
        vendor_ids: vendors.iter().copied().collect(),
    });
    consent
}

pub fn declaration(id: u32, purposes: &[u8], leg_int: &[u8], flexible: &[u8]) -> VendorDeclaration {
    VendorDeclaration {
        id,
        name: format!("vendor-{id}"),
        purposes: purposes.iter().copied().collect(),
        leg_int_purposes: leg_int.iter().copied().collect(),
        flexible_purposes: flexible.iter().copied().collect(),
        special_features: BTreeSet::new(),
    }
}

pub fn vendor_list(declarations: Vec<VendorDeclaration>) -> VendorList {
    VendorList {
        vendor_list_version: 1,
        vendors: declarations.into_iter().map(|d| (d.id, d)).collect(),
    }
}

pub fn purpose_config(
    mode: EnforcementMode,
    enforce_vendors: bool,
    exceptions: &[&str],
) -> PurposeConfig {
    PurposeConfig {
        enforcement_mode: Some(mode),
        enforce_vendors,
        vendor_exceptions: exceptions.iter().map(|e| e.to_string()).collect(),
    }
}
