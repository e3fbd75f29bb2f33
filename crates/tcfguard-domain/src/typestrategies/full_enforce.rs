use super::{TypeStrategy, consent_basis, legitimate_interest_basis};
use crate::consent::{ConsentRecord, RestrictionType};
use crate::model::VendorPermission;
use crate::purpose::PurposeId;
use crate::vendor_list::{VendorDeclaration, VendorList};

/// Strictest policy: the vendor must declare a legal basis for the purpose in the vendor list,
/// publisher restrictions apply, and the consent record must support that basis.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullEnforcePurposeStrategy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LegalBasis {
    Consent,
    LegitimateInterest,
}

impl TypeStrategy for FullEnforcePurposeStrategy {
    fn allowed_by_type_strategy<'a>(
        &self,
        purpose: PurposeId,
        consent: &dyn ConsentRecord,
        vendor_list: &VendorList,
        candidates: &[&'a VendorPermission],
        enforce_vendors: bool,
    ) -> Vec<&'a VendorPermission> {
        candidates
            .iter()
            .copied()
            .filter(|permission| {
                let Some(vendor_id) = permission.vendor_id() else {
                    return false;
                };
                let Some(declaration) = vendor_list.vendor(vendor_id) else {
                    return false;
                };
                let restriction = consent.publisher_restriction(purpose, vendor_id);
                match effective_basis(purpose, declaration, restriction) {
                    Some(LegalBasis::Consent) => {
                        consent_basis(purpose, consent, Some(vendor_id), enforce_vendors)
                    }
                    Some(LegalBasis::LegitimateInterest) => {
                        legitimate_interest_basis(purpose, consent, Some(vendor_id), enforce_vendors)
                    }
                    None => false,
                }
            })
            .collect()
    }
}

/// The basis the vendor may operate on after publisher restrictions, or `None` if it may not
/// operate at all.
fn effective_basis(
    purpose: PurposeId,
    declaration: &VendorDeclaration,
    restriction: Option<RestrictionType>,
) -> Option<LegalBasis> {
    if restriction == Some(RestrictionType::NotAllowed) {
        return None;
    }

    let declared = if declaration.declares_consent(purpose) {
        LegalBasis::Consent
    } else if declaration.declares_legitimate_interest(purpose) {
        LegalBasis::LegitimateInterest
    } else {
        return None;
    };

    let required = match restriction {
        Some(RestrictionType::RequireConsent) => LegalBasis::Consent,
        Some(RestrictionType::RequireLegitimateInterest) => LegalBasis::LegitimateInterest,
        _ => return Some(declared),
    };

    if required == declared || declaration.is_flexible(purpose) {
        Some(required)
    } else {
        None
    }
}
