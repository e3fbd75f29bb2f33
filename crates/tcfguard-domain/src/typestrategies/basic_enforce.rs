use super::TypeStrategy;
use crate::consent::ConsentRecord;
use crate::model::VendorPermission;
use crate::purpose::PurposeId;
use crate::vendor_list::VendorList;

/// Default policy: the purpose must be established on consent or on legitimate interest.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicEnforcePurposeStrategy;

impl TypeStrategy for BasicEnforcePurposeStrategy {
    fn allowed_by_type_strategy<'a>(
        &self,
        purpose: PurposeId,
        consent: &dyn ConsentRecord,
        _vendor_list: &VendorList,
        candidates: &[&'a VendorPermission],
        enforce_vendors: bool,
    ) -> Vec<&'a VendorPermission> {
        candidates
            .iter()
            .copied()
            .filter(|permission| {
                let vendor_id = permission.vendor_id();
                consent_basis(purpose, consent, vendor_id, enforce_vendors)
                    || legitimate_interest_basis(purpose, consent, vendor_id, enforce_vendors)
            })
            .collect()
    }
}

/// Purpose consent, plus the vendor's consent bit when vendors are enforced.
pub(crate) fn consent_basis(
    purpose: PurposeId,
    consent: &dyn ConsentRecord,
    vendor_id: Option<u32>,
    enforce_vendors: bool,
) -> bool {
    consent.has_purpose_consent(purpose)
        && (!enforce_vendors || vendor_id.is_some_and(|id| consent.has_vendor_consent(id, purpose)))
}

/// Purpose legitimate-interest transparency, plus the vendor's LI bit when vendors are enforced.
pub(crate) fn legitimate_interest_basis(
    purpose: PurposeId,
    consent: &dyn ConsentRecord,
    vendor_id: Option<u32>,
    enforce_vendors: bool,
) -> bool {
    consent.has_purpose_legitimate_interest(purpose)
        && (!enforce_vendors
            || vendor_id.is_some_and(|id| consent.has_vendor_legitimate_interest(id, purpose)))
}
