use super::TypeStrategy;
use crate::consent::ConsentRecord;
use crate::model::VendorPermission;
use crate::purpose::PurposeId;
use crate::vendor_list::VendorList;

/// Least strict policy. Purpose-level consent is never consulted; with vendor enforcement on, a
/// vendor needs either its consent bit or its legitimate-interest bit.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEnforcePurposeStrategy;

impl TypeStrategy for NoEnforcePurposeStrategy {
    fn allowed_by_type_strategy<'a>(
        &self,
        purpose: PurposeId,
        consent: &dyn ConsentRecord,
        _vendor_list: &VendorList,
        candidates: &[&'a VendorPermission],
        enforce_vendors: bool,
    ) -> Vec<&'a VendorPermission> {
        if !enforce_vendors {
            return candidates.to_vec();
        }

        candidates
            .iter()
            .copied()
            .filter(|permission| {
                permission.vendor_id().is_some_and(|id| {
                    consent.has_vendor_consent(id, purpose)
                        || consent.has_vendor_legitimate_interest(id, purpose)
                })
            })
            .collect()
    }
}
