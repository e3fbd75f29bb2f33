//! Interchangeable strictness policies.
//!
//! Each policy takes a candidate set and returns the subset judged compliant for a purpose. None
//! of them mutate their inputs. For identical inputs `No ⊇ Basic ⊇ Full`.

use crate::consent::ConsentRecord;
use crate::model::VendorPermission;
use crate::purpose::PurposeId;
use crate::vendor_list::VendorList;

mod basic_enforce;
mod full_enforce;
mod no_enforce;

pub use basic_enforce::BasicEnforcePurposeStrategy;
pub use full_enforce::FullEnforcePurposeStrategy;
pub use no_enforce::NoEnforcePurposeStrategy;

pub(crate) use basic_enforce::{consent_basis, legitimate_interest_basis};

pub trait TypeStrategy {
    fn allowed_by_type_strategy<'a>(
        &self,
        purpose: PurposeId,
        consent: &dyn ConsentRecord,
        vendor_list: &VendorList,
        candidates: &[&'a VendorPermission],
        enforce_vendors: bool,
    ) -> Vec<&'a VendorPermission>;
}
