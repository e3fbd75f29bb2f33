//! Purpose strategies.
//!
//! One strategy per TCF purpose. Each one owns exactly one flag of
//! [`PrivacyEnforcementAction`], so the ten can run in any order against the same permissions.

use crate::consent::{ConsentRecord, NoConsent};
use crate::error::EnforcementError;
use crate::model::{PrivacyEnforcementAction, VendorPermission};
use crate::policy::PurposeConfig;
use crate::purpose::{EnforcementMode, PurposeId};
use crate::typestrategies::{
    BasicEnforcePurposeStrategy, FullEnforcePurposeStrategy, NoEnforcePurposeStrategy,
    TypeStrategy,
};
use crate::vendor_list::VendorList;
use std::collections::HashSet;

mod purpose_01;
mod purpose_02;
mod purpose_03;
mod purpose_04;
mod purpose_05;
mod purpose_06;
mod purpose_07;
mod purpose_08;
mod purpose_09;
mod purpose_10;

pub use purpose_01::Purpose01Strategy;
pub use purpose_02::Purpose02Strategy;
pub use purpose_03::Purpose03Strategy;
pub use purpose_04::Purpose04Strategy;
pub use purpose_05::Purpose05Strategy;
pub use purpose_06::Purpose06Strategy;
pub use purpose_07::Purpose07Strategy;
pub use purpose_08::Purpose08Strategy;
pub use purpose_09::Purpose09Strategy;
pub use purpose_10::Purpose10Strategy;

/// The strictness policies a purpose supports. `no` and `basic` are always available.
#[derive(Clone, Copy, Debug, Default)]
pub struct TypeStrategies {
    no: NoEnforcePurposeStrategy,
    basic: BasicEnforcePurposeStrategy,
    full: Option<FullEnforcePurposeStrategy>,
}

impl TypeStrategies {
    pub fn without_full() -> Self {
        Self::default()
    }

    pub fn with_full() -> Self {
        Self {
            full: Some(FullEnforcePurposeStrategy),
            ..Self::default()
        }
    }

    pub fn supports_full(&self) -> bool {
        self.full.is_some()
    }

    /// The policy for `mode`. Never substitutes a weaker policy for a missing one.
    pub fn for_mode(
        &self,
        purpose: PurposeId,
        mode: EnforcementMode,
    ) -> Result<&dyn TypeStrategy, EnforcementError> {
        match mode {
            EnforcementMode::No => Ok(&self.no),
            EnforcementMode::Basic => Ok(&self.basic),
            EnforcementMode::Full => match &self.full {
                Some(full) => Ok(full),
                None => Err(EnforcementError::FullEnforcementUnsupported { purpose }),
            },
        }
    }
}

pub trait PurposeStrategy {
    fn purpose_id(&self) -> PurposeId;

    /// Clear the flag this purpose owns. Idempotent.
    fn allow(&self, action: &mut PrivacyEnforcementAction);

    fn type_strategies(&self) -> &TypeStrategies;

    fn supports_full(&self) -> bool {
        self.type_strategies().supports_full()
    }

    /// Relax this purpose's flag for every exempted or compliant permission.
    ///
    /// Returns the whole input slice, in input order, whether or not each entry was allowed.
    /// The mode is validated before any flag is touched, so on error every flag is as it was.
    fn process_type_purpose_strategy<'p>(
        &self,
        consent: Option<&dyn ConsentRecord>,
        vendor_list: &VendorList,
        config: &PurposeConfig,
        permissions: &'p mut [VendorPermission],
    ) -> Result<&'p mut [VendorPermission], EnforcementError> {
        let purpose = self.purpose_id();
        let mode = config.effective_mode();
        let type_strategy = self.type_strategies().for_mode(purpose, mode)?;
        let consent: &dyn ConsentRecord = consent.unwrap_or(&NoConsent);

        let permit: Vec<bool> = {
            let candidates: Vec<&VendorPermission> = permissions
                .iter()
                .filter(|p| !config.is_vendor_exception(p.bidder_name()))
                .collect();
            let allowed: HashSet<&VendorPermission> = type_strategy
                .allowed_by_type_strategy(
                    purpose,
                    consent,
                    vendor_list,
                    &candidates,
                    config.enforce_vendors,
                )
                .into_iter()
                .collect();

            permissions
                .iter()
                .map(|p| config.is_vendor_exception(p.bidder_name()) || allowed.contains(p))
                .collect()
        };

        let mut permitted = 0usize;
        for (permission, permit) in permissions.iter_mut().zip(permit) {
            if permit {
                self.allow(permission.action_mut());
                permitted += 1;
            }
        }

        tracing::debug!(
            purpose = %purpose,
            mode = %mode,
            enforce_vendors = config.enforce_vendors,
            permitted,
            total = permissions.len(),
            "purpose evaluated"
        );

        Ok(permissions)
    }
}

/// All ten purpose strategies in ascending purpose order.
pub fn all_purpose_strategies() -> Vec<Box<dyn PurposeStrategy>> {
    PurposeId::ALL.into_iter().map(purpose_strategy).collect()
}

pub fn purpose_strategy(purpose: PurposeId) -> Box<dyn PurposeStrategy> {
    match purpose {
        PurposeId::One => Box::new(Purpose01Strategy::new()),
        PurposeId::Two => Box::new(Purpose02Strategy::new()),
        PurposeId::Three => Box::new(Purpose03Strategy::new()),
        PurposeId::Four => Box::new(Purpose04Strategy::new()),
        PurposeId::Five => Box::new(Purpose05Strategy::new()),
        PurposeId::Six => Box::new(Purpose06Strategy::new()),
        PurposeId::Seven => Box::new(Purpose07Strategy::new()),
        PurposeId::Eight => Box::new(Purpose08Strategy::new()),
        PurposeId::Nine => Box::new(Purpose09Strategy::new()),
        PurposeId::Ten => Box::new(Purpose10Strategy::new()),
    }
}
