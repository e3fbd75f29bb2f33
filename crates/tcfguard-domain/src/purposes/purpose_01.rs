//! Purpose 1: store and/or access information on a device.
//!
//! Gates cookie and pixel syncs. Full enforcement is not implemented.

use super::{PurposeStrategy, TypeStrategies};
use crate::model::{EnforcementFlag, PrivacyEnforcementAction};
use crate::purpose::PurposeId;

#[derive(Clone, Copy, Debug)]
pub struct Purpose01Strategy {
    strategies: TypeStrategies,
}

impl Purpose01Strategy {
    pub fn new() -> Self {
        Self {
            strategies: TypeStrategies::without_full(),
        }
    }
}

impl Default for Purpose01Strategy {
    fn default() -> Self {
        Self::new()
    }
}

impl PurposeStrategy for Purpose01Strategy {
    fn purpose_id(&self) -> PurposeId {
        PurposeId::One
    }

    fn allow(&self, action: &mut PrivacyEnforcementAction) {
        action.permit(EnforcementFlag::BlockPixelSync);
    }

    fn type_strategies(&self) -> &TypeStrategies {
        &self.strategies
    }
}
