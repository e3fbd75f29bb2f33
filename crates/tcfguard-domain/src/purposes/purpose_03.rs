//! Purpose 3: create a personalised ads profile.

use super::{PurposeStrategy, TypeStrategies};
use crate::model::{EnforcementFlag, PrivacyEnforcementAction};
use crate::purpose::PurposeId;

#[derive(Clone, Copy, Debug)]
pub struct Purpose03Strategy {
    strategies: TypeStrategies,
}

impl Purpose03Strategy {
    pub fn new() -> Self {
        Self {
            strategies: TypeStrategies::with_full(),
        }
    }
}

impl Default for Purpose03Strategy {
    fn default() -> Self {
        Self::new()
    }
}

impl PurposeStrategy for Purpose03Strategy {
    fn purpose_id(&self) -> PurposeId {
        PurposeId::Three
    }

    fn allow(&self, action: &mut PrivacyEnforcementAction) {
        action.permit(EnforcementFlag::BlockAdsProfile);
    }

    fn type_strategies(&self) -> &TypeStrategies {
        &self.strategies
    }
}
