//! Purpose 10: develop and improve products.

use super::{PurposeStrategy, TypeStrategies};
use crate::model::{EnforcementFlag, PrivacyEnforcementAction};
use crate::purpose::PurposeId;

#[derive(Clone, Copy, Debug)]
pub struct Purpose10Strategy {
    strategies: TypeStrategies,
}

impl Purpose10Strategy {
    pub fn new() -> Self {
        Self {
            strategies: TypeStrategies::with_full(),
        }
    }
}

impl Default for Purpose10Strategy {
    fn default() -> Self {
        Self::new()
    }
}

impl PurposeStrategy for Purpose10Strategy {
    fn purpose_id(&self) -> PurposeId {
        PurposeId::Ten
    }

    fn allow(&self, action: &mut PrivacyEnforcementAction) {
        action.permit(EnforcementFlag::BlockProductDevelopment);
    }

    fn type_strategies(&self) -> &TypeStrategies {
        &self.strategies
    }
}
