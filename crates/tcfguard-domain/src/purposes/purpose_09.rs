//! Purpose 9: apply market research to generate audience insights.

use super::{PurposeStrategy, TypeStrategies};
use crate::model::{EnforcementFlag, PrivacyEnforcementAction};
use crate::purpose::PurposeId;

#[derive(Clone, Copy, Debug)]
pub struct Purpose09Strategy {
    strategies: TypeStrategies,
}

impl Purpose09Strategy {
    pub fn new() -> Self {
        Self {
            strategies: TypeStrategies::with_full(),
        }
    }
}

impl Default for Purpose09Strategy {
    fn default() -> Self {
        Self::new()
    }
}

impl PurposeStrategy for Purpose09Strategy {
    fn purpose_id(&self) -> PurposeId {
        PurposeId::Nine
    }

    fn allow(&self, action: &mut PrivacyEnforcementAction) {
        action.permit(EnforcementFlag::BlockMarketResearch);
    }

    fn type_strategies(&self) -> &TypeStrategies {
        &self.strategies
    }
}
