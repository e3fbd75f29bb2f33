use super::{PurposeStrategy, TypeStrategies};
use crate::model::{EnforcementFlag, PrivacyEnforcementAction};
use crate::purpose::PurposeId;

#[derive(Clone, Copy, Debug)]
pub struct Purpose06Strategy {
    strategies: TypeStrategies,
}

impl Purpose06Strategy {
    pub fn new() -> Self {
        Self {
            strategies: TypeStrategies::with_full(),
        }
    }
}

impl Default for Purpose06Strategy {
    fn default() -> Self {
        Self::new()
    }
}

impl PurposeStrategy for Purpose06Strategy {
    fn purpose_id(&self) -> PurposeId {
        PurposeId::Six
    }

    fn allow(&self, action: &mut PrivacyEnforcementAction) {
        action.permit(EnforcementFlag::BlockPersonalizedContent);
    }

    fn type_strategies(&self) -> &TypeStrategies {
        &self.strategies
    }
}
