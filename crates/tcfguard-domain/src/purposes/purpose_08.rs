//! Purpose 8: measure content performance.

use super::{PurposeStrategy, TypeStrategies};
use crate::model::{EnforcementFlag, PrivacyEnforcementAction};
use crate::purpose::PurposeId;

#[derive(Clone, Copy, Debug)]
pub struct Purpose08Strategy {
    strategies: TypeStrategies,
}

impl Purpose08Strategy {
    pub fn new() -> Self {
        Self {
            strategies: TypeStrategies::with_full(),
        }
    }
}

impl Default for Purpose08Strategy {
    fn default() -> Self {
        Self::new()
    }
}

impl PurposeStrategy for Purpose08Strategy {
    fn purpose_id(&self) -> PurposeId {
        PurposeId::Eight
    }

    fn allow(&self, action: &mut PrivacyEnforcementAction) {
        action.permit(EnforcementFlag::BlockContentMeasurement);
    }

    fn type_strategies(&self) -> &TypeStrategies {
        &self.strategies
    }
}
