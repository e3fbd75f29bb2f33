//! Purpose 7: measure ad performance.
//!
//! Gates analytics and measurement reports. Full enforcement is not implemented.

use super::{PurposeStrategy, TypeStrategies};
use crate::model::{EnforcementFlag, PrivacyEnforcementAction};
use crate::purpose::PurposeId;

#[derive(Clone, Copy, Debug)]
pub struct Purpose07Strategy {
    strategies: TypeStrategies,
}

impl Purpose07Strategy {
    pub fn new() -> Self {
        Self {
            strategies: TypeStrategies::without_full(),
        }
    }
}

impl Default for Purpose07Strategy {
    fn default() -> Self {
        Self::new()
    }
}

impl PurposeStrategy for Purpose07Strategy {
    fn purpose_id(&self) -> PurposeId {
        PurposeId::Seven
    }

    fn allow(&self, action: &mut PrivacyEnforcementAction) {
        action.permit(EnforcementFlag::BlockAnalyticsReport);
    }

    fn type_strategies(&self) -> &TypeStrategies {
        &self.strategies
    }
}
