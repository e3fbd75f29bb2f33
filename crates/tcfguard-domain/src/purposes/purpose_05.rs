//! Purpose 5: create a personalised content profile.

use super::{PurposeStrategy, TypeStrategies};
use crate::model::{EnforcementFlag, PrivacyEnforcementAction};
use crate::purpose::PurposeId;

#[derive(Clone, Copy, Debug)]
pub struct Purpose05Strategy {
    strategies: TypeStrategies,
}

impl Purpose05Strategy {
    pub fn new() -> Self {
        Self {
            strategies: TypeStrategies::with_full(),
        }
    }
}

impl Default for Purpose05Strategy {
    fn default() -> Self {
        Self::new()
    }
}

impl PurposeStrategy for Purpose05Strategy {
    fn purpose_id(&self) -> PurposeId {
        PurposeId::Five
    }

    fn allow(&self, action: &mut PrivacyEnforcementAction) {
        action.permit(EnforcementFlag::BlockContentProfile);
    }

    fn type_strategies(&self) -> &TypeStrategies {
        &self.strategies
    }
}
