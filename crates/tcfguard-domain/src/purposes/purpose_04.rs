//! Purpose 4: select personalised ads.
//!
//! While blocked, the user's buyer id is stripped before the request goes out.

use super::{PurposeStrategy, TypeStrategies};
use crate::model::{EnforcementFlag, PrivacyEnforcementAction};
use crate::purpose::PurposeId;

#[derive(Clone, Copy, Debug)]
pub struct Purpose04Strategy {
    strategies: TypeStrategies,
}

impl Purpose04Strategy {
    pub fn new() -> Self {
        Self {
            strategies: TypeStrategies::with_full(),
        }
    }
}

impl Default for Purpose04Strategy {
    fn default() -> Self {
        Self::new()
    }
}

impl PurposeStrategy for Purpose04Strategy {
    fn purpose_id(&self) -> PurposeId {
        PurposeId::Four
    }

    fn allow(&self, action: &mut PrivacyEnforcementAction) {
        action.permit(EnforcementFlag::RemoveUserBuyerUid);
    }

    fn type_strategies(&self) -> &TypeStrategies {
        &self.strategies
    }
}
