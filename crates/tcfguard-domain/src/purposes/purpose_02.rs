//! Purpose 2: select basic ads.
//!
//! Gates whether a bidder receives the bid request at all. Full enforcement is not implemented.

use super::{PurposeStrategy, TypeStrategies};
use crate::model::{EnforcementFlag, PrivacyEnforcementAction};
use crate::purpose::PurposeId;

#[derive(Clone, Copy, Debug)]
pub struct Purpose02Strategy {
    strategies: TypeStrategies,
}

impl Purpose02Strategy {
    pub fn new() -> Self {
        Self {
            strategies: TypeStrategies::without_full(),
        }
    }
}

impl Default for Purpose02Strategy {
    fn default() -> Self {
        Self::new()
    }
}

impl PurposeStrategy for Purpose02Strategy {
    fn purpose_id(&self) -> PurposeId {
        PurposeId::Two
    }

    fn allow(&self, action: &mut PrivacyEnforcementAction) {
        action.permit(EnforcementFlag::BlockBidderRequest);
    }

    fn type_strategies(&self) -> &TypeStrategies {
        &self.strategies
    }
}
