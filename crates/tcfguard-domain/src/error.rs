use crate::purpose::PurposeId;
use tcfguard_types::ids;
use thiserror::Error;

/// Configuration errors raised while evaluating a purpose.
///
/// "Not permitted" is an ordinary outcome and never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnforcementError {
    #[error("unsupported enforcement mode '{0}' (expected one of: full, basic, no)")]
    UnsupportedEnforcementMode(String),

    #[error("full enforcement is not implemented for purpose {purpose}")]
    FullEnforcementUnsupported { purpose: PurposeId },

    #[error("unknown purpose id {0} (expected 1..=10)")]
    UnknownPurpose(u8),
}

impl EnforcementError {
    pub fn code(&self) -> &'static str {
        match self {
            EnforcementError::UnsupportedEnforcementMode(_) => ids::CODE_UNSUPPORTED_ENFORCEMENT_MODE,
            EnforcementError::FullEnforcementUnsupported { .. } => {
                ids::CODE_FULL_ENFORCEMENT_UNSUPPORTED
            }
            EnforcementError::UnknownPurpose(_) => ids::CODE_UNKNOWN_PURPOSE,
        }
    }

    /// Purpose the error is attached to, when known.
    pub fn purpose(&self) -> Option<PurposeId> {
        match self {
            EnforcementError::FullEnforcementUnsupported { purpose } => Some(*purpose),
            _ => None,
        }
    }
}
