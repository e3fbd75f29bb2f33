use crate::error::EnforcementError;
use crate::fingerprint::fingerprint_for_purpose;
use crate::model::VendorPermission;
use crate::purpose::PurposeId;
use tcfguard_types::{Finding, TcfData, VendorDecision, Verdict};

/// A purpose that could not be evaluated; its flag stayed blocked for every bidder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurposeFailure {
    pub purpose: PurposeId,
    pub error: EnforcementError,
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub permissions: Vec<VendorPermission>,
    pub failures: Vec<PurposeFailure>,
    pub data: TcfData,
}

impl DomainReport {
    pub fn vendor_decisions(&self) -> Vec<VendorDecision> {
        self.permissions.iter().map(vendor_decision).collect()
    }

    /// One finding per failed purpose, in purpose order.
    pub fn findings(&self) -> Vec<Finding> {
        self.failures.iter().map(PurposeFailure::to_finding).collect()
    }
}

impl PurposeFailure {
    pub fn to_finding(&self) -> Finding {
        let code = self.error.code();
        let purpose = self.purpose.code();
        Finding {
            purpose: Some(purpose),
            code: code.to_string(),
            message: format!(
                "purpose {purpose} was not evaluated and stays restricted: {}",
                self.error
            ),
            help: Some(help_for(&self.error, self.purpose)),
            fingerprint: Some(fingerprint_for_purpose(code, Some(purpose))),
        }
    }
}

fn help_for(error: &EnforcementError, purpose: PurposeId) -> String {
    match error {
        EnforcementError::FullEnforcementUnsupported { .. } => format!(
            "Set `enforce_purpose` for [purposes.{}] to \"basic\" or \"no\".",
            purpose.config_key()
        ),
        EnforcementError::UnsupportedEnforcementMode(_) => {
            "Use one of: full, basic, no.".to_string()
        }
        EnforcementError::UnknownPurpose(_) => "Purpose keys run from p1 to p10.".to_string(),
    }
}

fn vendor_decision(permission: &VendorPermission) -> VendorDecision {
    VendorDecision {
        bidder: permission.bidder_name().to_string(),
        vendor_id: permission.vendor_id(),
        actions: permission
            .action()
            .flags()
            .map(|(flag, blocked)| (flag.id().to_string(), blocked))
            .collect(),
    }
}
