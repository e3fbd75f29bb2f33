//! Library entry point for embedding tcfguard in a bidding pipeline.
//!
//! Re-exports the pure enforcement engine: build [`Bidder`]s, hand over a decoded
//! [`ConsentRecord`] and a [`VendorList`], and read each bidder's [`PrivacyEnforcementAction`]
//! back from the returned [`DomainReport`].

#![forbid(unsafe_code)]

pub use tcfguard_domain::consent::{
    ConsentRecord, DecodedConsent, NoConsent, PublisherRestriction, RestrictionType,
};
pub use tcfguard_domain::error::EnforcementError;
pub use tcfguard_domain::model::{
    Bidder, EnforcementFlag, PrivacyEnforcementAction, VendorPermission,
};
pub use tcfguard_domain::policy::{
    EffectiveConfig, PurposeConfig, PurposeOneTreatmentInterpretation, SpecialFeatureConfig,
};
pub use tcfguard_domain::purpose::{EnforcementMode, PurposeId};
pub use tcfguard_domain::purposes::{PurposeStrategy, all_purpose_strategies, purpose_strategy};
pub use tcfguard_domain::report::{DomainReport, PurposeFailure};
pub use tcfguard_domain::vendor_list::{VendorDeclaration, VendorList};
pub use tcfguard_domain::{EnforcementRequest, evaluate};
pub use tcfguard_types::{Verdict, ids};
