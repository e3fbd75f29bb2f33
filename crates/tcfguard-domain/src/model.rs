use crate::purpose::PurposeId;
use std::hash::{Hash, Hasher};
use tcfguard_types::ids;

/// A privacy-regulated capability the bidding pipeline consults before acting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnforcementFlag {
    BlockPixelSync,
    BlockBidderRequest,
    BlockAdsProfile,
    RemoveUserBuyerUid,
    BlockContentProfile,
    BlockPersonalizedContent,
    BlockAnalyticsReport,
    BlockContentMeasurement,
    BlockMarketResearch,
    BlockProductDevelopment,
    MaskPreciseGeo,
}

impl EnforcementFlag {
    pub const ALL: [EnforcementFlag; 11] = [
        EnforcementFlag::BlockPixelSync,
        EnforcementFlag::BlockBidderRequest,
        EnforcementFlag::BlockAdsProfile,
        EnforcementFlag::RemoveUserBuyerUid,
        EnforcementFlag::BlockContentProfile,
        EnforcementFlag::BlockPersonalizedContent,
        EnforcementFlag::BlockAnalyticsReport,
        EnforcementFlag::BlockContentMeasurement,
        EnforcementFlag::BlockMarketResearch,
        EnforcementFlag::BlockProductDevelopment,
        EnforcementFlag::MaskPreciseGeo,
    ];

    pub fn id(self) -> &'static str {
        match self {
            EnforcementFlag::BlockPixelSync => ids::FLAG_BLOCK_PIXEL_SYNC,
            EnforcementFlag::BlockBidderRequest => ids::FLAG_BLOCK_BIDDER_REQUEST,
            EnforcementFlag::BlockAdsProfile => ids::FLAG_BLOCK_ADS_PROFILE,
            EnforcementFlag::RemoveUserBuyerUid => ids::FLAG_REMOVE_USER_BUYER_UID,
            EnforcementFlag::BlockContentProfile => ids::FLAG_BLOCK_CONTENT_PROFILE,
            EnforcementFlag::BlockPersonalizedContent => ids::FLAG_BLOCK_PERSONALIZED_CONTENT,
            EnforcementFlag::BlockAnalyticsReport => ids::FLAG_BLOCK_ANALYTICS_REPORT,
            EnforcementFlag::BlockContentMeasurement => ids::FLAG_BLOCK_CONTENT_MEASUREMENT,
            EnforcementFlag::BlockMarketResearch => ids::FLAG_BLOCK_MARKET_RESEARCH,
            EnforcementFlag::BlockProductDevelopment => ids::FLAG_BLOCK_PRODUCT_DEVELOPMENT,
            EnforcementFlag::MaskPreciseGeo => ids::FLAG_MASK_PRECISE_GEO,
        }
    }

    /// The flag written by `purpose`. Each purpose owns exactly one flag and no flag has two
    /// owners; `MaskPreciseGeo` belongs to special feature 1, not to a purpose.
    pub fn owned_by(purpose: PurposeId) -> EnforcementFlag {
        match purpose {
            PurposeId::One => EnforcementFlag::BlockPixelSync,
            PurposeId::Two => EnforcementFlag::BlockBidderRequest,
            PurposeId::Three => EnforcementFlag::BlockAdsProfile,
            PurposeId::Four => EnforcementFlag::RemoveUserBuyerUid,
            PurposeId::Five => EnforcementFlag::BlockContentProfile,
            PurposeId::Six => EnforcementFlag::BlockPersonalizedContent,
            PurposeId::Seven => EnforcementFlag::BlockAnalyticsReport,
            PurposeId::Eight => EnforcementFlag::BlockContentMeasurement,
            PurposeId::Nine => EnforcementFlag::BlockMarketResearch,
            PurposeId::Ten => EnforcementFlag::BlockProductDevelopment,
        }
    }
}

/// Per-vendor decision record. `true` means the capability is blocked.
///
/// Every flag starts blocked and is only ever cleared, by its single owning strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivacyEnforcementAction {
    pub block_pixel_sync: bool,
    pub block_bidder_request: bool,
    pub block_ads_profile: bool,
    pub remove_user_buyer_uid: bool,
    pub block_content_profile: bool,
    pub block_personalized_content: bool,
    pub block_analytics_report: bool,
    pub block_content_measurement: bool,
    pub block_market_research: bool,
    pub block_product_development: bool,
    pub mask_precise_geo: bool,
}

impl PrivacyEnforcementAction {
    pub fn restrict_all() -> Self {
        Self {
            block_pixel_sync: true,
            block_bidder_request: true,
            block_ads_profile: true,
            remove_user_buyer_uid: true,
            block_content_profile: true,
            block_personalized_content: true,
            block_analytics_report: true,
            block_content_measurement: true,
            block_market_research: true,
            block_product_development: true,
            mask_precise_geo: true,
        }
    }

    pub fn is_blocked(&self, flag: EnforcementFlag) -> bool {
        match flag {
            EnforcementFlag::BlockPixelSync => self.block_pixel_sync,
            EnforcementFlag::BlockBidderRequest => self.block_bidder_request,
            EnforcementFlag::BlockAdsProfile => self.block_ads_profile,
            EnforcementFlag::RemoveUserBuyerUid => self.remove_user_buyer_uid,
            EnforcementFlag::BlockContentProfile => self.block_content_profile,
            EnforcementFlag::BlockPersonalizedContent => self.block_personalized_content,
            EnforcementFlag::BlockAnalyticsReport => self.block_analytics_report,
            EnforcementFlag::BlockContentMeasurement => self.block_content_measurement,
            EnforcementFlag::BlockMarketResearch => self.block_market_research,
            EnforcementFlag::BlockProductDevelopment => self.block_product_development,
            EnforcementFlag::MaskPreciseGeo => self.mask_precise_geo,
        }
    }

    /// Clear exactly one flag. Idempotent.
    pub fn permit(&mut self, flag: EnforcementFlag) {
        let slot = match flag {
            EnforcementFlag::BlockPixelSync => &mut self.block_pixel_sync,
            EnforcementFlag::BlockBidderRequest => &mut self.block_bidder_request,
            EnforcementFlag::BlockAdsProfile => &mut self.block_ads_profile,
            EnforcementFlag::RemoveUserBuyerUid => &mut self.remove_user_buyer_uid,
            EnforcementFlag::BlockContentProfile => &mut self.block_content_profile,
            EnforcementFlag::BlockPersonalizedContent => &mut self.block_personalized_content,
            EnforcementFlag::BlockAnalyticsReport => &mut self.block_analytics_report,
            EnforcementFlag::BlockContentMeasurement => &mut self.block_content_measurement,
            EnforcementFlag::BlockMarketResearch => &mut self.block_market_research,
            EnforcementFlag::BlockProductDevelopment => &mut self.block_product_development,
            EnforcementFlag::MaskPreciseGeo => &mut self.mask_precise_geo,
        };
        *slot = false;
    }

    pub fn flags(&self) -> impl Iterator<Item = (EnforcementFlag, bool)> + '_ {
        EnforcementFlag::ALL
            .into_iter()
            .map(move |flag| (flag, self.is_blocked(flag)))
    }
}

impl Default for PrivacyEnforcementAction {
    fn default() -> Self {
        Self::restrict_all()
    }
}

/// A candidate bidder as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bidder {
    pub name: String,
    pub vendor_id: Option<u32>,
}

impl Bidder {
    pub fn new(name: impl Into<String>, vendor_id: Option<u32>) -> Self {
        Self {
            name: name.into(),
            vendor_id,
        }
    }
}

/// Binds a bidder identity to its mutable decision record.
///
/// Identity is `(bidder_name, vendor_id)`; the action is working state and is excluded from
/// equality and hashing.
#[derive(Clone, Debug)]
pub struct VendorPermission {
    bidder_name: String,
    vendor_id: Option<u32>,
    action: PrivacyEnforcementAction,
}

impl VendorPermission {
    pub fn new(bidder_name: impl Into<String>, vendor_id: Option<u32>) -> Self {
        Self {
            bidder_name: bidder_name.into(),
            vendor_id,
            action: PrivacyEnforcementAction::restrict_all(),
        }
    }

    pub fn bidder_name(&self) -> &str {
        &self.bidder_name
    }

    pub fn vendor_id(&self) -> Option<u32> {
        self.vendor_id
    }

    pub fn action(&self) -> &PrivacyEnforcementAction {
        &self.action
    }

    pub fn action_mut(&mut self) -> &mut PrivacyEnforcementAction {
        &mut self.action
    }
}

impl From<&Bidder> for VendorPermission {
    fn from(bidder: &Bidder) -> Self {
        VendorPermission::new(bidder.name.clone(), bidder.vendor_id)
    }
}

impl PartialEq for VendorPermission {
    fn eq(&self, other: &Self) -> bool {
        self.bidder_name == other.bidder_name && self.vendor_id == other.vendor_id
    }
}

impl Eq for VendorPermission {}

impl Hash for VendorPermission {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bidder_name.hash(state);
        self.vendor_id.hash(state);
    }
}
