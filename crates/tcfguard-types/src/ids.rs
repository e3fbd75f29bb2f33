//! Stable identifiers for purposes, enforcement flags and error codes.
//!
//! Flag names are the keys consumers read from a report's `actions` map. Codes are short
//! snake_case discriminators attached to findings.

// Purposes (config keys)
pub const PURPOSE_KEYS: [&str; 10] = ["p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8", "p9", "p10"];

// Special features (config keys)
pub const SPECIAL_FEATURE_PRECISE_GEO: &str = "sf1";

// Flags
pub const FLAG_BLOCK_PIXEL_SYNC: &str = "block_pixel_sync";
pub const FLAG_BLOCK_BIDDER_REQUEST: &str = "block_bidder_request";
pub const FLAG_BLOCK_ADS_PROFILE: &str = "block_ads_profile";
pub const FLAG_REMOVE_USER_BUYER_UID: &str = "remove_user_buyer_uid";
pub const FLAG_BLOCK_CONTENT_PROFILE: &str = "block_content_profile";
pub const FLAG_BLOCK_PERSONALIZED_CONTENT: &str = "block_personalized_content";
pub const FLAG_BLOCK_ANALYTICS_REPORT: &str = "block_analytics_report";
pub const FLAG_BLOCK_CONTENT_MEASUREMENT: &str = "block_content_measurement";
pub const FLAG_BLOCK_MARKET_RESEARCH: &str = "block_market_research";
pub const FLAG_BLOCK_PRODUCT_DEVELOPMENT: &str = "block_product_development";
pub const FLAG_MASK_PRECISE_GEO: &str = "mask_precise_geo";

// Codes: purpose evaluation
pub const CODE_UNSUPPORTED_ENFORCEMENT_MODE: &str = "unsupported_enforcement_mode";
pub const CODE_FULL_ENFORCEMENT_UNSUPPORTED: &str = "full_enforcement_unsupported";
pub const CODE_UNKNOWN_PURPOSE: &str = "unknown_purpose";

// Tool-level
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
