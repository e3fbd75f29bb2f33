//! Pure TCF v2 purpose enforcement (no IO).
//!
//! Input: a bidder set, a decoded consent record and a vendor list constructed elsewhere.
//! Output: one restricted-by-default action record per bidder, relaxed purpose by purpose.

#![forbid(unsafe_code)]

pub mod consent;
pub mod error;
pub mod fingerprint;
pub mod model;
pub mod policy;
pub mod purpose;
pub mod purposes;
pub mod report;
pub mod special_features;
pub mod typestrategies;
pub mod vendor_list;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{EnforcementRequest, evaluate};
