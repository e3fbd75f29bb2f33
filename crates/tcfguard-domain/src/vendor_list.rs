use crate::purpose::PurposeId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Global-vendor-list-shaped registry of vendor legal-basis declarations.
///
/// Supplied by the caller; an empty list is valid input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorList {
    #[serde(default)]
    pub vendor_list_version: u32,
    #[serde(default)]
    pub vendors: BTreeMap<u32, VendorDeclaration>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VendorDeclaration {
    pub id: u32,
    pub name: String,
    /// Purposes the vendor processes under consent.
    pub purposes: BTreeSet<u8>,
    /// Purposes the vendor processes under legitimate interest.
    pub leg_int_purposes: BTreeSet<u8>,
    /// Purposes whose basis the publisher may switch.
    pub flexible_purposes: BTreeSet<u8>,
    pub special_features: BTreeSet<u8>,
}

impl VendorList {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn vendor(&self, vendor_id: u32) -> Option<&VendorDeclaration> {
        self.vendors.get(&vendor_id)
    }
}

impl VendorDeclaration {
    pub fn declares_consent(&self, purpose: PurposeId) -> bool {
        self.purposes.contains(&purpose.code())
    }

    pub fn declares_legitimate_interest(&self, purpose: PurposeId) -> bool {
        self.leg_int_purposes.contains(&purpose.code())
    }

    pub fn is_flexible(&self, purpose: PurposeId) -> bool {
        self.flexible_purposes.contains(&purpose.code())
    }
}
