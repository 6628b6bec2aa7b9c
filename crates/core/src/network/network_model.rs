//! Vendor/technology domain models.

use serde::{Deserialize, Serialize};

/// A supported (vendor, technology) pair. Unique per combination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VendorTech {
    pub id: i32,
    pub vendor_id: i32,
    pub tech_id: i32,
}

/// Input model for registering a new vendor/technology pair.
///
/// Wire names keep the legacy `*_pk` keys the UI submits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVendorTech {
    #[serde(rename = "vendor_pk")]
    pub vendor_id: i32,
    #[serde(rename = "tech_pk")]
    pub tech_id: i32,
}

/// Read-side row from the vendor/technology view: the pair id joined with
/// vendor and technology display names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VendorTechEntry {
    pub pk: i32,
    pub vendor: String,
    pub technology: String,
}
