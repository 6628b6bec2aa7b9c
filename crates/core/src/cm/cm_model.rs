//! CM file-format domain models.

use serde::{Deserialize, Serialize};

/// Read-only reference row: a file format some vendor/technology combination
/// can deliver CM data in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CmFileFormat {
    pub id: i32,
    pub vendor_id: i32,
    pub tech_id: i32,
    pub format_name: String,
}

/// Association between a vendor/technology pair and one of its supported
/// file formats. Unique per (pair, format).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VendorFormatMapping {
    pub id: i32,
    pub vendor_tech_id: i32,
    pub format_id: i32,
}

/// Input model for creating a new mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVendorFormatMapping {
    pub format_id: i32,
    pub vendor_tech_id: i32,
}

/// Read-side row from the vendor/format view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VendorFormatEntry {
    pub pk: i32,
    pub vendor: String,
    pub technology: String,
    pub format_name: String,
}

/// Selector for the format listing endpoint: either a direct
/// (vendor, technology) combination or a pair id to resolve first.
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct FormatSelector {
    pub vendor_id: Option<i32>,
    pub tech_id: Option<i32>,
    pub vendor_tech_id: Option<i32>,
}
