//! Database models for CM file formats and vendor mappings.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use cmhub_core::cm::{CmFileFormat, NewVendorFormatMapping, VendorFormatEntry, VendorFormatMapping};

/// Database model for the read-only file-format reference table.
#[derive(Queryable, Identifiable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::cm_file_formats)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CmFileFormatDB {
    pub id: i32,
    pub vendor_pk: i32,
    pub tech_pk: i32,
    pub format_name: String,
}

/// Database model for a vendor-pair-to-format association.
#[derive(Queryable, Identifiable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::vendor_cm_file_formats_map)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct VendorCmFileFormatMapDB {
    pub id: i32,
    pub vendor_tech_pk: i32,
    pub format_pk: i32,
}

/// Insertable model; the id comes from the autoincrement column.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::vendor_cm_file_formats_map)]
pub struct NewVendorCmFileFormatMapDB {
    pub vendor_tech_pk: i32,
    pub format_pk: i32,
}

/// Row from the `vw_vendor_cm_file_formats` view.
#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
pub struct VendorFormatEntryDB {
    pub pk: i32,
    pub vendor: String,
    pub technology: String,
    pub format_name: String,
}

impl From<CmFileFormatDB> for CmFileFormat {
    fn from(db: CmFileFormatDB) -> Self {
        Self {
            id: db.id,
            vendor_id: db.vendor_pk,
            tech_id: db.tech_pk,
            format_name: db.format_name,
        }
    }
}

impl From<VendorCmFileFormatMapDB> for VendorFormatMapping {
    fn from(db: VendorCmFileFormatMapDB) -> Self {
        Self {
            id: db.id,
            vendor_tech_id: db.vendor_tech_pk,
            format_id: db.format_pk,
        }
    }
}

impl From<NewVendorFormatMapping> for NewVendorCmFileFormatMapDB {
    fn from(domain: NewVendorFormatMapping) -> Self {
        Self {
            vendor_tech_pk: domain.vendor_tech_id,
            format_pk: domain.format_id,
        }
    }
}

impl From<VendorFormatEntryDB> for VendorFormatEntry {
    fn from(db: VendorFormatEntryDB) -> Self {
        Self {
            pk: db.pk,
            vendor: db.vendor,
            technology: db.technology,
            format_name: db.format_name,
        }
    }
}
