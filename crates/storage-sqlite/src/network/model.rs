//! Database models for vendor/technology pairs.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use cmhub_core::network::{NewVendorTech, VendorTech, VendorTechEntry};

/// Database model for a supported vendor/technology pair.
#[derive(Queryable, Identifiable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::supported_vendor_tech)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SupportedVendorTechDB {
    pub id: i32,
    pub vendor_pk: i32,
    pub tech_pk: i32,
}

/// Insertable model; the id comes from the autoincrement column.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::supported_vendor_tech)]
pub struct NewSupportedVendorTechDB {
    pub vendor_pk: i32,
    pub tech_pk: i32,
}

/// Row from the `vw_supported_vendor_tech` view.
#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
pub struct VendorTechEntryDB {
    pub pk: i32,
    pub vendor: String,
    pub technology: String,
}

impl From<SupportedVendorTechDB> for VendorTech {
    fn from(db: SupportedVendorTechDB) -> Self {
        Self {
            id: db.id,
            vendor_id: db.vendor_pk,
            tech_id: db.tech_pk,
        }
    }
}

impl From<NewVendorTech> for NewSupportedVendorTechDB {
    fn from(domain: NewVendorTech) -> Self {
        Self {
            vendor_pk: domain.vendor_id,
            tech_pk: domain.tech_id,
        }
    }
}

impl From<VendorTechEntryDB> for VendorTechEntry {
    fn from(db: VendorTechEntryDB) -> Self {
        Self {
            pk: db.pk,
            vendor: db.vendor,
            technology: db.technology,
        }
    }
}
