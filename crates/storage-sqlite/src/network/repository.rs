use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::model::{NewSupportedVendorTechDB, SupportedVendorTechDB, VendorTechEntryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::supported_vendor_tech;
use crate::schema::vw_supported_vendor_tech;
use cmhub_core::errors::Result;
use cmhub_core::network::{
    NewVendorTech, VendorTech, VendorTechEntry, VendorTechRepositoryTrait,
};

pub struct VendorTechRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl VendorTechRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        VendorTechRepository { pool, writer }
    }
}

#[async_trait]
impl VendorTechRepositoryTrait for VendorTechRepository {
    fn list_entries(&self) -> Result<Vec<VendorTechEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = vw_supported_vendor_tech::table
            .load::<VendorTechEntryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(VendorTechEntry::from).collect())
    }

    fn find_by_id(&self, pair_id: i32) -> Result<Option<VendorTech>> {
        let mut conn = get_connection(&self.pool)?;
        let row = supported_vendor_tech::table
            .find(pair_id)
            .first::<SupportedVendorTechDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(VendorTech::from))
    }

    fn find_pair(&self, vendor_id: i32, tech_id: i32) -> Result<Option<VendorTech>> {
        let mut conn = get_connection(&self.pool)?;
        let row = supported_vendor_tech::table
            .filter(supported_vendor_tech::vendor_pk.eq(vendor_id))
            .filter(supported_vendor_tech::tech_pk.eq(tech_id))
            .first::<SupportedVendorTechDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(VendorTech::from))
    }

    async fn insert(&self, new_pair: NewVendorTech) -> Result<VendorTech> {
        self.writer
            .exec(move |conn| {
                let new_row: NewSupportedVendorTechDB = new_pair.into();
                let row = diesel::insert_into(supported_vendor_tech::table)
                    .values(&new_row)
                    .returning(SupportedVendorTechDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(VendorTech::from(row))
            })
            .await
    }

    async fn delete(&self, pair_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn| {
                Ok(
                    diesel::delete(supported_vendor_tech::table.find(pair_id))
                        .execute(conn)
                        .map_err(StorageError::from)?,
                )
            })
            .await
    }
}
