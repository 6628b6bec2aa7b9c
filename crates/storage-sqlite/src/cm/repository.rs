use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::model::{
    CmFileFormatDB, NewVendorCmFileFormatMapDB, VendorCmFileFormatMapDB, VendorFormatEntryDB,
};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::cm_file_formats;
use crate::schema::vendor_cm_file_formats_map;
use crate::schema::vw_vendor_cm_file_formats;
use cmhub_core::cm::{
    CmFileFormat, CmFormatRepositoryTrait, NewVendorFormatMapping, VendorFormatEntry,
    VendorFormatMapping,
};
use cmhub_core::errors::Result;

pub struct CmFormatRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CmFormatRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CmFormatRepository { pool, writer }
    }
}

#[async_trait]
impl CmFormatRepositoryTrait for CmFormatRepository {
    fn list_entries(&self) -> Result<Vec<VendorFormatEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = vw_vendor_cm_file_formats::table
            .load::<VendorFormatEntryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(VendorFormatEntry::from).collect())
    }

    fn formats_for_pair(&self, vendor_id: i32, tech_id: i32) -> Result<Vec<CmFileFormat>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = cm_file_formats::table
            .filter(cm_file_formats::vendor_pk.eq(vendor_id))
            .filter(cm_file_formats::tech_pk.eq(tech_id))
            .load::<CmFileFormatDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(CmFileFormat::from).collect())
    }

    fn find_mapping(
        &self,
        vendor_tech_id: i32,
        format_id: i32,
    ) -> Result<Option<VendorFormatMapping>> {
        let mut conn = get_connection(&self.pool)?;
        let row = vendor_cm_file_formats_map::table
            .filter(vendor_cm_file_formats_map::vendor_tech_pk.eq(vendor_tech_id))
            .filter(vendor_cm_file_formats_map::format_pk.eq(format_id))
            .first::<VendorCmFileFormatMapDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(VendorFormatMapping::from))
    }

    async fn insert_mapping(
        &self,
        new_mapping: NewVendorFormatMapping,
    ) -> Result<VendorFormatMapping> {
        self.writer
            .exec(move |conn| {
                let new_row: NewVendorCmFileFormatMapDB = new_mapping.into();
                let row = diesel::insert_into(vendor_cm_file_formats_map::table)
                    .values(&new_row)
                    .returning(VendorCmFileFormatMapDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(VendorFormatMapping::from(row))
            })
            .await
    }

    async fn delete_mapping(&self, mapping_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn| {
                Ok(
                    diesel::delete(vendor_cm_file_formats_map::table.find(mapping_id))
                        .execute(conn)
                        .map_err(StorageError::from)?,
                )
            })
            .await
    }
}
