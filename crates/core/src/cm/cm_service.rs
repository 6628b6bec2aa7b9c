use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::cm::{
    CmFileFormat, CmFormatRepositoryTrait, CmFormatServiceTrait, FormatSelector,
    NewVendorFormatMapping, VendorFormatEntry, VendorFormatMapping,
};
use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::network::VendorTechRepositoryTrait;

pub struct CmFormatService {
    cm_format_repository: Arc<dyn CmFormatRepositoryTrait>,
    vendor_tech_repository: Arc<dyn VendorTechRepositoryTrait>,
}

impl CmFormatService {
    pub fn new(
        cm_format_repository: Arc<dyn CmFormatRepositoryTrait>,
        vendor_tech_repository: Arc<dyn VendorTechRepositoryTrait>,
    ) -> Self {
        CmFormatService {
            cm_format_repository,
            vendor_tech_repository,
        }
    }
}

#[async_trait]
impl CmFormatServiceTrait for CmFormatService {
    fn get_entries(&self) -> Result<Vec<VendorFormatEntry>> {
        self.cm_format_repository.list_entries()
    }

    fn get_formats(&self, selector: FormatSelector) -> Result<Vec<CmFileFormat>> {
        let (vendor_id, tech_id) = match selector.vendor_tech_id {
            Some(pair_id) => {
                let pair = self
                    .vendor_tech_repository
                    .find_by_id(pair_id)?
                    .ok_or_else(|| {
                        Error::Database(DatabaseError::NotFound(format!(
                            "vendor/tech pair {pair_id} does not exist"
                        )))
                    })?;
                (Some(pair.vendor_id), Some(pair.tech_id))
            }
            None => (selector.vendor_id, selector.tech_id),
        };

        let (Some(vendor_id), Some(tech_id)) = (vendor_id, tech_id) else {
            return Err(Error::Validation(ValidationError::MissingField(
                "vendor_id/tech_id or vendor_tech_id".to_string(),
            )));
        };

        self.cm_format_repository
            .formats_for_pair(vendor_id, tech_id)
    }

    async fn create_mapping(
        &self,
        new_mapping: NewVendorFormatMapping,
    ) -> Result<VendorFormatMapping> {
        if self
            .cm_format_repository
            .find_mapping(new_mapping.vendor_tech_id, new_mapping.format_id)?
            .is_some()
        {
            return Err(Error::AlreadyExists(
                "Vendor format already exists".to_string(),
            ));
        }

        self.cm_format_repository.insert_mapping(new_mapping).await
    }

    async fn delete_mapping(&self, mapping_id: i32) -> Result<()> {
        let removed = self.cm_format_repository.delete_mapping(mapping_id).await?;
        debug!("Deleted {removed} vendor format mapping(s) for id {mapping_id}");
        Ok(())
    }
}
