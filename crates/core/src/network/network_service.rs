use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::{Error, Result};
use crate::network::{
    NewVendorTech, VendorTech, VendorTechEntry, VendorTechRepositoryTrait, VendorTechServiceTrait,
};

pub struct VendorTechService {
    vendor_tech_repository: Arc<dyn VendorTechRepositoryTrait>,
}

impl VendorTechService {
    pub fn new(vendor_tech_repository: Arc<dyn VendorTechRepositoryTrait>) -> Self {
        VendorTechService {
            vendor_tech_repository,
        }
    }
}

#[async_trait]
impl VendorTechServiceTrait for VendorTechService {
    fn get_entries(&self) -> Result<Vec<VendorTechEntry>> {
        self.vendor_tech_repository.list_entries()
    }

    async fn create(&self, new_pair: NewVendorTech) -> Result<VendorTech> {
        // Existence check runs before the insert; a racing writer still hits
        // the unique index and surfaces as a storage error.
        if self
            .vendor_tech_repository
            .find_pair(new_pair.vendor_id, new_pair.tech_id)?
            .is_some()
        {
            return Err(Error::AlreadyExists("Mapping already exists".to_string()));
        }

        self.vendor_tech_repository.insert(new_pair).await
    }

    async fn delete(&self, pair_id: i32) -> Result<()> {
        let removed = self.vendor_tech_repository.delete(pair_id).await?;
        debug!("Deleted {removed} vendor/tech pair(s) for id {pair_id}");
        Ok(())
    }
}
