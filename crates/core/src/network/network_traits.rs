use async_trait::async_trait;

use crate::errors::Result;
use crate::network::{NewVendorTech, VendorTech, VendorTechEntry};

/// Repository trait for vendor/technology pair storage.
#[async_trait]
pub trait VendorTechRepositoryTrait: Send + Sync {
    /// Rows from the vendor/technology name view, in stored order.
    fn list_entries(&self) -> Result<Vec<VendorTechEntry>>;

    /// A pair by id, if present.
    fn find_by_id(&self, pair_id: i32) -> Result<Option<VendorTech>>;

    /// A pair by its (vendor, technology) combination, if present.
    fn find_pair(&self, vendor_id: i32, tech_id: i32) -> Result<Option<VendorTech>>;

    async fn insert(&self, new_pair: NewVendorTech) -> Result<VendorTech>;

    /// Delete by id. Returns the number of rows removed (0 for absent ids).
    async fn delete(&self, pair_id: i32) -> Result<usize>;
}

/// Service trait for vendor/technology pair operations.
#[async_trait]
pub trait VendorTechServiceTrait: Send + Sync {
    fn get_entries(&self) -> Result<Vec<VendorTechEntry>>;

    /// Register a new pair. Fails with `Error::AlreadyExists` when the
    /// combination is already present.
    async fn create(&self, new_pair: NewVendorTech) -> Result<VendorTech>;

    /// Delete by id. Succeeds even when the id does not exist.
    async fn delete(&self, pair_id: i32) -> Result<()>;
}
