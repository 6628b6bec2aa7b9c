use async_trait::async_trait;

use crate::cm::{
    CmFileFormat, FormatSelector, NewVendorFormatMapping, VendorFormatEntry, VendorFormatMapping,
};
use crate::errors::Result;

/// Repository trait for CM file formats and their vendor mappings.
#[async_trait]
pub trait CmFormatRepositoryTrait: Send + Sync {
    /// Rows from the vendor/format view, in stored order.
    fn list_entries(&self) -> Result<Vec<VendorFormatEntry>>;

    /// Reference formats for a (vendor, technology) combination.
    fn formats_for_pair(&self, vendor_id: i32, tech_id: i32) -> Result<Vec<CmFileFormat>>;

    /// A mapping by its (pair, format) combination, if present.
    fn find_mapping(
        &self,
        vendor_tech_id: i32,
        format_id: i32,
    ) -> Result<Option<VendorFormatMapping>>;

    async fn insert_mapping(
        &self,
        new_mapping: NewVendorFormatMapping,
    ) -> Result<VendorFormatMapping>;

    /// Delete by id. Returns the number of rows removed (0 for absent ids).
    async fn delete_mapping(&self, mapping_id: i32) -> Result<usize>;
}

/// Service trait for CM file-format operations.
#[async_trait]
pub trait CmFormatServiceTrait: Send + Sync {
    fn get_entries(&self) -> Result<Vec<VendorFormatEntry>>;

    /// Formats matching the selector. A `vendor_tech_id` takes precedence and
    /// is resolved to its (vendor, technology) combination first; an
    /// unresolvable id fails with a not-found error.
    fn get_formats(&self, selector: FormatSelector) -> Result<Vec<CmFileFormat>>;

    /// Create a mapping. Fails with `Error::AlreadyExists` when the
    /// (pair, format) combination is already present.
    async fn create_mapping(
        &self,
        new_mapping: NewVendorFormatMapping,
    ) -> Result<VendorFormatMapping>;

    /// Delete by id. Succeeds even when the id does not exist.
    async fn delete_mapping(&self, mapping_id: i32) -> Result<()>;
}
