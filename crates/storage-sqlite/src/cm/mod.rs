//! SQLite storage implementation for CM file formats and mappings.

mod model;
mod repository;

pub use model::{
    CmFileFormatDB, NewVendorCmFileFormatMapDB, VendorCmFileFormatMapDB, VendorFormatEntryDB,
};
pub use repository::CmFormatRepository;

// Re-export trait from core for convenience
pub use cmhub_core::cm::CmFormatRepositoryTrait;
