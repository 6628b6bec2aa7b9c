//! CM module - vendor file-format reference data and mappings.

mod cm_model;
mod cm_service;
mod cm_traits;

#[cfg(test)]
mod cm_service_tests;

pub use cm_model::{
    CmFileFormat, FormatSelector, NewVendorFormatMapping, VendorFormatEntry, VendorFormatMapping,
};
pub use cm_service::CmFormatService;
pub use cm_traits::{CmFormatRepositoryTrait, CmFormatServiceTrait};
