//! Network module - supported vendor/technology pairs.

mod network_model;
mod network_service;
mod network_traits;

#[cfg(test)]
mod network_service_tests;

pub use network_model::{NewVendorTech, VendorTech, VendorTechEntry};
pub use network_service::VendorTechService;
pub use network_traits::{VendorTechRepositoryTrait, VendorTechServiceTrait};
