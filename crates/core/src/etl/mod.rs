//! ETL module - on-demand trigger for the CM extract/transform/load DAG.

mod etl_service;

pub use etl_service::{EtlTriggerService, EtlTriggerServiceTrait, CM_ETL_DAG_ID};
