//! Client for the external workflow orchestrator.
//!
//! The CM ETL pipeline runs as a DAG on an Airflow-style scheduler; this
//! service registers a new run over the experimental REST API and reports
//! whether the registration was accepted. No retry, no response-body
//! inspection beyond the status code.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use reqwest::Client;
use serde_json::json;

use crate::errors::{Error, Result};

pub const CM_ETL_DAG_ID: &str = "cm_etlp";

/// Service trait for triggering the CM ETL pipeline.
#[async_trait]
pub trait EtlTriggerServiceTrait: Send + Sync {
    /// Register a new DAG run. Ok means the orchestrator answered 200.
    async fn run(&self) -> Result<()>;
}

pub struct EtlTriggerService {
    client: Client,
    orchestrator_url: String,
}

impl EtlTriggerService {
    /// Create a trigger client against the given orchestrator base URL.
    pub fn new(orchestrator_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        EtlTriggerService {
            client,
            orchestrator_url: orchestrator_url.trim_end_matches('/').to_string(),
        }
    }

    fn dag_runs_url(&self) -> String {
        format!(
            "{}/api/experimental/dags/{}/dag_runs",
            self.orchestrator_url, CM_ETL_DAG_ID
        )
    }
}

#[async_trait]
impl EtlTriggerServiceTrait for EtlTriggerService {
    async fn run(&self) -> Result<()> {
        let run_id = format!("{}_{}", CM_ETL_DAG_ID, Utc::now().timestamp());
        debug!("Registering DAG run {run_id}");

        let response = self
            .client
            .post(self.dag_runs_url())
            .json(&json!({ "run_id": run_id }))
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("DAG run registration failed: {e}")))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!("Orchestrator rejected DAG run {run_id}: HTTP {status}");
            return Err(Error::Upstream(format!(
                "orchestrator answered HTTP {status}"
            )));
        }

        Ok(())
    }
}
