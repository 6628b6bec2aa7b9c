//! Server configuration, read from the environment.

/// Runtime configuration for the CMHub server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    /// Path to the SQLite database file.
    pub db_path: String,
    /// Base URL of the workflow orchestrator hosting the CM ETL DAG.
    pub orchestrator_url: String,
    /// Bearer token guarding the settings routes. Auth is disabled when
    /// unset, matching local development against the legacy service.
    pub api_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let listen_addr =
            std::env::var("CMHUB_LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8480".to_string());
        let db_path = std::env::var("CMHUB_DB_PATH").unwrap_or_else(|_| "cmhub.db".to_string());
        let orchestrator_url = std::env::var("CMHUB_ORCHESTRATOR_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let api_token = std::env::var("CMHUB_API_TOKEN")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Config {
            listen_addr,
            db_path,
            orchestrator_url,
            api_token,
        }
    }
}
