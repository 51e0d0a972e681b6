use std::env;
use std::path::PathBuf;

/// Runtime configuration for the API service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// SQLite URL for the pipeline log store. Optional: without it the
    /// service runs and the database scaffolding endpoints report as much.
    pub database_url: Option<String>,
    /// Directory served for requests that match no API route.
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("wwwroot"));
        Ok(Self {
            host,
            port,
            database_url,
            static_dir,
        })
    }
}
