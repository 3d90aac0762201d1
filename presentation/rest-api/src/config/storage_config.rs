use persistence::json_store::JsonStoreConfig;
use std::env;
use std::path::PathBuf;

/// Filesystem locations the storefront reads from
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl StorageConfig {
    /// Load storage locations from environment variables
    ///
    /// Environment variables:
    /// - DATA_DIR: Directory holding products.json and translations.json (default: "data")
    /// - TEMPLATES_DIR: Directory holding the page templates (default: "templates")
    /// - STATIC_DIR: Directory served under /static (default: "static")
    pub fn from_env() -> Self {
        Self {
            data_dir: env_path("DATA_DIR", "data"),
            templates_dir: env_path("TEMPLATES_DIR", "templates"),
            static_dir: env_path("STATIC_DIR", "static"),
        }
    }

    pub fn json_store(&self) -> JsonStoreConfig {
        JsonStoreConfig::new(self.data_dir.clone())
    }

    /// Creates the data, template and static directories when absent.
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.templates_dir)?;
        std::fs::create_dir_all(self.static_dir.join("images"))?;
        Ok(())
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
