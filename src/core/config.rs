/// Engine configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | VITRINE_DATA_DIR | ./data | Directory holding the snapshot database |
/// | VITRINE_LOG_DIR | (unset) | Directory for rolling log files; console only when unset |
/// | VITRINE_LOG_LEVEL | info | Log level filter |
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the snapshot database file
    pub data_dir: String,
    /// Directory for rolling log files, console-only logging when `None`
    pub log_dir: Option<String>,
    /// Log level filter: trace | debug | info | warn | error
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables, using defaults for
    /// anything unset
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("VITRINE_DATA_DIR").unwrap_or_else(|_| "./data".into()),
            log_dir: std::env::var("VITRINE_LOG_DIR").ok(),
            log_level: std::env::var("VITRINE_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Override the data directory
    ///
    /// Mostly used in tests pointing at a temporary directory
    pub fn with_data_dir(data_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config
    }

    /// Path of the snapshot database file
    pub fn db_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.data_dir).join("vitrine.redb")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_path_joins_data_dir() {
        let config = Config::with_data_dir("/tmp/vitrine-test");
        assert_eq!(
            config.db_path(),
            std::path::PathBuf::from("/tmp/vitrine-test/vitrine.redb")
        );
    }
}
