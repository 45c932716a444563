use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Database {
    pub path: String,
}

/// Defaults for the parameterized queries
#[derive(Debug, Deserialize)]
pub struct Queries {
    pub top_k: i64,
    pub year_diff: i64,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub database: Database,
    pub queries: Queries,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // 1. Optional settings.toml in the working directory or the crate directory
        let config_file_name = "settings.toml";

        let current_dir_path = PathBuf::from(config_file_name);
        if current_dir_path.exists() {
            builder = builder.add_source(File::from(current_dir_path).required(false));
        }

        let dev_path = PathBuf::from("fakebook-engine").join(config_file_name);
        if dev_path.exists() {
            builder = builder.add_source(File::from(dev_path).required(false));
        }

        // 2. Environment variables win over everything else
        builder = builder
            .set_default("database.path", "fakebook.db")?
            .set_default("queries.top_k", 5)?
            .set_default("queries.year_diff", 2)?;

        if let Ok(db_path) = std::env::var("DATABASE_PATH") {
            builder = builder.set_override("database.path", db_path)?;
        }
        if let Ok(top_k) = std::env::var("FAKEBOOK_TOP_K") {
            builder = builder.set_override("queries.top_k", top_k)?;
        }
        if let Ok(year_diff) = std::env::var("FAKEBOOK_YEAR_DIFF") {
            builder = builder.set_override("queries.year_diff", year_diff)?;
        }

        let s = builder.build()?;
        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // The test environment carries no settings.toml or overrides
        if std::env::var("DATABASE_PATH").is_ok()
            || std::env::var("FAKEBOOK_TOP_K").is_ok()
            || std::env::var("FAKEBOOK_YEAR_DIFF").is_ok()
            || PathBuf::from("settings.toml").exists()
        {
            return;
        }

        let settings = Settings::new().expect("Failed to load settings");
        assert_eq!(settings.database.path, "fakebook.db");
        assert_eq!(settings.queries.top_k, 5);
        assert_eq!(settings.queries.year_diff, 2);
    }
}
