use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppwriteConfig> = OnceLock::new();

/// Appwrite project settings loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppwriteConfig {
    pub endpoint: String,
    pub project_id: String,
    pub api_key: String,
    pub database_id: String,
    pub storage_id: String,
    pub post_collection_id: String,
    pub user_collection_id: String,
}

impl AppwriteConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| lookup(key).with_context(|| format!("{key} must be set"));

        Ok(Self {
            endpoint: lookup("APPWRITE_ENDPOINT")
                .unwrap_or_else(|| "https://cloud.appwrite.io/v1".to_string())
                .trim_end_matches('/')
                .to_string(),
            project_id: required("APPWRITE_PROJECT_ID")?,
            api_key: required("APPWRITE_API_KEY")?,
            database_id: required("APPWRITE_DATABASE_ID")?,
            storage_id: required("APPWRITE_STORAGE_ID")?,
            post_collection_id: required("APPWRITE_POST_COLLECTION_ID")?,
            user_collection_id: required("APPWRITE_USER_COLLECTION_ID")?,
        })
    }
}

/// Get the process configuration, loading it on first use
pub fn get() -> Result<&'static AppwriteConfig> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let config = AppwriteConfig::from_env()?;
    Ok(CONFIG.get_or_init(|| config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("APPWRITE_ENDPOINT", "https://appwrite.example.com/v1/"),
            ("APPWRITE_PROJECT_ID", "project"),
            ("APPWRITE_API_KEY", "key"),
            ("APPWRITE_DATABASE_ID", "db"),
            ("APPWRITE_STORAGE_ID", "media"),
            ("APPWRITE_POST_COLLECTION_ID", "posts"),
            ("APPWRITE_USER_COLLECTION_ID", "users"),
        ])
    }

    #[test]
    fn loads_all_fields() {
        let env = full_env();
        let config = AppwriteConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(config.endpoint, "https://appwrite.example.com/v1");
        assert_eq!(config.project_id, "project");
        assert_eq!(config.post_collection_id, "posts");
    }

    #[test]
    fn endpoint_has_a_default() {
        let mut env = full_env();
        env.remove("APPWRITE_ENDPOINT");
        let config = AppwriteConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(config.endpoint, "https://cloud.appwrite.io/v1");
    }

    #[test]
    fn missing_required_variable_is_reported() {
        let mut env = full_env();
        env.remove("APPWRITE_API_KEY");
        let err = AppwriteConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap_err();

        assert!(err.to_string().contains("APPWRITE_API_KEY"));
    }
}
