use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub auth: AuthConfig,
    pub models: ModelConfig,
    pub google: GoogleConfig,
    pub search: SearchConfig,
}

/// Inbound bearer credential shared by all callers of this service.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model for structured JSON extraction (e.g., gemini-2.5-flash)
    pub text_model: String,
    /// Upper bound on a single LLM call, in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: String,
}

/// Downstream vector-search service. Its bearer credential is distinct
/// from the agent's own inbound token.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub url: String,
    pub access_token: String,
    pub timeout_secs: u64,
}

impl AgentConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(AgentConfig {
            common: common_config,
            auth: AuthConfig {
                access_token: get_env("AGENT_ACCESS_TOKEN", None, is_prod)?,
            },
            models: ModelConfig {
                text_model: get_env("AGENT_TEXT_MODEL", Some("gemini-2.5-flash"), is_prod)?,
                timeout_secs: parse_secs(
                    "LLM_TIMEOUT_SECS",
                    get_env("LLM_TIMEOUT_SECS", Some("30"), is_prod)?,
                )?,
            },
            google: GoogleConfig {
                api_key: get_env("GOOGLE_API_KEY", None, is_prod)?,
            },
            search: SearchConfig {
                url: get_env(
                    "SEARCH_SERVICE_URL",
                    Some("http://0.0.0.0:8324/search"),
                    is_prod,
                )?,
                access_token: get_env("SEARCH_ACCESS_TOKEN", None, is_prod)?,
                timeout_secs: parse_secs(
                    "SEARCH_TIMEOUT_SECS",
                    get_env("SEARCH_TIMEOUT_SECS", Some("10"), is_prod)?,
                )?,
            },
        })
    }
}

fn parse_secs(key: &str, value: String) -> Result<u64, AppError> {
    value.parse().map_err(|_| {
        AppError::ConfigError(anyhow::anyhow!(
            "{} must be a whole number of seconds, got {:?}",
            key,
            value
        ))
    })
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race each other.
    #[test]
    fn malformed_timeout_values_fail_loading() {
        env::set_var("AGENT_ACCESS_TOKEN", "agent-token");
        env::set_var("SEARCH_ACCESS_TOKEN", "search-token");
        env::set_var("GOOGLE_API_KEY", "api-key");

        env::set_var("LLM_TIMEOUT_SECS", "soon");
        assert!(AgentConfig::load().is_err());
        env::remove_var("LLM_TIMEOUT_SECS");

        env::set_var("SEARCH_TIMEOUT_SECS", "never");
        assert!(AgentConfig::load().is_err());
        env::remove_var("SEARCH_TIMEOUT_SECS");

        let config = AgentConfig::load().expect("Failed to load config");
        assert_eq!(config.models.timeout_secs, 30);
        assert_eq!(config.search.timeout_secs, 10);
    }
}
