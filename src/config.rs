use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// ============================================================================
// Config
// ============================================================================

/// Address the HTTP server binds to.
pub const BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8000);

/// Process configuration, read once at startup and immutable thereafter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL override for the completion endpoint. `None` means the
    /// provider's default endpoint.
    pub api_base: Option<String>,
    /// API key for the provider. `None` means requests are sent without an
    /// Authorization header.
    pub api_key: Option<String>,
    /// Model identifier sent with every completion request.
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: None,
            api_key: None,
            model: default_model(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup. An empty
    /// `LLM_API_BASE` or `LLM_API_KEY` is treated the same as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_base: lookup("LLM_API_BASE").filter(|v| !v.is_empty()),
            api_key: lookup("LLM_API_KEY").filter(|v| !v.is_empty()),
            model: lookup("LLM_MODEL").unwrap_or_else(default_model),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_base, None);
        assert_eq!(config.api_key, None);
        assert_eq!(config.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_missing_vars_use_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.api_base, None);
        assert_eq!(config.api_key, None);
        assert_eq!(config.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_all_vars_set() {
        let config = Config::from_lookup(lookup_from(&[
            ("LLM_API_BASE", "http://localhost:11434/v1"),
            ("LLM_API_KEY", "sk-test"),
            ("LLM_MODEL", "llama3"),
        ]));
        assert_eq!(
            config.api_base.as_deref(),
            Some("http://localhost:11434/v1")
        );
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.model, "llama3");
    }

    #[test]
    fn test_empty_base_and_key_treated_as_unset() {
        let config =
            Config::from_lookup(lookup_from(&[("LLM_API_BASE", ""), ("LLM_API_KEY", "")]));
        assert_eq!(config.api_base, None);
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_bind_addr() {
        assert_eq!(BIND_ADDR.to_string(), "0.0.0.0:8000");
    }
}
