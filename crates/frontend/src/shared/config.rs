use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PortalConfig {
    pub app: AppConfig,
    pub session: SessionConfig,
    pub routes: RouteConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
}

/// localStorage keys holding the cached session.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SessionConfig {
    pub token_key: String,
    pub user_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RouteConfig {
    pub login_path: String,
    /// Landing page for roles without a canonical dashboard.
    pub default_dashboard_path: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[app]
title = "Petroleum Commission Portal"

[session]
token_key = "token"
user_key = "user"

[routes]
login_path = "/login"
default_dashboard_path = "/dashboard"
"#;

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            app: AppConfig {
                title: "Petroleum Commission Portal".to_string(),
            },
            session: SessionConfig::default(),
            routes: RouteConfig::default(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: "token".to_string(),
            user_key: "user".to_string(),
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            default_dashboard_path: "/dashboard".to_string(),
        }
    }
}

/// Parse the embedded configuration.
pub fn load_config() -> Result<PortalConfig, toml::de::Error> {
    toml::from_str(DEFAULT_CONFIG)
}

static CONFIG: Lazy<PortalConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("Failed to parse embedded portal config, using defaults: {}", e);
        PortalConfig::default()
    }
});

/// Process-wide configuration, parsed once.
pub fn config() -> &'static PortalConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.session.token_key, "token");
        assert_eq!(config.session.user_key, "user");
        assert_eq!(config.routes.login_path, "/login");
        assert_eq!(config.routes.default_dashboard_path, "/dashboard");
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        assert_eq!(load_config().unwrap(), PortalConfig::default());
        assert_eq!(config(), &PortalConfig::default());
    }
}
