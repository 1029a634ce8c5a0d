use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable prefix; nested keys use `__`, e.g. `PAYROLL_BASIC__DATABASE_URL`.
pub const ENV_PREFIX: &str = "PAYROLL_";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub basic: BasicConfig,
    #[serde(default)]
    pub security: SecurityConfig,
}

impl Config {
    /// Defaults, then `config.toml` if present, then `PAYROLL_*` env vars.
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfig {
    pub listen_addr: String,
    /// Base of every `href` rendered in `_links` and `Location`.
    pub public_url: Url,
    pub database_url: String,
    pub loglevel: String,
    /// Seed empty tables at startup.
    pub preload: bool,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            public_url: Url::parse("http://localhost:8080").expect("static url is valid"),
            database_url: "sqlite::memory:".to_string(),
            loglevel: "info".to_string(),
            preload: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub enabled: bool,
    pub username: String,
    pub password: String,
    /// Exact request paths served without credentials.
    pub public_paths: Vec<String>,
    /// Where unauthenticated requests are sent; a Basic challenge is returned when unset.
    pub login_redirect: Option<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            username: "user".to_string(),
            password: "password".to_string(),
            public_paths: vec!["/hello".to_string()],
            login_redirect: None,
        }
    }
}

impl SecurityConfig {
    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths.iter().any(|p| p == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_serve_in_memory_database_without_auth() {
        let cfg = Config::default();
        assert_eq!(cfg.basic.database_url, "sqlite::memory:");
        assert_eq!(cfg.basic.public_url.as_str(), "http://localhost:8080/");
        assert!(!cfg.security.enabled);
        assert!(cfg.security.is_public("/hello"));
        assert!(!cfg.security.is_public("/employees"));
    }

    #[test]
    fn env_overrides_nested_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PAYROLL_BASIC__PRELOAD", "false");
            jail.set_env("PAYROLL_SECURITY__ENABLED", "true");
            jail.set_env("PAYROLL_BASIC__PUBLIC_URL", "https://payroll.example.com/api");
            let cfg = Config::load()?;
            assert!(!cfg.basic.preload);
            assert!(cfg.security.enabled);
            assert_eq!(cfg.basic.public_url.as_str(), "https://payroll.example.com/api");
            Ok(())
        });
    }

    #[test]
    fn toml_file_is_merged_under_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                [basic]
                listen_addr = "127.0.0.1:9000"
                loglevel = "debug"

                [security]
                username = "admin"
                "#,
            )?;
            jail.set_env("PAYROLL_BASIC__LOGLEVEL", "warn");
            let cfg = Config::load()?;
            assert_eq!(cfg.basic.listen_addr, "127.0.0.1:9000");
            assert_eq!(cfg.basic.loglevel, "warn");
            assert_eq!(cfg.security.username, "admin");
            assert_eq!(cfg.security.password, "password");
            Ok(())
        });
    }
}
