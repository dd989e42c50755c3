//! Runtime configuration.
//!
//! DESIGN
//! ======
//! All environment reads happen once at startup in `AppConfig::from_env`.
//! Components receive the typed config, so the login proxy and cookie logic
//! stay testable without touching ambient process state.

pub const BACKEND_DOCKER_URL: &str = "http://address_module_backend:8000";
pub const BACKEND_LOCAL_URL: &str = "http://localhost:8000";

pub const DEFAULT_PORT: u16 = 3000;

/// Where this frontend runs. Fixes the backend base address; there is no
/// per-request override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    /// Inside the compose network, next to the backend container.
    Docker,
    /// On a developer machine, backend on loopback.
    Local,
}

impl DeploymentMode {
    #[must_use]
    pub fn backend_base_url(self) -> &'static str {
        match self {
            Self::Docker => BACKEND_DOCKER_URL,
            Self::Local => BACKEND_LOCAL_URL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub deployment: DeploymentMode,
    pub environment: Environment,
    pub port: u16,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// - `DOCKER`: truthy (`1`/`true`/`yes`/`on`) when running inside the
    ///   compose network; default off
    /// - `APP_ENV`: `development` for local work; anything else (including
    ///   unset) is treated as production
    /// - `PORT`: listen port, default 3000
    #[must_use]
    pub fn from_env() -> Self {
        let deployment = if env_bool("DOCKER").unwrap_or(false) {
            DeploymentMode::Docker
        } else {
            DeploymentMode::Local
        };
        let environment = parse_environment(std::env::var("APP_ENV").ok().as_deref());
        let port = env_parse("PORT", DEFAULT_PORT);
        Self { deployment, environment, port }
    }

    /// Whether session cookies carry the `Secure` attribute.
    /// Disabled only in local development.
    #[must_use]
    pub fn cookie_secure(&self) -> bool {
        self.environment != Environment::Development
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

fn parse_environment(raw: Option<&str>) -> Environment {
    match raw.map(str::trim) {
        Some(value) if value.eq_ignore_ascii_case("development") => Environment::Development,
        _ => Environment::Production,
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
