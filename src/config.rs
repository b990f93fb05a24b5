//! Service configuration loaded from environment variables.

use std::net::{Ipv4Addr, SocketAddr};

use serde::{Deserialize, Deserializer};

/// Address the service binds to (all interfaces).
pub const BIND_HOST: Ipv4Addr = Ipv4Addr::UNSPECIFIED;

/// Port the service listens on.
pub const BIND_PORT: u16 = 5000;

/// Log filter used in debug/verbose mode.
pub const DEBUG_LOG_FILTER: &str = "pipeline_greeter=debug,tower_http=debug,info";

/// Service configuration loaded from environment variables.
///
/// Read once at startup and handed to the router; handlers never touch the
/// process environment themselves.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Version reported by the root endpoint (`APP_VERSION`).
    #[serde(default = "default_app_version")]
    pub app_version: String,

    /// Deployment environment reported by the root endpoint (`ENV`).
    #[serde(rename = "env", default = "default_environment")]
    pub environment: String,

    /// Debug/verbose mode (`FLASK_DEBUG`, on only for `true` in any case).
    #[serde(
        rename = "flask_debug",
        default,
        deserialize_with = "deserialize_debug_flag"
    )]
    pub debug: bool,

    /// Log filter directive (`RUST_LOG`).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_app_version() -> String {
    "1.0.0".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn deserialize_debug_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.eq_ignore_ascii_case("true"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_version: default_app_version(),
            environment: default_environment(),
            debug: false,
            rust_log: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn load() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    /// Build configuration from explicit `NAME=value` pairs.
    ///
    /// Names follow the environment spelling (`APP_VERSION`, `ENV`, ...).
    pub fn from_vars<I, K, V>(vars: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars.into_iter().map(|(k, v)| (k.into(), v.into()));
        Ok(envy::from_iter(vars)?)
    }

    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((BIND_HOST, BIND_PORT))
    }

    /// Log filter directive for the tracing subscriber.
    pub fn log_filter(&self, verbose: bool) -> String {
        if verbose || self.debug {
            DEBUG_LOG_FILTER.to_string()
        } else {
            self.rust_log.clone()
        }
    }
}
