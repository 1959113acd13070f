//! REST runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the server. Request
//! handlers never read process-wide environment variables.

use anyhow::Context;
use std::net::SocketAddr;

/// Default bind address when `REMINDERS_REST_ADDR` is unset.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8080";

/// REST server configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestConfig {
    addr: SocketAddr,
    swagger_ui: bool,
}

impl RestConfig {
    pub fn new(addr: SocketAddr, swagger_ui: bool) -> Self {
        Self { addr, swagger_ui }
    }

    /// Build a `RestConfig` from optional raw values, typically read from the environment.
    ///
    /// Empty or whitespace-only values fall back to the defaults: [`DEFAULT_REST_ADDR`] and
    /// Swagger UI enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is not a valid socket address or the Swagger UI flag is
    /// not a recognised boolean.
    pub fn from_env_values(
        addr: Option<String>,
        swagger_ui: Option<String>,
    ) -> anyhow::Result<Self> {
        let addr = non_empty(addr).unwrap_or_else(|| DEFAULT_REST_ADDR.to_string());
        let addr: SocketAddr = addr
            .parse()
            .with_context(|| format!("invalid REMINDERS_REST_ADDR `{addr}`"))?;

        let swagger_ui = match non_empty(swagger_ui) {
            Some(value) => parse_flag(&value)
                .with_context(|| format!("invalid REMINDERS_SWAGGER_UI `{value}`"))?,
            None => true,
        };

        Ok(Self { addr, swagger_ui })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn swagger_ui(&self) -> bool {
        self.swagger_ui
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected true|false|1|0|yes|no|on|off, got `{other}`"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset_or_blank() {
        let cfg = RestConfig::from_env_values(None, None).expect("defaults are valid");
        assert_eq!(cfg.addr().to_string(), DEFAULT_REST_ADDR);
        assert!(cfg.swagger_ui());

        let cfg = RestConfig::from_env_values(Some("  ".into()), Some("".into()))
            .expect("blank falls back to defaults");
        assert_eq!(cfg.addr().to_string(), DEFAULT_REST_ADDR);
        assert!(cfg.swagger_ui());
    }

    #[test]
    fn test_parses_explicit_values() {
        let cfg = RestConfig::from_env_values(Some("127.0.0.1:3000".into()), Some("Off".into()))
            .expect("valid values");
        assert_eq!(cfg.addr().port(), 3000);
        assert!(!cfg.swagger_ui());
    }

    #[test]
    fn test_rejects_invalid_address() {
        let err = RestConfig::from_env_values(Some("localhost".into()), None)
            .expect_err("missing port should be rejected");
        assert!(err.to_string().contains("REMINDERS_REST_ADDR"));
    }

    #[test]
    fn test_rejects_invalid_swagger_flag() {
        let err = RestConfig::from_env_values(None, Some("maybe".into()))
            .expect_err("unknown flag should be rejected");
        assert!(err.to_string().contains("REMINDERS_SWAGGER_UI"));
    }
}
