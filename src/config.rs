use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Both variables are optional: `SERVICE_HOST` falls back to
    /// `0.0.0.0` and `SERVICE_PORT` to `8080`. A `SERVICE_PORT` that
    /// does not parse as a port number is a startup error.
    pub fn from_env() -> Result<Self> {
        let service_host = env::var("SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        Ok(Config {
            service_host,
            service_port,
        })
    }

    /// Returns the `host:port` string the listener binds to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!(
            "  Service listening on: {}:{}",
            self.service_host,
            self.service_port
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("SERVICE_HOST");
            env::remove_var("SERVICE_PORT");
        }
    }

    #[test]
    #[serial]
    fn test_config_with_all_vars() {
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_HOST", "127.0.0.1");
            env::set_var("SERVICE_PORT", "9090");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.service_port, 9090);

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_config_with_defaults() {
        clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.service_port, 8080);
    }

    #[test]
    #[serial]
    fn test_invalid_port() {
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_port_out_of_range() {
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        let result = Config::from_env();
        assert!(result.is_err());

        clear_env_vars();
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            service_host: "127.0.0.1".to_string(),
            service_port: 9090,
        };
        assert_eq!(config.addr(), "127.0.0.1:9090");
    }
}
