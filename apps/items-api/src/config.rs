//! Configuration for Items API

use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    /// Reads `APP_ENV`, `HOST` and `PORT`; unset values fall back to
    /// development mode on 0.0.0.0:9000.
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(
            [
                ("APP_ENV", None::<&str>),
                ("HOST", None),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "items_api");
                assert_eq!(config.server.port, 9000);
                assert_eq!(config.environment, Environment::Development);
            },
        );
    }

    #[test]
    fn test_config_rejects_bad_port() {
        temp_env::with_var("PORT", Some("ninety"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
