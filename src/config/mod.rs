// Configuration module entry point
// Loads config.toml, LUCAS_* environment overrides and built-in defaults

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::Config;

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

type Builder = config::builder::ConfigBuilder<config::builder::DefaultState>;

impl Config {
    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("LUCAS")
                    .prefix_separator("_")
                    .separator("__"),
            );

        with_defaults(builder)?.build()?.try_deserialize()
    }

    /// Built-in defaults only, ignoring files and the environment
    #[cfg(test)]
    pub fn defaults() -> Result<Self, config::ConfigError> {
        with_defaults(config::Config::builder())?
            .build()?
            .try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

fn with_defaults(builder: Builder) -> Result<Builder, config::ConfigError> {
    builder
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)?
        .set_default("logging.level", "info")?
        .set_default("logging.access_log", true)?
        .set_default("logging.show_headers", false)?
        .set_default("performance.keep_alive_timeout", 75)?
        .set_default("performance.read_timeout", 30)?
        .set_default("performance.write_timeout", 30)?
        .set_default("http.server_name", "Lucas-Hyper/1.0")?
        .set_default("http.enable_cors", false)?
        .set_default("http.max_body_size", 1024)?
        .set_default("lucas.path", "/calculate")?
        .set_default("lucas.offload", true)
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config::defaults().expect("defaults must deserialize")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let cfg = test_config();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.lucas.path, "/calculate");
        assert!(cfg.lucas.offload);
        assert_eq!(cfg.lucas.max_n, None);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.health.enabled);
        assert_eq!(cfg.health.liveness_path, "/healthz");
    }

    #[test]
    fn test_environment_overrides_only_load_from() {
        // No other test reads the environment, so setting the variable here is safe
        std::env::set_var("LUCAS_HTTP__SERVER_NAME", "Env-Server/2.0");
        let loaded = Config::load_from("nonexistent-lucas-test-config");
        std::env::remove_var("LUCAS_HTTP__SERVER_NAME");

        assert_eq!(loaded.unwrap().http.server_name, "Env-Server/2.0");
        assert_eq!(test_config().http.server_name, "Lucas-Hyper/1.0");
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = test_config();
        cfg.server.host = "0.0.0.0".to_string();
        cfg.server.port = 9000;
        assert_eq!(cfg.get_socket_addr().unwrap().to_string(), "0.0.0.0:9000");
    }

    #[test]
    fn test_invalid_host_rejected() {
        let mut cfg = test_config();
        cfg.server.host = "not a host".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }
}
