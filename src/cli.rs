//! Command line arguments.
//!
//! Each flag that overrides a config file value also reads an environment
//! variable, so the precedence is CLI > env > file > built-in default.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AppConfig, ConfigError, ENV_CONFIG_PATH, ENV_HOST, ENV_PORT};

/// echo-api: JSON health check and echo service
#[derive(Parser, Debug)]
#[command(name = "echo-api", version, about)]
pub struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, env = ENV_CONFIG_PATH)]
    pub config: Option<PathBuf>,

    /// Address to bind, overriding http.host
    #[arg(long, env = ENV_HOST)]
    pub host: Option<String>,

    /// Port to bind, overriding http.port
    #[arg(short, long, env = ENV_PORT)]
    pub port: Option<u16>,

    /// Log level filter (e.g., "echo_api=debug")
    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Load the config file (if any) and apply the host/port overrides.
    pub fn load_config(&self) -> Result<AppConfig, ConfigError> {
        AppConfig::load_or_default(self.config.as_deref())?
            .with_overrides(self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Tests below read or write process-wide env vars
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        std::env::remove_var(ENV_CONFIG_PATH);
        std::env::remove_var(ENV_HOST);
        std::env::remove_var(ENV_PORT);
    }

    #[test]
    fn no_arguments_uses_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let args = Args::try_parse_from(["echo-api"]).unwrap();
        let config = args.load_config().unwrap();
        assert_eq!(
            config.http.socket_addr().unwrap(),
            "0.0.0.0:5000".parse::<std::net::SocketAddr>().unwrap()
        );
    }

    #[test]
    fn flags_override_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nhost = \"127.0.0.1\"\nport = 7000").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let args =
            Args::try_parse_from(["echo-api", "--config", &path, "--host", "::1", "-p", "8080"])
                .unwrap();
        let config = args.load_config().unwrap();
        assert_eq!(config.http.host, "::1");
        assert_eq!(config.http.port, 8080);
    }

    #[test]
    fn env_overrides_file_and_flags_override_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nhost = \"127.0.0.1\"\nport = 7000").unwrap();

        std::env::set_var(ENV_CONFIG_PATH, file.path());
        std::env::set_var(ENV_HOST, "10.0.0.1");
        std::env::set_var(ENV_PORT, "9000");

        let from_env = Args::try_parse_from(["echo-api"]).unwrap().load_config();
        let from_flag = Args::try_parse_from(["echo-api", "--port", "9100"])
            .unwrap()
            .load_config();
        clear_env();

        let from_env = from_env.unwrap();
        assert_eq!(from_env.http.host, "10.0.0.1");
        assert_eq!(from_env.http.port, 9000);

        let from_flag = from_flag.unwrap();
        assert_eq!(from_flag.http.host, "10.0.0.1");
        assert_eq!(from_flag.http.port, 9100);
    }

    #[test]
    fn non_numeric_port_is_a_usage_error() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        assert!(Args::try_parse_from(["echo-api", "--port", "http"]).is_err());
    }

    #[test]
    fn invalid_override_fails_config_loading() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let args = Args::try_parse_from(["echo-api", "--host", "localhost"]).unwrap();
        assert!(matches!(
            args.load_config(),
            Err(ConfigError::Validation(_))
        ));
    }
}
