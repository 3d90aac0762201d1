use std::env;

use tracing::warn;

pub const DEFAULT_IP: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Reads SERVICE_IP and SERVICE_PORT, falling back to 0.0.0.0:5000.
    pub fn from_env() -> Self {
        Self::from_values(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn from_values(ip: Option<String>, port: Option<String>) -> Self {
        let ip = ip
            .filter(|ip| !ip.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IP.to_string());
        let port = match port {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid SERVICE_PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self { ip, port }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_unset() {
        let config = ServerConfig::from_values(None, None);

        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn should_take_explicit_ip_and_port() {
        let config =
            ServerConfig::from_values(Some("127.0.0.1".to_string()), Some("8081".to_string()));

        assert_eq!(config.bind_address(), "127.0.0.1:8081");
    }

    #[test]
    fn should_fall_back_to_default_port_when_unparseable() {
        let config = ServerConfig::from_values(None, Some("eighty".to_string()));

        assert_eq!(config.port, DEFAULT_PORT);
    }
}
