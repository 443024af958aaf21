//! Server address configuration from the `HOST` and `PORT` environment variables.

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    /// Build from raw variable values. An unparsable port falls back to the default.
    pub fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let host = host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match port {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        Self { host, port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        assert_eq!(ServerConfig::from_vars(None, None), ServerConfig::default());
    }

    #[test]
    fn reads_host_and_port() {
        let c = ServerConfig::from_vars(Some("127.0.0.1".into()), Some("3000".into()));
        assert_eq!(c.host, "127.0.0.1");
        assert_eq!(c.port, 3000);
    }

    #[test]
    fn bad_port_falls_back() {
        let c = ServerConfig::from_vars(Some(" ".into()), Some("http".into()));
        assert_eq!(c, ServerConfig::default());
    }
}
