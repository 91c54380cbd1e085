//! 服务配置
//!
//! 只从环境变量读取，不读写任何配置文件：
//! - `PORT`：监听端口，默认 5000
//! - `HOST`：监听地址，默认 0.0.0.0

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

/// 默认端口
pub const DEFAULT_PORT: u16 = 5000;

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT 不是合法端口: {value}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("HOST 不是合法地址: {value}")]
    InvalidHost {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// 服务配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// 从进程环境读取
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("PORT").filter(|v| !v.trim().is_empty()) {
            config.port = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: value.clone(), source })?;
        }

        if let Some(value) = lookup("HOST").filter(|v| !v.trim().is_empty()) {
            config.host = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidHost { value: value.clone(), source })?;
        }

        Ok(config)
    }

    /// 监听地址
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn test_port_and_host_override() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("HOST", "127.0.0.1")])).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_port_is_error() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));

        assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
    }

    #[test]
    fn test_invalid_host_is_error() {
        let err = ServerConfig::from_lookup(lookup(&[("HOST", "not-an-ip")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost { .. }));
    }
}
