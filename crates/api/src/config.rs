//! Runtime configuration read from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;
use trustbank_auth::AdminSecret;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not valid: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub admin_secret: AdminSecret,
}

impl ApiConfig {
    /// Read `BIND_ADDR`, `PORT` and `ADMIN_TOKEN` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup("BIND_ADDR") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { var: "BIND_ADDR", value })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let admin_secret = lookup("ADMIN_TOKEN")
            .map(AdminSecret::new)
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            port,
            admin_secret,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
