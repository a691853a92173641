//! HTTP server configuration object and helpers.

use std::net::{Ipv4Addr, SocketAddr};

use actix_web::cookie::Key;
use mockable::Env;

use donations::outbound::persistence::DbPool;

const PORT_ENV: &str = "PORT";
const DEFAULT_PORT: u16 = 5000;

/// Errors raised while reading listener settings.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListenConfigError {
    /// `PORT` is not a valid TCP port number.
    #[error("invalid value for PORT='{value}'; expected an integer in 0..=65535")]
    InvalidPort {
        /// Rejected value.
        value: String,
    },
}

/// Listen address on all interfaces, using `PORT` or the default 5000.
///
/// # Errors
/// Returns [`ListenConfigError::InvalidPort`] when `PORT` does not parse.
pub fn bind_addr_from_env<E: Env>(env: &E) -> Result<SocketAddr, ListenConfigError> {
    let port = match env.string(PORT_ENV) {
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ListenConfigError::InvalidPort { value })?,
        None => DEFAULT_PORT,
    };
    Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
}

/// Everything needed to start the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            key,
            cookie_secure,
            bind_addr,
            db_pool,
        }
    }
}
