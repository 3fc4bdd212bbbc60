//! HTTP server settings read from environment variables.

use crate::errors::{Error, Result};
use std::net::SocketAddr;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8001";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Resolves the socket address the API listens on from `LISTEN_ADDR`.
///
/// # Errors
/// Returns `Error::Config` if the configured value is not a valid socket address.
pub fn get_listen_addr() -> Result<SocketAddr> {
    let raw = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
    parse_listen_addr(&raw)
}

fn parse_listen_addr(raw: &str) -> Result<SocketAddr> {
    raw.parse().map_err(|e| Error::Config {
        message: format!("Invalid LISTEN_ADDR '{raw}': {e}"),
    })
}

/// Path of the optional TOML config file, from `CONFIG_PATH`.
#[must_use]
pub fn get_config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}
