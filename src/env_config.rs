//! Shared environment configuration for both binaries.
//!
//! Consolidates `EXPKIT_BASE_PATH`, `EXPKIT_SAMPLE_SIZE`, `EXPKIT_HOST`,
//! `EXPKIT_PORT` and the `RUST_LOG` tracing filter. Unset or unparsable
//! values fall back to the defaults in [`crate::constants`].

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SAMPLE_SIZE};

/// Install the fmt subscriber. `RUST_LOG` directives are added on top of INFO.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();
}

/// Read `EXPKIT_BASE_PATH` (default `"."`) and chdir into it.
pub fn init_base_path() -> std::io::Result<PathBuf> {
    let base_path = std::env::var("EXPKIT_BASE_PATH").unwrap_or_else(|_| ".".to_string());
    tracing::info!(base_path = %base_path, "EXPKIT_BASE_PATH");
    let path = PathBuf::from(&base_path);
    std::env::set_current_dir(&path)?;
    if let Ok(cwd) = std::env::current_dir() {
        tracing::info!(cwd = %cwd.display(), "working directory");
    }
    Ok(path)
}

/// Read `EXPKIT_SAMPLE_SIZE` (default 30).
pub fn sample_size() -> usize {
    parse_or("EXPKIT_SAMPLE_SIZE", DEFAULT_SAMPLE_SIZE)
}

/// Read `EXPKIT_HOST` and `EXPKIT_PORT` (default `127.0.0.1:5000`).
pub fn server_addr() -> SocketAddr {
    let host = std::env::var("EXPKIT_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = parse_or("EXPKIT_PORT", DEFAULT_PORT);
    resolve_addr(&host, port)
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    parse_value(std::env::var(key).ok().as_deref(), default)
}

fn parse_value<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

fn resolve_addr(host: &str, port: u16) -> SocketAddr {
    let ip = host.parse().unwrap_or_else(|_| {
        tracing::warn!(host, "EXPKIT_HOST is not an IP address, using {DEFAULT_HOST}");
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    });
    SocketAddr::new(ip, port)
}
