use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use cryptocalc_core::{constants::SWAP_ANIMATION_MS, Locale};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub locale: Locale,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub swap_animation: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("CC_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid CC_LISTEN_ADDR")?;
        let locale: Locale = std::env::var("CC_LOCALE")
            .unwrap_or_else(|_| Locale::default().tag().to_string())
            .parse()
            .context("Invalid CC_LOCALE")?;
        let cors_allow = std::env::var("CC_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("CC_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let swap_animation_ms: u64 = std::env::var("CC_SWAP_ANIMATION_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(SWAP_ANIMATION_MS);
        Ok(Self {
            listen_addr,
            locale,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            swap_animation: Duration::from_millis(swap_animation_ms),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            locale: Locale::default(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            swap_animation: Duration::from_millis(SWAP_ANIMATION_MS),
        }
    }
}
