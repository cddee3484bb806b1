use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use anyhow::{Context, Result};

/// Fine-tuned model the tutor talks to unless `TUTOR_MODEL` says otherwise.
pub const FINE_TUNED_MODEL: &str = "ft:gpt-3.5-turbo-0613:your-english-teaching-model:id";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com";
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 5000));
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 1000;

/// Process-wide relay settings, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// `None` is allowed: every completion then fails at request time.
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub bind_addr: SocketAddr,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            model: FINE_TUNED_MODEL.to_string(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            bind_addr: DEFAULT_BIND_ADDR,
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| dotenvy::var(name).ok())
    }

    /// Builds the config from `lookup`, falling back to the defaults for
    /// anything it does not return.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self {
            api_key: lookup("OPENAI_API_KEY").filter(|key| !key.trim().is_empty()),
            ..Self::default()
        };

        if let Some(api_base) = lookup("OPENAI_API_BASE") {
            config.api_base = api_base;
        }
        if let Some(model) = lookup("TUTOR_MODEL") {
            config.model = model;
        }
        if let Some(addr) = lookup("TUTOR_BIND_ADDR") {
            config.bind_addr = addr
                .parse()
                .with_context(|| format!("TUTOR_BIND_ADDR is not a socket address: {addr}"))?;
        }

        Ok(config)
    }

    /// Default config aimed at another completion endpoint, e.g. a local fake
    /// API in tests.
    pub fn for_api(api_base: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            api_key,
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    pub fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.api_base.trim_end_matches('/'))
    }
}
