use std::path::Path;

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

pub const ENCRYPT_ENV: &str = "SYNC_PROXY_ENCRYPT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub encrypt: bool,
}

impl FilterConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read filter config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parse filter config {}", path.display()))
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let encrypt = match lookup(ENCRYPT_ENV) {
            Some(raw) if !raw.trim().is_empty() => parse_bool(ENCRYPT_ENV, &raw)?,
            _ => false,
        };
        Ok(Self { encrypt })
    }

    pub fn apply_global(&self) {
        crate::flag::set_encrypt(self.encrypt);
    }
}

fn parse_bool(name: &str, raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("invalid {name}: `{other}` (expected true/false)")),
    }
}
