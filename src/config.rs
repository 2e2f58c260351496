use std::{env, net::SocketAddr};

use anyhow::{Context, Result};

const DEFAULT_DATABASE_URL: &str = "sqlite:./data.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4000";

#[derive(Clone, Debug)]
pub struct Config {
  pub database_url: String,
  pub bind_addr: SocketAddr,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let database_url = lookup("CHATOY_DATABASE_URL")
      .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

    let bind_addr = lookup("CHATOY_BIND_ADDR")
      .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    let bind_addr: SocketAddr = bind_addr.parse()
      .with_context(|| format!("Invalid CHATOY_BIND_ADDR `{bind_addr}`"))?;

    Ok(Self { database_url, bind_addr })
  }
}
