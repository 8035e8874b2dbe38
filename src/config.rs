//! Everything else comes from the environment; we can have a little
//! hard-coded config, [as a
//! snack](https://knowyourmeme.com/memes/cats-can-have-a-little-salami).

use anyhow::{anyhow, Context, Result};
use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

/// One small app, one small pool.
pub const DB_MAX_CONNECTIONS: u32 = 10;

const DEFAULT_PORT: u16 = 8000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub debug: bool,
    pub port: u16,
    pub bind_addr: IpAddr,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let debug = get("DEBUG")
            .map(|v| {
                matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes")
            })
            .unwrap_or(false);
        let port = match get("PORT") {
            Some(p) => p
                .trim()
                .parse()
                .with_context(|| format!("PORT {p:?} is not a port number"))?,
            None => DEFAULT_PORT,
        };
        // Only reachable from this machine while debugging, from anywhere
        // otherwise.
        let bind_addr = match get("BIND_ADDR") {
            Some(a) => a.trim().parse().with_context(|| {
                format!("BIND_ADDR {a:?} is not an IP address")
            })?,
            None if debug => IpAddr::V4(Ipv4Addr::LOCALHOST),
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        Ok(Config {
            database_url: database_url(&get)?,
            debug,
            port,
            bind_addr,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn database_url(get: &impl Fn(&str) -> Option<String>) -> Result<String> {
    if let Some(url) = get("DATABASE_URL") {
        return Ok(url);
    }
    let require = |key: &str| {
        get(key).ok_or_else(|| {
            anyhow!("{key} must be set when DATABASE_URL is not")
        })
    };
    let pg_usr = require("POSTGRES_USER")?;
    let pg_pw = require("POSTGRES_PASSWORD")?;
    let pg_db = require("POSTGRES_DB")?;
    let pg_host = get("POSTGRES_HOST").unwrap_or_else(|| "localhost".into());

    Ok(format!(
        "postgres://{}:{}@{}:5432/{}",
        pg_usr, pg_pw, pg_host, pg_db
    ))
}
