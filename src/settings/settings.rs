use anyhow::{Result, anyhow};
use config::{Config, File};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub http: Http,
    pub log: Log,
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct Http {
    pub host: String,
    pub port: u16,
}

impl Http {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| anyhow!("invalid http.host {:?}: {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub backend: String, // "memory"
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

const PORT_VAR: &str = "PORT";

/// Defaults, then the optional settings file, then `PORT` from the environment.
pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    load_settings(path.unwrap_or(SETTINGS_PATH), std::env::var(PORT_VAR).ok())
}

fn load_settings(path: &str, port: Option<String>) -> Result<Settings> {
    // An empty PORT counts as unset.
    let port = port.filter(|p| !p.trim().is_empty());

    let settings: Settings = Config::builder()
        .set_default("http.host", "0.0.0.0")?
        .set_default("http.port", 3000)?
        .set_default("log.filter", "info")?
        .set_default("user.backend", "memory")?
        .add_source(File::with_name(path).required(false))
        .set_override_option("http.port", port)?
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}
