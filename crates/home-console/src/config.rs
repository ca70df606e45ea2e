use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use home_api::CookieSettings;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "home-console", about = "OhMyHome listing front end")]
pub struct Args {
    /// Path to the TOML config file
    #[arg(long, env = "HOME_CONSOLE_CONFIG", default_value = "config.example.toml")]
    pub config: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub session: CookieSettings,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// No timeout when unset.
    pub timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 8080,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".into(),
            timeout_secs: None,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> Option<SocketAddr> {
        format!("{}:{}", self.bind, self.port).parse().ok()
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

pub fn load(path: &str) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => match parse(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to parse config {path}: {e}, using defaults");
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("failed to read config {path}: {e}, using defaults");
            Config::default()
        }
    }
}
