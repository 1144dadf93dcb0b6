use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("tripweaver.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub email: Option<Email>,
    pub gateway: Option<Gateway>,
    pub oauth: Option<OAuth>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
    pub public_url: String,
    pub token_secret: Option<String>,
    #[serde(deserialize_with = "deserialize_option_duration")]
    pub itinerary_ttl: Option<Duration>,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Email {
    pub gateway: Option<EmailGateway>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmailGateway {
    EmailToJsonFile,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub email_to_json_file: Option<EmailToJsonFile>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EmailToJsonFile {
    pub dir: PathBuf,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OAuth {
    pub facebook_app_secret: Option<String>,
}

impl Default for OAuth {
    fn default() -> Self {
        Config::default().oauth.expect("OAuth configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.db.is_some());
        assert!(cfg.webserver.is_some());
        assert!(cfg.gateway.is_some());
        assert!(cfg.oauth.is_some());
        assert!(cfg.email.is_none());
    }

    #[test]
    fn default_webserver_config() {
        let cfg = WebServer::default();
        assert!(!cfg.cors);
        assert!(cfg.token_secret.is_none());
        assert!(cfg.itinerary_ttl.is_some());
    }
}
