use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::PathBuf,
};
use time::Duration;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "tripweaver.toml";

const ENV_NAME_CONFIG_FILE: &str = "TRIPWEAVER_CONFIG";
const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_TOKEN_SECRET: &str = "TRIPWEAVER_TOKEN_SECRET";
const ENV_NAME_FACEBOOK_APP_SECRET: &str = "FACEBOOK_APP_SECRET";
const ENV_NAME_ITINERARY_TTL: &str = "TRIPWEAVER_ITINERARY_TTL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub email: Email,
    pub oauth: OAuth,
}

impl Config {
    pub fn try_load_from_file_or_default(file_path: Option<PathBuf>) -> Result<Self> {
        let file_path = file_path
            .or_else(|| env::var(ENV_NAME_CONFIG_FILE).ok().map(PathBuf::from))
            .unwrap_or_else(|| {
                log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
                PathBuf::from(DEFAULT_CONFIG_FILE_NAME)
            });

        let raw_config = match fs::read_to_string(&file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        if let Ok(secret) = env::var(ENV_NAME_TOKEN_SECRET) {
            cfg.webserver.token_secret = Some(secret);
        }
        if let Ok(secret) = env::var(ENV_NAME_FACEBOOK_APP_SECRET) {
            cfg.oauth.facebook_app_secret = Some(secret);
        }
        if let Ok(ttl) = env::var(ENV_NAME_ITINERARY_TTL) {
            let ttl = duration_str::parse(&ttl)
                .map_err(|err| anyhow!("Invalid {ENV_NAME_ITINERARY_TTL}: {err}"))?;
            cfg.webserver.itinerary_ttl = Duration::try_from(ttl)?;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
    /// Base URL under which the server is publicly reachable.
    pub public_url: String,
    pub token_secret: Option<String>,
    pub itinerary_ttl: Duration,
}

pub struct Email {
    pub gateway: Option<EmailGateway>,
}

pub enum EmailGateway {
    /// For local testing purposes
    EmailToJsonFile {
        /// File system directory for writing emails into JSON files.
        dir: PathBuf,
    },
}

pub struct OAuth {
    pub facebook_app_secret: Option<String>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            email,
            gateway,
            oauth,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let email_gateway = match email.and_then(|m| m.gateway) {
            Some(gw_name) => {
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::EmailGateway::EmailToJsonFile => {
                        let raw::EmailToJsonFile { dir } =
                            gateway.email_to_json_file.ok_or_else(|| {
                                anyhow!("Missing 'email-to-json-file' gateway configuration")
                            })?;
                        log::info!("Use JSON file email gateway ({})", dir.display());
                        EmailGateway::EmailToJsonFile { dir }
                    }
                };
                Some(gw)
            }
            None => None,
        };

        let email = Email {
            gateway: email_gateway,
        };

        let raw::WebServer {
            cors,
            public_url,
            token_secret,
            itinerary_ttl,
        } = webserver.unwrap_or_default();

        let itinerary_ttl = itinerary_ttl.expect("Itinerary TTL configuration");
        let webserver = WebServer {
            enable_cors: cors,
            public_url,
            token_secret,
            itinerary_ttl: Duration::try_from(itinerary_ttl)?,
        };

        let raw::OAuth {
            facebook_app_secret,
        } = oauth.unwrap_or_default();

        let oauth = OAuth {
            facebook_app_secret,
        };

        Ok(Self {
            db,
            webserver,
            email,
            oauth,
        })
    }
}
