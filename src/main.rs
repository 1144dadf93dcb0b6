#[macro_use]
extern crate log;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tw_core::gateways::notify::NotificationGateway;
use tw_gateways::{
    email::{SendToJsonFile, SendToLog},
    notify::Notify,
    oauth::OAuthClient,
};

mod config;
mod import;

use config::Config;

#[derive(Parser)]
#[command(name = "tripweaver", version, about = "Collaborative trip planning backend")]
struct Args {
    /// TOML configuration file.
    /// Falls back to `TRIPWEAVER_CONFIG` and then to `tripweaver.toml`.
    #[arg(long, value_name = "FILE")]
    cfg_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Seed the place catalog from a JSON file
    ImportPlaces {
        /// JSON file containing an array of places
        file: PathBuf,
        /// E-mail address of the account the import is attributed to
        #[arg(long)]
        account: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let config = Config::try_load_from_file_or_default(args.cfg_file)?;

    let connections = tw_db_sqlite::Connections::init(
        &config.db.conn_sqlite,
        u32::from(config.db.conn_pool_size),
    )?;
    tw_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    match args.command {
        Some(Command::ImportPlaces { file, account }) => {
            let account = account.parse()?;
            let count = import::import_places_from_file(&connections, &file, &account)?;
            info!("Imported {count} places from {}", file.display());
        }
        None => serve(config, connections).await,
    }
    Ok(())
}

async fn serve(config: Config, connections: tw_db_sqlite::Connections) {
    let config::WebServer {
        enable_cors,
        public_url,
        token_secret,
        itinerary_ttl,
    } = config.webserver;

    let notify = notification_gateway(config.email, &public_url);
    let oauth = Box::new(OAuthClient::new());

    let cfg = tw_webserver::Cfg {
        public_url,
        token_secret,
        facebook_app_secret: config.oauth.facebook_app_secret,
        itinerary_ttl,
    };
    tw_webserver::run(
        connections,
        enable_cors,
        cfg,
        oauth,
        notify,
        env!("CARGO_PKG_VERSION"),
    )
    .await;
}

fn notification_gateway(
    email: config::Email,
    public_url: &str,
) -> Box<dyn NotificationGateway + Send + Sync> {
    match email.gateway {
        Some(config::EmailGateway::EmailToJsonFile { dir }) => {
            match SendToJsonFile::try_new(&dir) {
                Ok(gw) => {
                    info!("Archiving outgoing e-mails in {}", dir.display());
                    Box::new(Notify::new(gw, public_url))
                }
                Err(err) => {
                    warn!(
                        "Failed to open the e-mail directory {}: {err}",
                        dir.display()
                    );
                    Box::new(Notify::new(SendToLog, public_url))
                }
            }
        }
        None => {
            info!("No e-mail gateway configured. Outgoing e-mails are logged.");
            Box::new(Notify::new(SendToLog, public_url))
        }
    }
}
