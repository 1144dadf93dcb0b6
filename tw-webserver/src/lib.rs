#[macro_use]
extern crate log;

use tw_core::gateways::{notify::NotificationGateway, oauth::OAuthGateway};
use tw_db_sqlite::Connections;

mod adapters;
mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    oauth_gw: Box<dyn OAuthGateway + Send + Sync>,
    notify_gw: Box<dyn NotificationGateway + Send + Sync>,
    version: &'static str,
) {
    web::run(
        connections.into(),
        enable_cors,
        cfg,
        oauth_gw,
        notify_gw,
        version,
    )
    .await;
}
