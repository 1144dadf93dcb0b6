use rocket::{config::Config as RocketCfg, Rocket, Route};
use time::Duration;

use tw_core::{
    gateways::{notify::NotificationGateway, oauth::OAuthGateway},
    usecases,
};

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;


#[derive(Debug, Clone)]
pub struct Cfg {
    /// Base URL under which the server is publicly reachable,
    /// e.g. for the data-deletion status URLs handed to Facebook.
    pub public_url: String,
    /// Secret for signing bearer tokens. Random when unset, which
    /// invalidates all issued tokens on restart.
    pub token_secret: Option<String>,
    /// App secret shared with Facebook. Data-deletion callbacks are
    /// rejected as long as no secret is configured.
    pub facebook_app_secret: Option<String>,
    /// Maximum age of a cached itinerary.
    pub itinerary_ttl: Duration,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Gateways {
    oauth: Box<dyn OAuthGateway + Send + Sync>,
    notify: Box<dyn NotificationGateway + Send + Sync>,
}

pub(crate) struct Connections {
    db: sqlite::Connections,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    connections: Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Connections { db } = connections;
    let Gateways { oauth, notify } = gateways;

    info!("Deleting expired user e-mail tokens...");
    usecases::delete_expired_user_tokens(&db.exclusive().unwrap()).unwrap();

    let jwt_state = jwt::JwtState::new(cfg.token_secret.as_deref());

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let oauth_gw = guards::OAuth(oauth);
    let notify_gw = guards::Notify(notify);
    let version = guards::Version(version);

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(oauth_gw)
        .manage(notify_gw)
        .manage(cfg)
        .manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    oauth: Box<dyn OAuthGateway + Send + Sync>,
    notify: Box<dyn NotificationGateway + Send + Sync>,
    version: &'static str,
) {
    let mounts = mounts();
    let options = InstanceOptions {
        mounts,
        rocket_cfg: None,
        cfg,
        version,
    };
    let connections = Connections { db };
    let gateways = Gateways { oauth, notify };

    let instance = rocket_instance(options, connections, gateways);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors().unwrap();
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
