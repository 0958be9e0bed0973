use std::time::Duration;

use capx_db_sqlite::Connections;
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;
pub mod jwt;


#[derive(Debug, Clone)]
pub struct Cfg {
    /// Lifetime of issued access tokens.
    pub token_valid_for: Duration,
    /// Secret for signing access tokens.
    /// A random one is generated if missing.
    pub token_secret: Option<String>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    connections: Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;

    let jwt_state = jwt::JwtState::new(cfg.token_secret.as_deref(), cfg.token_valid_for);

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(connections)
        .manage(jwt_state)
        .manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(connections: Connections, enable_cors: bool, cfg: Cfg, version: &'static str) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };
    let instance = rocket_instance(options, connections);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
