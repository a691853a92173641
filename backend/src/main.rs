//! Donation desk entry-point: reads configuration, applies migrations and
//! serves the pages.

mod server;

use std::ffi::OsString;

use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use donations::inbound::http::session_config::{BuildMode, session_settings_from_env};
use donations::outbound::persistence::{DatabaseSettings, DbPool, run_pending_migrations};

use server::{ServerConfig, bind_addr_from_env, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let env = DefaultEnv::new();
    let session = session_settings_from_env(&env, BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    let bind_addr = bind_addr_from_env(&env).map_err(std::io::Error::other)?;

    // Settings come from the environment only; the server takes no flags.
    let database = DatabaseSettings::load_from_iter([OsString::from("donations")])
        .map_err(|err| std::io::Error::other(format!("failed to load database settings: {err}")))?;
    let pool_config = database.pool_config().map_err(std::io::Error::other)?;

    run_pending_migrations(pool_config.database_url())
        .await
        .map_err(std::io::Error::other)?;
    let pool = DbPool::new(pool_config)
        .await
        .map_err(std::io::Error::other)?;

    let config = ServerConfig::new(session.key, session.cookie_secure, bind_addr, pool);
    let server = create_server(config)?;
    info!(%bind_addr, "listening");
    server.await
}
