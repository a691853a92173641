//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{ListenConfigError, ServerConfig, bind_addr_from_env};

use state_builders::build_http_state;

use actix_web::dev::Server;
use actix_web::{HttpServer, web};

use donations::inbound::http::app::{build_app, session_middleware};

/// Construct the HTTP server for `config`.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        key,
        cookie_secure,
        bind_addr,
        db_pool,
    } = config;
    let http_state = web::Data::new(build_http_state(&db_pool));

    let server = HttpServer::new(move || {
        build_app(http_state.clone(), session_middleware(key.clone(), cookie_secure))
    })
    .bind(bind_addr)?
    .run();
    Ok(server)
}
