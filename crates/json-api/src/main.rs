//! Bliss at Home JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    catcher::Catcher,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use bliss_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod api_info;
mod auth;
mod bookings;
mod config;
mod errors;
mod extensions;
mod healthcheck;
mod observability;
mod pricing;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Bliss JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(source) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("{source}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();
    let environment = config.environment.app_env;

    info!(%environment, "starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let app =
        match AppContext::from_database_url(&config.database.database_url, config.auth.into_verifier())
            .await
        {
            Ok(app) => app,
            Err(init_error) => {
                error!("failed to initialize app context: {init_error}");

                process::exit(1);
            }
        };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app, environment)))
        .push(router::app_router());

    let doc = OpenApi::new("Bliss at Home API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer).bearer_format("JWT")),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let service = Service::new(router).catcher(Catcher::default().hoop(errors::error_envelope));

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(service).await;

    info!("server stopped");
}
