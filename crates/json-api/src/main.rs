//! BizDesk JSON API Server

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use bizdesk_app::context::AppContext;

use crate::{
    config::ServerConfig,
    products::{PgProductsRepository, ProductsRepository, UnconfiguredProductsRepository},
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod accounts;
mod branches;
mod categories;
mod config;
mod currencies;
mod discounts;
mod errors;
mod extensions;
mod healthcheck;
mod nullable;
mod observability;
mod products;
mod router;
mod settings;
mod shutdown;
mod state;
mod taxes;
#[cfg(test)]
mod test_helpers;
mod units;
mod users;

/// BizDesk JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
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

    if let Err(error) = observability::init_subscriber(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "subscriber failed to install, nothing else can report it"
        )]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }

    let app = if config.registry.seed_demo_data {
        match AppContext::seeded().await {
            Ok(app) => app,
            Err(seed_error) => {
                error!("failed to seed registry: {seed_error}");

                process::exit(1);
            }
        }
    } else {
        AppContext::in_memory()
    };

    let products: Arc<dyn ProductsRepository> =
        match PgProductsRepository::from_config(&config.database) {
            Ok(Some(repository)) => Arc::new(repository),
            Ok(None) => {
                info!("DB_SERVER not set, product lookup serves placeholders");

                Arc::new(UnconfiguredProductsRepository)
            }
            Err(db_error) => {
                error!("invalid product database configuration: {db_error}");

                process::exit(1);
            }
        };

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(Arc::new(State::new(app, products))))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(router::app_router());

    let doc = OpenApi::new("BizDesk API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router).await;
}
