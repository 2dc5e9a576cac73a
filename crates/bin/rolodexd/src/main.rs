//! # rolodexd — rolodex daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise logging
//! - Open the `SQLite` or `PostgreSQL` connection pool, picked by the URL
//!   scheme, and probe it; an unreachable database aborts startup
//! - Construct the repository, inject it into the person service, and inject
//!   the service into the axum router
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT), then close the pool
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use rolodex_adapter_http_axum::state::AppState;
use rolodex_adapter_storage_postgres_sqlx::PgPersonRepository;
use rolodex_adapter_storage_sqlite_sqlx::SqlitePersonRepository;
use rolodex_app::ports::PersonRepository;
use rolodex_app::services::person_service::PersonService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Backend, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(config.logging.env_filter()?)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Database
    let backend = config.database.backend();
    match backend {
        Backend::Sqlite => {
            let db = rolodex_adapter_storage_sqlite_sqlx::Config {
                database_url: config.database.url.clone(),
                create_schema: config.database.create_schema,
            }
            .build()
            .await
            .inspect_err(|err| tracing::error!(error = %err, "database unreachable"))?;
            tracing::info!(
                ?backend,
                database_url = %config.database.url,
                "connected to the database"
            );

            serve(SqlitePersonRepository::new(db.pool().clone()), &config).await?;
            db.close().await;
        }
        Backend::Postgres => {
            let db = rolodex_adapter_storage_postgres_sqlx::Config {
                database_url: config.database.url.clone(),
                create_schema: config.database.create_schema,
            }
            .build()
            .await
            .inspect_err(|err| tracing::error!(error = %err, "database unreachable"))?;
            // The URL may carry credentials.
            tracing::info!(?backend, "connected to the database");

            serve(PgPersonRepository::new(db.pool().clone()), &config).await?;
            db.close().await;
        }
    }

    Ok(())
}

async fn serve<PR>(person_repo: PR, config: &Config) -> Result<(), Box<dyn std::error::Error>>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    // Services
    let person_service = PersonService::new(person_repo);

    // HTTP
    let app = rolodex_adapter_http_axum::router::build(AppState::new(person_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(address = %bind_addr, "rolodexd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutting down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
