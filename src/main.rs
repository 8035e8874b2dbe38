use db_ops::MemoStore;
use dotenvy::dotenv;
use std::{process, sync::Arc};

mod components;
mod config;
mod controllers;
mod dates;
mod db_ops;
mod errors;
mod humanize;
#[cfg(test)]
mod mem_store;
mod middleware;
mod models;
mod routes;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = match config::Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("bad configuration: {e:#}");
            process::exit(1);
        }
    };
    init_logging(config.debug);

    let store = match db_ops::PgMemoStore::connect(&config.database_url).await
    {
        Ok(s) => Arc::new(s),
        Err(e) => {
            log::error!(
                "failure opening database; is postgres running? {:#}",
                anyhow::Error::from(e)
            );
            process::exit(1);
        }
    };
    let state = models::AppState {
        store: store.clone(),
    };
    let app = routes::build_app(state);

    let addr = config.socket_addr();
    let server = match axum::Server::try_bind(&addr) {
        Ok(s) => s,
        Err(e) => {
            log::error!("cannot listen on {}: {}", addr, e);
            process::exit(1);
        }
    };
    log::info!("listening on {}", addr);
    let result = server
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await;

    store.close().await;
    if let Err(e) = result {
        log::error!("server error: {}", e);
        process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("cannot listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("shutting down");
}
