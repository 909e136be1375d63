//! Snapgram - Dioxus Fullstack Web Application
//!
//! This is a fullstack SSR web application built with Dioxus.
//! Data lives in Appwrite; the browser reaches it through server functions.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
#[cfg(any(feature = "server", test))]
mod appwrite;
mod auth;
mod components;
#[cfg(any(feature = "server", test))]
mod config;
mod pages;
mod posts;
mod query;
mod routes;
mod state;
mod types;
mod utils;

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use dioxus::prelude::*;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    init_tracing();

    // Fail early on missing settings; server functions would error anyway
    if let Err(e) = config::get() {
        tracing::error!(error = %e, "appwrite configuration is incomplete");
    }

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(std::env::var("COOKIE_SECURE").map(|v| v == "true").unwrap_or(false));

    let serve_config = ServeConfig::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let app = axum::Router::new()
        .serve_dioxus_application(serve_config, app::App)
        .layer(session_layer);

    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(%addr, "listening");
    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    init_tracing();

    // Launch the Dioxus app in the browser
    dioxus::launch(app::App);
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
