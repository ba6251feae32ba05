//! # Startup
//!
//! Parses flags, resolves [`PedidosConfig`] (flags > `PEDIDOS_*` env > TOML > defaults),
//! installs the tracing subscriber, prepares the backing document and the upload area,
//! then hands over to [`crate::server`].
//!
//! Logging honours `RUST_LOG`; without it everything at `info` and above is shown.

pub mod setup;

use crate::server::{self, AppState, HttpOptions};
use anyhow::Context;
use clap::Parser;
use pedidosapp::api::PedidosApi;
use pedidosapp::config::PedidosConfig;
use pedidosapp::store::fs::FileStore;
use pedidosapp::uploads::UploadArea;
use setup::Cli;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        PedidosConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    cli.apply(&mut config);

    init_tracing(config.log_json);
    debug!(?config, "configuration resolved");

    let api = PedidosApi::new(
        FileStore::new(config.data_path()),
        UploadArea::new(config.uploads_dir.clone()),
    );
    api.init().with_context(|| {
        format!(
            "failed to prepare {} and {}",
            config.data_path().display(),
            config.uploads_dir.display()
        )
    })?;

    let state = AppState { api: Arc::new(api) };
    server::serve(&config.bind, state, HttpOptions::from_config(&config)).await
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if log_json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
