//! REST Proxy (v1)
//!
//! Forwards inbound HTTP requests to configured upstream resources,
//! translating each one into an outbound descriptor: a composed target
//! URI, injected credentials, and headers resolved from per-resource
//! templates.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────────┐
//!                       │                   REST PROXY                      │
//!                       │                                                   │
//!   Client Request      │  ┌─────────┐   ┌──────────┐   ┌──────────────┐   │
//!   ────────────────────┼─▶│  http   │──▶│ resolver │──▶│  pipeline    │   │
//!                       │  │ server  │   │ (config) │   │ uri+headers  │   │
//!                       │  └─────────┘   └──────────┘   └──────┬───────┘   │
//!                       │                                      │           │
//!                       │                                      ▼           │
//!   Client Response     │  ┌─────────┐                 ┌──────────────┐    │
//!   ◀───────────────────┼──│response │◀────────────────│  transport   │◀───┼── Upstream
//!                       │  │ mapping │                 │  executor    │    │   Resource
//!                       │  └─────────┘                 └──────────────┘    │
//!                       │                                                   │
//!                       │  ┌─────────────────────────────────────────────┐ │
//!                       │  │           Cross-Cutting Concerns             │ │
//!                       │  │  config reload │ observability │ lifecycle   │ │
//!                       │  └─────────────────────────────────────────────┘ │
//!                       └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use rest_proxy::config::loader::load_config;
use rest_proxy::config::watcher::ConfigWatcher;
use rest_proxy::config::{ConfigResolver, ProxyConfig};
use rest_proxy::http::HttpServer;
use rest_proxy::lifecycle::Shutdown;
use rest_proxy::observability;

#[derive(Debug, Parser)]
#[command(name = "rest-proxy", version, about = "REST proxy for configured upstream resources")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // A missing config file starts the proxy with defaults: no resources,
    // no watcher.
    let config = if args.config.exists() {
        load_config(&args.config)?
    } else {
        ProxyConfig::default()
    };

    observability::logging::init_logging(&config.observability.log_level);

    tracing::info!("rest-proxy v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        resources = config.resources.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let resolver = Arc::new(ConfigResolver::new(config.clone()));

    // Hot reload: accepted config files are swapped into the resolver
    // snapshot; requests in flight keep the version they started with.
    let mut watcher_guard = None;
    if args.config.exists() {
        let (watcher, mut updates) = ConfigWatcher::new(&args.config);
        watcher_guard = Some(watcher.run()?);

        let reload_resolver = resolver.clone();
        tokio::spawn(async move {
            while let Some(new_config) = updates.recv().await {
                reload_resolver.swap(new_config);
                tracing::info!("Configuration snapshot replaced");
            }
        });
    }

    let shutdown = Shutdown::new();
    let signal_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.trigger();
        }
    });

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(&config, resolver);

    server.run(listener, signal_shutdown).await?;

    drop(watcher_guard);
    tracing::info!("Shutdown complete");
    Ok(())
}
