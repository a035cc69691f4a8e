//! API server entry point.

use api::config::Config;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Resolves on Ctrl-C. If the handler cannot be installed the server keeps
/// running until some other signal ends the process.
async fn ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

/// Resolves when the process is asked to stop, so in-flight requests can drain.
#[cfg(unix)]
async fn shutdown_signal() {
    use signal::unix::{SignalKind, signal as unix_signal};

    let mut sigterm = match unix_signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(e) => {
            tracing::warn!(error = %e, "cannot listen for SIGTERM, falling back to Ctrl-C");
            ctrl_c().await;
            return;
        }
    };

    let name = tokio::select! {
        () = ctrl_c() => "SIGINT",
        _ = sigterm.recv() => "SIGTERM",
    };
    tracing::info!(signal = name, "draining connections before exit");
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    ctrl_c().await;
    tracing::info!(signal = "ctrl-c", "draining connections before exit");
}

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    let state = api::create_default_state().expect("demo catalog has unique product ids");
    let app = api::create_app(state, metrics_handle);

    let addr = config.addr();
    tracing::info!(%addr, "starting store server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("store server stopped");
}
