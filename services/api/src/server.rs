use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::site_routes;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayer;
use diabeat::config::{AppConfig, ServerConfig};
use diabeat::error::AppError;
use diabeat::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    apply_overrides(&mut config.server, args);
    telemetry::init(&config.telemetry)?;

    let readiness = Arc::new(AtomicBool::new(false));
    let app = build_app(readiness.clone());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness.store(true, Ordering::Release);
    info!(environment = ?config.environment, %addr, "diabeat site listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(readiness))
        .await?;
    info!("diabeat site stopped");
    Ok(())
}

fn apply_overrides(server: &mut ServerConfig, args: ServeArgs) {
    let ServeArgs { host, port } = args;
    if let Some(host) = host {
        server.host = host;
    }
    if let Some(port) = port {
        server.port = port;
    }
}

/// Site routes wrapped with shared state and request metrics.
fn build_app(readiness: Arc<AtomicBool>) -> Router {
    let (metrics_layer, metrics_handle) = PrometheusMetricLayer::pair();
    let state = AppState {
        readiness,
        metrics: Arc::new(metrics_handle),
    };

    site_routes().layer(Extension(state)).layer(metrics_layer)
}

/// Resolves on Ctrl-C. Readiness drops first so probes stop routing traffic here.
async fn shutdown_signal(readiness: Arc<AtomicBool>) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "unable to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    readiness.store(false, Ordering::Release);
    info!("shutdown requested, draining connections");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_replace_configured_binding() {
        let mut server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };

        apply_overrides(
            &mut server,
            ServeArgs {
                host: Some("0.0.0.0".to_string()),
                port: None,
            },
        );

        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }
}
