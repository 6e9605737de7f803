//! Liveness HTTP endpoint.
//!
//! A single root route used by external uptime probes. Not coupled to
//! the relay pipeline in any way.

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;

/// Static body returned by the root route.
pub const RUNNING_MESSAGE: &str = "Telegram bot is running.";

/// Builds the liveness router.
#[must_use]
pub fn router() -> Router {
    Router::new().route("/", get(running))
}

async fn running() -> &'static str {
    RUNNING_MESSAGE
}

/// Serves the liveness router on an already-bound listener.
///
/// # Errors
///
/// Returns an error if serving fails.
pub async fn serve(listener: TcpListener) -> std::io::Result<()> {
    axum::serve(listener, router()).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_route_reports_running() {
        let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve(listener));

        let body = reqwest::get(format!("http://{addr}/"))
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
            .text()
            .await
            .unwrap();

        assert_eq!(body, RUNNING_MESSAGE);
    }
}
