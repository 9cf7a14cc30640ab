//! Tally server binary.
//!
//! A deliberately small demo: every HTTP request bumps a counter persisted
//! to a file and the response names the replica that served it. Replicas
//! pointed at the same file (a shared volume) count together — the storage,
//! not the process, is what they have in common.

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use tally_server::{app_state, config, router};

/// Config file read at startup; built-in defaults apply when it is absent.
const CONFIG_PATH: &str = "tally.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_optional(CONFIG_PATH).expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "tally-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
