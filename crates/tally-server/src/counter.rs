//! The counter endpoint.
//!
//! One operation: load the stored value, increment, store it back, and
//! answer with the host identity and the new value. Storage failures never
//! fail the response; the worst case is a count restarting from zero.

use axum::extract::State;
use axum::http::StatusCode;

use tally_core::value;

use crate::app_state::AppState;

/// Request handler. Method and path are irrelevant; every request bumps the
/// shared counter once.
pub async fn serve(State(app): State<AppState>) -> (StatusCode, String) {
    let hostname = app.hostname();

    let value = match app.increment_gate() {
        Some(gate) => {
            let _guard = gate.lock().await;
            bump(&app).await
        }
        None => bump(&app).await,
    };

    (
        StatusCode::OK,
        format!("running on {hostname}, counter = {value}"),
    )
}

/// One read-modify-write pass over the store.
///
/// Concurrent passes can interleave between `load` and `save`; both then
/// store the same value and one increment is lost. The gate in [`serve`]
/// serializes passes within this process when configured to.
async fn bump(app: &AppState) -> u64 {
    let current = match app.store().load().await {
        Ok(current) => current,
        Err(e) => {
            tracing::warn!(error = %e, "counter load failed, starting from zero");
            None
        }
    };

    let next = value::next(current);

    // Write failures must not affect the response.
    let _ = app.store().save(next).await;

    next
}
