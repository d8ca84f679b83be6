use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report `ok` while the profile store answers, `degraded` otherwise.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.profiles().health_check().await {
        Ok(()) => HealthResponse::ok(),
        Err(err) => {
            warn!(error = %err, "profile store health check failed");
            HealthResponse::degraded()
        }
    }
}
