use std::sync::Arc;

use crate::llm_client::ModelGateway;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data: chains never share state across requests.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model gateway. Default: AnthropicGateway.
    pub gateway: Arc<dyn ModelGateway>,
}
