//! Application state for the HTTP server.

use std::sync::Arc;

use crate::client::NasaClient;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// NASA event client shared across requests
    pub client: Arc<NasaClient>,
}

impl AppState {
    /// Create a new application state with the given client.
    pub fn new(client: Arc<NasaClient>) -> Self {
        Self { client }
    }
}
