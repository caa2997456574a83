pub mod config;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod services;
pub mod startup;

use services::{identity_client::IdentityClient, suggestions::SuggestionService};
use std::sync::Arc;

/// Shared application state containing the identity client and the
/// suggestion service.
#[derive(Clone)]
pub struct AppState {
    pub identity_client: Arc<IdentityClient>,
    pub suggestions: Arc<SuggestionService>,
}

impl AppState {
    pub fn new(identity_client: Arc<IdentityClient>, suggestions: Arc<SuggestionService>) -> Self {
        Self {
            identity_client,
            suggestions,
        }
    }
}
