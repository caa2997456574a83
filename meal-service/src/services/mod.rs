pub mod identity_client;
pub mod metrics;
pub mod suggestions;
