use std::sync::Arc;

use crate::{
    db::DetailCache,
    models::MediaUrls,
    services::{providers::MovieProvider, DetailFetcher},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub details: DetailFetcher,
}

impl AppState {
    /// Wires the provider and the loaded cache into the request-handling services
    pub fn new(provider: Arc<dyn MovieProvider>, cache: DetailCache, urls: MediaUrls) -> Self {
        Self {
            details: DetailFetcher::new(provider, cache, urls),
        }
    }
}
