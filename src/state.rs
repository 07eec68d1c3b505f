use std::sync::Arc;

use crate::application::services::ShortUrlService;
use crate::infrastructure::persistence::PgShortUrlRepository;

/// Shared application state injected into all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub shorturl_service: Arc<ShortUrlService<PgShortUrlRepository>>,
    /// Absolute base used when constructing short links in responses.
    pub base_url: String,
}
