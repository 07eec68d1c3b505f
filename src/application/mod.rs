//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers. All validation and invariant enforcement around mappings lives
//! in [`services::short_url_service::ShortUrlService`].

pub mod services;
