//! Core domain entities representing the business data model.
//!
//! The service persists a single entity: [`ShortUrl`], the mapping between
//! a 7-character short identifier and its destination URL. Companion
//! structs cover the write paths: [`NewShortUrl`] for creation,
//! [`ShortUrlPatch`] for partial updates.

pub mod short_url;

pub use short_url::{DEFAULT_EXPIRY_DAYS, NewShortUrl, ShortUrl, ShortUrlPatch};
