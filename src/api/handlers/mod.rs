//! HTTP request handlers for API endpoints.
//!
//! One handler module per endpoint.

pub mod build;
pub mod delete;
pub mod details;
pub mod expiration;
pub mod health;
pub mod list;
pub mod redirect;
pub mod update;

pub use build::build_handler;
pub use delete::delete_handler;
pub use details::details_handler;
pub use expiration::update_expiration_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use redirect::redirect_handler;
pub use update::update_handler;
