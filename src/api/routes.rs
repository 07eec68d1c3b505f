//! API route configuration.

use crate::api::handlers::{
    build_handler, delete_handler, details_handler, list_handler, redirect_handler,
    update_expiration_handler, update_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under the `/v1` prefix.
///
/// # Endpoints
///
/// - `POST   /shorturl/build` - Create a short URL
/// - `GET    /shorturl/all`   - List mappings (paginated)
/// - `GET    /shorturl/{id}`  - Mapping details
/// - `PUT    /shorturl/{id}`  - Update URL and/or expiry
/// - `PATCH  /shorturl/{id}`  - Update expiry only (query parameter)
/// - `DELETE /shorturl/{id}`  - Delete a mapping
/// - `GET    /{id}`           - Redirect to the original URL
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl/build", post(build_handler))
        .route("/shorturl/all", get(list_handler))
        .route(
            "/shorturl/{id}",
            get(details_handler)
                .put(update_handler)
                .patch(update_expiration_handler)
                .delete(delete_handler),
        )
        .route("/{id}", get(redirect_handler))
}
