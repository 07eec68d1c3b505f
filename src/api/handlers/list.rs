//! Handler for the paginated listing endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::list::{ListQuery, ListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists stored mappings, paginated.
///
/// # Endpoint
///
/// `GET /v1/shorturl/all?page=1&limit=5`
///
/// `page` below 1 and `limit` below 5 are clamped up; the clamped values
/// are echoed in the response. `count` is the number of items returned on
/// this page.
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse>, AppError> {
    let page = state
        .shorturl_service
        .list(query.page.unwrap_or(1), query.limit.unwrap_or(5))
        .await?;

    let data: Vec<_> = page.data.into_iter().map(Into::into).collect();

    Ok(Json(ListResponse {
        count: data.len(),
        data,
        page: page.page,
        limit: page.limit,
    }))
}
