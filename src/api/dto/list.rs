//! DTOs for the paginated listing endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use super::short_url::ShortUrlData;

/// Query parameters for `GET /v1/shorturl/all`.
///
/// Uses `serde_with` to parse the values from query strings as integers.
/// Out-of-range values are clamped by the service, not rejected here.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

/// One page of mappings. `count` is the number of items in `data`, not the
/// total number of stored mappings.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub data: Vec<ShortUrlData>,
    pub count: usize,
    pub page: i64,
    pub limit: i64,
}
