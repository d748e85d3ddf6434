//! Paging metadata sent alongside list responses.

use serde::{Deserialize, Serialize};

use crate::api::routes::authors_page_url;
use crate::domain::entities::{AuthorQuery, PagedList};

/// Name of the response header carrying [`PaginationMetadata`] as JSON.
pub const PAGINATION_HEADER: &str = "x-pagination";

/// Describes the page returned in the body and the whole result set.
///
/// Page links are `null` on the first and last page respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub total_count: i64,
    pub page_size: u32,
    pub current_page: u32,
    pub total_pages: i64,
    pub previous_page_link: Option<String>,
    pub next_page_link: Option<String>,
}

impl PaginationMetadata {
    /// Builds the metadata for an authors page, linking its neighbours with
    /// the same filters.
    pub fn for_authors<T>(
        page: &PagedList<T>,
        query: &AuthorQuery,
        base_url: Option<&str>,
    ) -> Self {
        Self {
            total_count: page.total_count,
            page_size: page.page_size,
            current_page: page.current_page,
            total_pages: page.total_pages(),
            previous_page_link: page
                .has_previous()
                .then(|| authors_page_url(base_url, query, page.current_page - 1)),
            next_page_link: page
                .has_next()
                .then(|| authors_page_url(base_url, query, page.current_page + 1)),
        }
    }
}
