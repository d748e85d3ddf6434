//! Query string parameters for listing authors.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::AuthorQuery;

/// Filtering and paging parameters for `GET /api/authors`.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
///
/// | Parameter      | Meaning                                             |
/// |----------------|-----------------------------------------------------|
/// | `mainCategory` | Exact category match, case-insensitive              |
/// | `searchQuery`  | Substring of first or last name (alias: `search`)   |
/// | `pageNumber`   | 1-based page, default 1                             |
/// | `pageSize`     | Items per page, default 10, at most 20              |
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorsResourceParameters {
    pub main_category: Option<String>,

    #[serde(alias = "search")]
    pub search_query: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_number: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl From<AuthorsResourceParameters> for AuthorQuery {
    fn from(p: AuthorsResourceParameters) -> Self {
        AuthorQuery::new(p.main_category, p.search_query, p.page_number, p.page_size)
    }
}
