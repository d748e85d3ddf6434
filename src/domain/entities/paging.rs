//! Author query object and paged results.

/// Page number used when none is requested.
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

/// Page size used when none is requested.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound for a requested page size. Larger requests are clamped.
pub const MAX_PAGE_SIZE: u32 = 20;

/// Filter and paging options for listing authors.
///
/// Blank filter values are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorQuery {
    pub main_category: Option<String>,
    pub search_query: Option<String>,
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for AuthorQuery {
    fn default() -> Self {
        Self {
            main_category: None,
            search_query: None,
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AuthorQuery {
    /// Builds a query, normalizing filters and bounding the page size.
    pub fn new(
        main_category: Option<String>,
        search_query: Option<String>,
        page_number: Option<u32>,
        page_size: Option<u32>,
    ) -> Self {
        Self {
            main_category: non_blank(main_category),
            search_query: non_blank(search_query),
            page_number: page_number.unwrap_or(DEFAULT_PAGE_NUMBER).max(1),
            page_size: page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Number of rows to skip before the requested page.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page_number) - 1) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// One page of results plus the size of the whole filtered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub page_size: u32,
    pub total_count: i64,
}

impl<T> PagedList<T> {
    pub fn new(items: Vec<T>, query: &AuthorQuery, total_count: i64) -> Self {
        Self {
            items,
            current_page: query.page_number,
            page_size: query.page_size,
            total_count,
        }
    }

    pub fn total_pages(&self) -> i64 {
        let size = i64::from(self.page_size.max(1));
        (self.total_count + size - 1) / size
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        i64::from(self.current_page) < self.total_pages()
    }

    /// Applies a conversion to every item, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedList<U> {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            page_size: self.page_size,
            total_count: self.total_count,
        }
    }
}
