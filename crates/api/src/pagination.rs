//! Generic cursor pagination.

use std::future::Future;

use crate::error::ApiResult;

/// One page of a cursor-paginated list response.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Continuation token; `None` or an empty string marks the final page.
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }
}

/// Walk a cursor-paginated endpoint to exhaustion and collect every item.
///
/// `fetch` is called with `None` first, then with each non-empty
/// `next_cursor` until a page comes back without one. Items keep their page
/// order and are not deduplicated. A failing page aborts the whole fetch;
/// nothing already accumulated is returned.
///
/// No page ceiling is enforced: an upstream that keeps returning a cursor
/// loops forever.
pub async fn collect_pages<T, F, Fut>(mut fetch: F) -> ApiResult<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = ApiResult<Page<T>>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = fetch(cursor.take()).await?;
        items.extend(page.items);
        match page.next_cursor {
            Some(next) if !next.is_empty() => cursor = Some(next),
            _ => return Ok(items),
        }
    }
}
