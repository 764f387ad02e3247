//! Client-side pagination primitives.
//!
//! [`get_page`] slices an already-loaded collection, [`page_count`] derives
//! the number of pages, and [`Paginated`] bundles a page of items with the
//! windowed page-selector links rendered next to a list.

use serde::Serialize;

/// Page size used by every list view unless a caller overrides it.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Returns the 1-indexed `page` of `items`, clipped to the collection bounds.
///
/// A page past the end of the data yields an empty slice rather than an
/// error; callers are expected to keep the requested page in range but must
/// never be able to trigger an out-of-bounds access. Page 0 is treated as
/// page 1.
pub fn get_page<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if per_page == 0 {
        return &[];
    }
    let page = page.max(1);
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

/// Number of pages needed to show `total_items` at `per_page` items each.
pub fn page_count(total_items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    // A single page needs no selector at all.
    if last_page <= 1 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One page of items together with the page-selector links.
///
/// `pages` holds the window of page numbers to offer, with `None` marking a
/// gap. It is empty when everything fits on one page, which suppresses the
/// selector entirely.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
        }
    }
}
