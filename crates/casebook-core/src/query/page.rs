//! Fixed-size pagination over a view.
//!
//! Pages are 1-based. The page count never drops below 1, so an empty view
//! still has one (empty) page.

use std::num::NonZeroUsize;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

///
/// Page
///
/// One page of `items`, after clamping the requested page into range.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Page<'a, T> {
    pub page: usize,
    pub page_count: usize,
    pub items: &'a [T],
}

impl<T> Page<'_, T> {
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// `max(1, ceil(len / page_size))`.
#[must_use]
pub const fn page_count(len: usize, page_size: NonZeroUsize) -> usize {
    let pages = len.div_ceil(page_size.get());

    if pages == 0 { 1 } else { pages }
}

/// Slice `items` into the page `current_page`, clamped to `[1, page_count]`.
#[must_use]
pub fn paginate<T>(items: &[T], page_size: NonZeroUsize, current_page: usize) -> Page<'_, T> {
    let page_count = page_count(items.len(), page_size);
    let page = current_page.clamp(1, page_count);

    let size = page_size.get();
    let start = (page - 1).saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());

    Page {
        page,
        page_count,
        items: &items[start..end],
    }
}

///
/// Paginator
///
/// Holds the current page across recomputations. Whenever a page is taken
/// from a shrunken view, `current_page` is pulled back into range.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Paginator {
    page_size: NonZeroUsize,
    current_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    #[must_use]
    pub const fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            current_page: 1,
        }
    }

    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn page_count(&self, len: usize) -> usize {
        page_count(len, self.page_size)
    }

    /// Take the current page of `items`, clamping the stored page first.
    pub fn page<'a, T>(&mut self, items: &'a [T]) -> Page<'a, T> {
        self.clamp(items.len());

        paginate(items, self.page_size, self.current_page)
    }

    /// Pull the stored page back into `[1, page_count]`.
    pub fn clamp(&mut self, len: usize) {
        self.current_page = self.current_page.clamp(1, self.page_count(len));
    }

    /// Advance one page unless already on the last.
    pub fn next(&mut self, len: usize) {
        if self.current_page < self.page_count(len) {
            self.current_page += 1;
        }
    }

    /// Go back one page unless already on the first.
    pub const fn prev(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Jump to `page`; out-of-range targets are ignored.
    pub fn go_to(&mut self, page: usize, len: usize) -> bool {
        if page < 1 || page > self.page_count(len) {
            return false;
        }
        self.current_page = page;

        true
    }
}
