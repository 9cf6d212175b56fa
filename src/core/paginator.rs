//! Fixed-size paging over the filtered member list

use std::ops::{Range, RangeInclusive};

/// Rows shown per page
pub const PAGE_SIZE: usize = 10;

/// Current page plus page size.
///
/// The paginator does not hold the items it pages over; every query takes the
/// current item count so it always reflects the live filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    /// 1-based page index
    current_page: usize,
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// `ceil(count / page_size)`; zero when there is nothing to show
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size)
    }

    /// Highest page navigation may land on. Page 1 stays valid for an empty list.
    fn last_valid_page(&self, count: usize) -> usize {
        self.total_pages(count).max(1)
    }

    /// Index range of the current page within a list of `count` items
    pub fn page_range(&self, count: usize) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(count);
        let end = start.saturating_add(self.page_size).min(count);
        start..end
    }

    /// Slice out the current page and report the total page count
    pub fn paginate<'a, T>(&self, items: &'a [T]) -> (&'a [T], usize) {
        let range = self.page_range(items.len());
        (&items[range], self.total_pages(items.len()))
    }

    /// Jump to `page`, clamped to the valid range
    pub fn go_to(&mut self, page: usize, count: usize) {
        self.current_page = page.clamp(1, self.last_valid_page(count));
    }

    /// Advance one page; no-op on the last page
    pub fn next(&mut self, count: usize) {
        if self.can_next(count) {
            self.current_page += 1;
        }
    }

    /// Go back one page; no-op on the first page
    pub fn prev(&mut self) {
        if self.can_prev() {
            self.current_page -= 1;
        }
    }

    pub fn first(&mut self) {
        self.current_page = 1;
    }

    pub fn last(&mut self, count: usize) {
        self.current_page = self.last_valid_page(count);
    }

    /// Pull the current page back into range after the item count shrank
    pub fn clamp(&mut self, count: usize) {
        self.go_to(self.current_page, count);
    }

    /// Whether the first/prev controls are enabled
    pub fn can_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the next/last controls are enabled
    pub fn can_next(&self, count: usize) -> bool {
        self.current_page < self.total_pages(count)
    }

    /// Page numbers for the numbered page buttons
    pub fn page_numbers(&self, count: usize) -> RangeInclusive<usize> {
        1..=self.total_pages(count)
    }
}
