//! Client-side pagination over the in-memory list

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    rows_per_page: usize,
    options: Vec<usize>,
}

impl Pagination {
    /// `rows_per_page` of 0 is bumped to 1
    pub fn new(rows_per_page: usize, options: Vec<usize>) -> Self {
        Self {
            page: 0,
            rows_per_page: rows_per_page.max(1),
            options,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Number of pages for `total` rows; an empty list still has one page
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.rows_per_page).max(1)
    }

    /// Index range of the rows on the current page
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page * self.rows_per_page).min(total);
        let end = (start + self.rows_per_page).min(total);
        start..end
    }

    pub fn next_page(&mut self, total: usize) -> bool {
        if self.page + 1 < self.page_count(total) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Change the page size; always returns to the first page
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page.max(1);
        self.page = 0;
    }

    /// Step to the next (or previous) configured page size, wrapping around
    pub fn cycle_rows_per_page(&mut self, forward: bool) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len();
        let next = match self.options.iter().position(|&o| o == self.rows_per_page) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.set_rows_per_page(self.options[next]);
    }

    /// Pull the page back in range after the list shrank
    pub fn clamp(&mut self, total: usize) {
        let last = self.page_count(total) - 1;
        if self.page > last {
            self.page = last;
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(10, vec![10, 25, 50, 100])
    }
}
