//! Pagination over the filtered classroom list

use std::ops::Range;

use crate::error::{Error, Result};

/// Selectable page sizes for the classroom table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Five,
    Ten,
    Twenty,
    TwentyFive,
    Thirty,
    Fifty,
}

impl PageSize {
    /// Selector order, matching the "Items per page" dropdown
    pub const ALL: [PageSize; 6] = [
        PageSize::Five,
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::TwentyFive,
        PageSize::Thirty,
        PageSize::Fifty,
    ];

    /// Number of rows per page
    pub fn rows(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::TwentyFive => 25,
            PageSize::Thirty => 30,
            PageSize::Fifty => 50,
        }
    }

    /// Look up a size by its position in the selector
    pub fn from_index(index: usize) -> Option<PageSize> {
        Self::ALL.get(index).copied()
    }

    /// Position of this size in the selector
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Five
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(rows: usize) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.rows() == rows)
            .ok_or(Error::UnsupportedPageSize(rows))
    }
}

/// A 1-based page window over a list of known length.
///
/// Invariant: `1 <= current_page <= max_page` at all times. Changing the
/// list length clamps the current page; changing the page size resets it
/// to the first page.
#[derive(Debug, Clone)]
pub struct Paginator {
    len: usize,
    page_size: PageSize,
    current_page: usize,
}

impl Paginator {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            len: 0,
            page_size,
            current_page: 1,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Last valid page index. Always at least 1, even for an empty list.
    pub fn max_page(&self) -> usize {
        self.len.div_ceil(self.page_size.rows()).max(1)
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.max_page()
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Advance one page. No-op on the last page.
    pub fn next(&mut self) {
        if self.has_next() {
            self.current_page += 1;
        }
    }

    /// Go back one page. No-op on the first page.
    pub fn prev(&mut self) {
        if self.has_prev() {
            self.current_page -= 1;
        }
    }

    /// Tell the paginator the underlying list changed size, clamping the
    /// current page down if it no longer exists.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.current_page = self.current_page.min(self.max_page());
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.current_page = 1;
    }

    /// Index range of the current page, exclusive end. Empty for an empty
    /// list.
    pub fn window(&self) -> Range<usize> {
        let start = (self.current_page - 1) * self.page_size.rows();
        let end = (start + self.page_size.rows()).min(self.len);
        start.min(self.len)..end
    }
}
