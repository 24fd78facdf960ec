//! Page windows over an ordered sequence
//!
//! A [`Paginator`] is a small `Copy` value: `page_size` plus the current page
//! index. Navigation returns a new paginator instead of mutating in place, and
//! every method that is given the catalog length first clamps the page back
//! into range, so a catalog that shrank on reload never leaves the page
//! pointing past the end.
//!
//! # Examples
//!
//! ```
//! use gridpick::paginate::Paginator;
//! use std::num::NonZeroUsize;
//!
//! let items: Vec<u32> = (0..20).collect();
//! let pager = Paginator::new(NonZeroUsize::new(16).unwrap());
//!
//! assert_eq!(pager.window(&items, 0).len(), 16);
//! let pager = pager.next(items.len());
//! assert_eq!(pager.current_window(&items), &items[16..]);
//! assert!(!pager.has_next(items.len()));
//! ```

use serde::Serialize;
use std::num::NonZeroUsize;

/// Page size used by both kiosk pickers (a 4x4 grid)
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(16).unwrap();

/// Grid width used by both kiosk pickers
pub const DEFAULT_COLUMNS: NonZeroUsize = NonZeroUsize::new(4).unwrap();

/// Page cursor over a sequence of `len` items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
    /// Create a paginator positioned on the first page
    #[must_use]
    pub const fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            current_page: 0,
        }
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Current page index, as last set (may be stale; see [`Self::clamped`])
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// `ceil(len / page_size)`; zero for an empty sequence
    #[must_use]
    pub const fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size.get())
    }

    /// Same paginator with the page pulled back into `0..total_pages`
    #[must_use]
    pub const fn clamped(self, len: usize) -> Self {
        let last = self.total_pages(len).saturating_sub(1);
        let current_page = if self.current_page > last {
            last
        } else {
            self.current_page
        };
        Self {
            page_size: self.page_size,
            current_page,
        }
    }

    /// Same paginator moved back to the first page
    #[must_use]
    pub const fn reset(self) -> Self {
        Self::new(self.page_size)
    }

    /// Items on `page`: `items[page*size .. min((page+1)*size, len)]`
    ///
    /// An out-of-range page yields an empty slice.
    #[must_use]
    pub fn window<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let size = self.page_size.get();
        let Some(start) = page.checked_mul(size).filter(|&s| s < items.len()) else {
            return &[];
        };
        let end = start.saturating_add(size).min(items.len());
        &items[start..end]
    }

    /// Items on the current page, after clamping
    #[must_use]
    pub fn current_window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let page = self.clamped(items.len()).current_page;
        self.window(items, page)
    }

    #[must_use]
    pub const fn has_prev(&self, len: usize) -> bool {
        self.clamped(len).current_page > 0
    }

    #[must_use]
    pub const fn has_next(&self, len: usize) -> bool {
        let page = self.clamped(len).current_page;
        (page + 1) * self.page_size.get() < len
    }

    /// Advance one page if there is one, else return the same state
    #[must_use]
    pub const fn next(self, len: usize) -> Self {
        let clamped = self.clamped(len);
        if clamped.has_next(len) {
            Self {
                page_size: self.page_size,
                current_page: clamped.current_page + 1,
            }
        } else {
            clamped
        }
    }

    /// Go back one page if there is one, else return the same state
    #[must_use]
    pub const fn prev(self, len: usize) -> Self {
        let clamped = self.clamped(len);
        if clamped.current_page > 0 {
            Self {
                page_size: self.page_size,
                current_page: clamped.current_page - 1,
            }
        } else {
            clamped
        }
    }

    /// `"Page {n} of {total}"`, one-based
    #[must_use]
    pub fn page_label(&self, len: usize) -> String {
        format!(
            "Page {} of {}",
            self.clamped(len).current_page + 1,
            self.total_pages(len)
        )
    }
}

/// Position of a button inside the page grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
}

/// Grid placement for the item at window-local `index`
#[must_use]
pub const fn grid_cell(index: usize, columns: NonZeroUsize) -> GridCell {
    GridCell {
        row: index / columns.get(),
        column: index % columns.get(),
    }
}

/// Inverse of [`grid_cell`]; `None` if `column` is outside the grid or the
/// index does not fit in `usize`
#[must_use]
pub const fn cell_index(cell: GridCell, columns: NonZeroUsize) -> Option<usize> {
    if cell.column >= columns.get() {
        return None;
    }
    match cell.row.checked_mul(columns.get()) {
        Some(start) => start.checked_add(cell.column),
        None => None,
    }
}
