//! Page slicing for list views.

/// Maximum number of page buttons shown at once.
pub const PAGE_WINDOW: usize = 5;

/// One page of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// 1-based page number after clamping.
    pub number: usize,
    /// Number of pages; zero when the list is empty.
    pub total_pages: usize,
    /// Number of items across all pages.
    pub total_items: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl<T> Page<T> {
    /// Returns the 1-based position of the first item, or zero when empty.
    #[must_use]
    pub fn first_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.number - 1) * self.page_size + 1
        }
    }

    /// Returns the 1-based position of the last item, or zero when empty.
    #[must_use]
    pub fn last_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_position() + self.items.len() - 1
        }
    }

    /// Renders `"Showing X to Y of Z tasks"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} tasks",
            self.first_position(),
            self.last_position(),
            self.total_items
        )
    }

    /// Returns whether page controls are worth showing.
    #[must_use]
    pub const fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }

    /// Returns whether a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Returns whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// Returns the page buttons to display around the current page.
    #[must_use]
    pub fn window(&self) -> Vec<usize> {
        page_window(self.number, self.total_pages)
    }
}

/// Cuts page `page` (1-based) out of `items`.
///
/// A zero page size is treated as one. The page number is clamped into
/// `1..=total_pages`, so asking past the end yields the last page.
///
/// # Examples
///
/// ```
/// use taskdesk::task::dashboard::paginate;
///
/// let page = paginate((1..=23).collect::<Vec<_>>(), 3, 10);
/// assert_eq!(page.items, vec![21, 22, 23]);
/// assert_eq!(page.summary(), "Showing 21 to 23 of 23 tasks");
/// ```
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(size);
    let number = page.clamp(1, total_pages.max(1));
    let start = (number - 1) * size;

    Page {
        items: items.into_iter().skip(start).take(size).collect(),
        number,
        total_pages,
        total_items,
        page_size: size,
    }
}

/// Returns up to [`PAGE_WINDOW`] consecutive page numbers around `current`.
///
/// Near either end the window is pinned to that end; elsewhere `current`
/// sits in the middle.
///
/// # Examples
///
/// ```
/// use taskdesk::task::dashboard::page_window;
///
/// assert_eq!(page_window(1, 3), vec![1, 2, 3]);
/// assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
/// assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
/// ```
#[must_use]
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    let width = PAGE_WINDOW.min(total_pages);
    let first = if total_pages <= PAGE_WINDOW || current <= 3 {
        1
    } else if current + 2 >= total_pages {
        total_pages + 1 - PAGE_WINDOW
    } else {
        current - 2
    };
    (first..first + width).collect()
}
