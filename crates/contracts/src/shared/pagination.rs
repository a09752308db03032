/// Number of page links shown around the current page
pub const DEFAULT_WINDOW: usize = 5;

/// Page links to render for a paginated table (all numbers 1-indexed)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageWindow {
    pub pages: Vec<usize>,
    pub show_first: bool,
    pub leading_ellipsis: bool,
    pub show_last: bool,
    pub trailing_ellipsis: bool,
    pub show_prev: bool,
    pub show_next: bool,
}

/// Keep a 1-indexed page inside `[1, total]`. With no pages at all the
/// result is 1.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.min(total).max(1)
}

/// Compute the window of page links around `current`.
///
/// The window is centred on `current` where possible and shifted left
/// at the end so that it stays `window` wide whenever `total` allows.
pub fn page_window(current: usize, total: usize, window: usize) -> PageWindow {
    if total == 0 || window == 0 {
        return PageWindow::default();
    }

    let current = clamp_page(current, total);
    let half = window / 2;

    let mut start = current.saturating_sub(half).max(1);
    let mut end = start + window - 1;
    if end > total {
        end = total;
        start = (end + 1).saturating_sub(window).max(1);
    }

    PageWindow {
        pages: (start..=end).collect(),
        show_first: start > 1,
        leading_ellipsis: start > 2,
        show_last: end < total,
        trailing_ellipsis: end + 1 < total,
        show_prev: current > 1,
        show_next: current < total,
    }
}
