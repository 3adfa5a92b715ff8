//! Line-to-page accounting.
//!
//! A logical page is `lines_per_page` consecutive input lines. The
//! pager is advanced exactly once per line read, regardless of how
//! many words the line holds, and reports which page that line
//! belongs to.

/// Tracks the current line-within-page counter and page number.
///
/// Page numbering starts at 1; the line counter starts at 0 before
/// the first line is read.
#[derive(Debug, Clone)]
pub struct Pager {
    lines_per_page: u64,
    line_in_page: u64,
    page: u64,
}

impl Pager {
    /// Create a pager for the given page height.
    ///
    /// `lines_per_page = 0` is degenerate but accepted: the counter
    /// then exceeds it on every line, so each line rolls over to a
    /// fresh page starting with page 2. The arithmetic is kept
    /// literal rather than special-cased.
    pub fn new(lines_per_page: u64) -> Self {
        Self {
            lines_per_page,
            line_in_page: 0,
            page: 1,
        }
    }

    /// Account for one consumed input line and return the page it
    /// lands on.
    pub fn advance(&mut self) -> u64 {
        self.line_in_page += 1;
        if self.line_in_page > self.lines_per_page {
            self.page += 1;
            self.line_in_page = 1;
        }
        self.page
    }

    /// The page the most recently consumed line landed on (1 before
    /// any line was read).
    pub fn current_page(&self) -> u64 {
        self.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_page_one() {
        let pager = Pager::new(10);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_rollover_after_page_height() {
        let mut pager = Pager::new(2);
        assert_eq!(pager.advance(), 1);
        assert_eq!(pager.advance(), 1);
        assert_eq!(pager.advance(), 2);
        assert_eq!(pager.advance(), 2);
        assert_eq!(pager.advance(), 3);
    }

    #[test]
    fn test_single_line_pages() {
        let mut pager = Pager::new(1);
        let pages: Vec<u64> = (0..5).map(|_| pager.advance()).collect();
        assert_eq!(pages, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_zero_page_height_is_degenerate() {
        // Counter exceeds 0 immediately, so every line rolls over
        // and the very first line is assigned page 2
        let mut pager = Pager::new(0);
        assert_eq!(pager.advance(), 2);
        assert_eq!(pager.advance(), 3);
        assert_eq!(pager.advance(), 4);
    }

    #[test]
    fn test_pages_are_monotonic() {
        let mut pager = Pager::new(3);
        let mut last = 0;
        for i in 0..100 {
            let page = pager.advance();
            assert!(page >= last);
            last = page;
            // Exactly one page boundary every 3 lines
            assert_eq!(page, i / 3 + 1);
        }
    }
}
