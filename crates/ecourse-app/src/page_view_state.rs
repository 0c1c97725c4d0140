//! Page view state - scroll position, viewport bounds, and section focus.
//!
//! Shared by the app handler layer (scroll and section commands) and the
//! TUI layer, which reports the laid-out size back after each render.

/// State for scrolling one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageViewState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Total number of laid-out lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
    /// Line of each section header, `None` when hidden by a collapsed parent
    /// (set during render, indexed like `Page::sections`)
    pub section_lines: Vec<Option<usize>>,
    /// Section currently selected for toggling
    pub focused_section: Option<usize>,
    /// Scroll the focused section into view on the next layout pass
    pub follow_focus: bool,
}

impl PageViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget scroll position and focus (used when switching pages)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Largest offset that still fills the viewport
    pub fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Page up
    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    /// Page down
    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Focus a section and request it be scrolled into view
    pub fn focus_section(&mut self, index: usize) {
        self.focused_section = Some(index);
        self.follow_focus = true;
    }

    /// Update with the size of the latest layout
    ///
    /// Clamps the offset when content shrank, then brings the focused
    /// section header into view if requested.
    pub fn update_layout(
        &mut self,
        total: usize,
        visible: usize,
        section_lines: Vec<Option<usize>>,
    ) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.section_lines = section_lines;

        if self.offset > self.max_offset() {
            self.offset = self.max_offset();
        }

        if self.follow_focus {
            self.follow_focus = false;
            if let Some(line) = self
                .focused_section
                .and_then(|index| self.section_lines.get(index).copied().flatten())
            {
                if line < self.offset || line >= self.offset + visible {
                    self.offset = line.min(self.max_offset());
                }
            }
        }
    }

    /// Whether content extends past the viewport
    pub fn is_scrollable(&self) -> bool {
        self.total_lines > self.visible_lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(total: usize, visible: usize) -> PageViewState {
        let mut state = PageViewState::new();
        state.update_layout(total, visible, Vec::new());
        state
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = sized(100, 20);
        state.scroll_down(500);
        assert_eq!(state.offset, 80);
        state.scroll_up(5);
        assert_eq!(state.offset, 75);
        state.scroll_up(500);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_page_up_down() {
        let mut state = sized(100, 20);
        state.page_down();
        assert_eq!(state.offset, 18);
        state.page_down();
        assert_eq!(state.offset, 36);
        state.page_up();
        assert_eq!(state.offset, 18);
    }

    #[test]
    fn test_top_and_bottom() {
        let mut state = sized(50, 10);
        state.scroll_to_bottom();
        assert_eq!(state.offset, 40);
        state.scroll_to_top();
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_short_content_does_not_scroll() {
        let mut state = sized(5, 10);
        state.scroll_down(3);
        assert_eq!(state.offset, 0);
        assert!(!state.is_scrollable());
    }

    #[test]
    fn test_layout_shrink_clamps_offset() {
        let mut state = sized(100, 20);
        state.scroll_to_bottom();
        state.update_layout(30, 20, Vec::new());
        assert_eq!(state.offset, 10);
    }

    #[test]
    fn test_follow_focus_scrolls_section_into_view() {
        let mut state = sized(200, 20);
        state.focus_section(1);
        state.update_layout(200, 20, vec![Some(3), Some(120)]);
        assert_eq!(state.offset, 120);
        assert!(!state.follow_focus);

        // Already visible: no jump
        state.focus_section(1);
        state.scroll_up(5);
        state.update_layout(200, 20, vec![Some(3), Some(120)]);
        assert_eq!(state.offset, 115);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = sized(100, 20);
        state.scroll_down(10);
        state.focus_section(0);
        state.reset();
        assert_eq!(state, PageViewState::default());
    }
}
