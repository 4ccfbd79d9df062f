//! Stateful page-window navigation.
//!
//! The controller keeps the coerced configuration and the zero-based positions of
//! the visible window; everything else is derived on demand through
//! [`PaginationController::state`].

use std::ops::Range;

use tracing::{debug, trace};

use crate::config::{DEFAULT_PAGE_SIZE, MAX_TOTAL_ITEMS, PaginationConfig, PaginationOptions};
use crate::error::PaginationError;
use crate::event::{ObserverId, Observers, PageChangeEvent, PageObserver};
use crate::page::{clamp_page, initial_window, slice_window, total_pages};
use crate::state::PaginationState;

/// Owns pagination state and applies navigation commands to it.
#[derive(Debug)]
pub struct PaginationController {
    config: PaginationConfig,
    window: Range<usize>,
    observers: Observers,
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::with_config(PaginationConfig::default())
    }
}

impl PaginationController {
    /// Build a controller from raw options, coercing anything out of range.
    pub fn new(options: &PaginationOptions) -> Self {
        Self::with_config(PaginationConfig::from_options(options))
    }

    /// Build a controller from options that must already be valid.
    pub fn strict(options: &PaginationOptions) -> Result<Self, PaginationError> {
        Ok(Self::with_config(PaginationConfig::validate(options)?))
    }

    pub fn with_config(config: PaginationConfig) -> Self {
        let mut controller = Self {
            config,
            window: 0..0,
            observers: Observers::default(),
        };
        controller.initialize();
        controller
    }

    /// Rebuild the page list and window from the stored configuration.
    ///
    /// Any sliding done by earlier navigation is discarded. Idempotent.
    pub fn initialize(&mut self) -> PaginationState {
        self.config.total_items = self.config.total_items.min(MAX_TOTAL_ITEMS);
        let total = self.total_pages();
        self.config.current_page = clamp_page(self.config.current_page, total);
        self.window = initial_window(self.config.current_page, self.config.window_size, total);

        debug!(
            total_items = self.config.total_items,
            page_size = self.config.page_size,
            total_pages = total,
            current_page = self.config.current_page,
            "pagination initialized"
        );
        self.state()
    }

    /// Replace the configuration wholesale, e.g. when the host's item count changes.
    ///
    /// No event is emitted; the host already knows what it changed.
    pub fn reconfigure(&mut self, options: &PaginationOptions) -> PaginationState {
        self.replace_config(PaginationConfig::from_options(options))
    }

    pub fn replace_config(&mut self, config: PaginationConfig) -> PaginationState {
        self.config = config;
        self.initialize()
    }

    pub fn state(&self) -> PaginationState {
        PaginationState::from_parts(&self.config, &self.window)
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    pub fn current_page(&self) -> usize {
        self.config.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.config.total_pages()
    }

    /// Register an observer; observers run in registration order on every commit.
    pub fn subscribe(&mut self, observer: impl FnMut(&PageChangeEvent) + 'static) -> ObserverId {
        self.observers.subscribe(Box::new(observer) as PageObserver)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Commit `page` as the current page and notify observers.
    ///
    /// The page is not checked against the page list and the window is left as is;
    /// callers pass a page they know is valid. Use [`Self::try_go_to_page`] for
    /// arbitrary input.
    pub fn go_to_page(&mut self, page: usize) -> PageChangeEvent {
        let previous_page = self.config.current_page;
        self.commit(previous_page, page)
    }

    /// Commit `page` after checking that it exists, sliding the window onto it.
    pub fn try_go_to_page(&mut self, page: usize) -> Result<PageChangeEvent, PaginationError> {
        let total = self.total_pages();
        if page == 0 || page > total {
            return Err(PaginationError::PageOutOfRange {
                page,
                total_pages: total,
            });
        }

        if !self.is_visible(page) {
            let positions = initial_window(page, self.config.window_size, total);
            self.load_window(positions.start, positions.end);
        }
        Ok(self.go_to_page(page))
    }

    /// Jump to page 1. Does nothing when there are no pages.
    pub fn first_page(&mut self) -> Option<PageChangeEvent> {
        if self.total_pages() == 0 {
            return None;
        }

        if !self.is_visible(1) {
            self.load_window(0, self.config.window_size);
        }
        Some(self.go_to_page(1))
    }

    /// Step back one page; the window slides so the new page leads it.
    pub fn previous_page(&mut self) -> Option<PageChangeEvent> {
        let current = self.config.current_page;
        if current <= 1 {
            return None;
        }

        let previous = current - 1;
        if !self.is_visible(previous) {
            let start = previous - 1;
            self.load_window(start, start.saturating_add(self.config.window_size));
        }
        Some(self.go_to_page(previous))
    }

    /// Step forward one page; the window slides so the new page ends it.
    pub fn next_page(&mut self) -> Option<PageChangeEvent> {
        let current = self.config.current_page;
        if current >= self.total_pages() {
            return None;
        }

        let next = current + 1;
        if !self.is_visible(next) {
            let start = next.saturating_sub(self.config.window_size);
            self.load_window(start, next);
        }
        Some(self.go_to_page(next))
    }

    /// Jump to the last page. Does nothing when there are no pages.
    pub fn last_page(&mut self) -> Option<PageChangeEvent> {
        let last = self.total_pages();
        if last == 0 {
            return None;
        }

        if !self.is_visible(last) {
            self.load_window(last.saturating_sub(self.config.window_size), last);
        }
        Some(self.go_to_page(last))
    }

    /// Reveal the block of pages before the window and step to the page just
    /// before it.
    ///
    /// When the window already starts on page 1 this behaves like
    /// [`Self::previous_page`].
    pub fn load_window_before(&mut self) -> Option<PageChangeEvent> {
        if self.window.is_empty() {
            return None;
        }

        let first_visible = self.window.start + 1;
        if first_visible == 1 {
            return self.previous_page();
        }

        let start = (first_visible - 1).saturating_sub(self.config.window_size);
        self.load_window(start, start.saturating_add(self.config.window_size));
        Some(self.go_to_page(first_visible - 1))
    }

    /// Reveal the block of pages after the window and step to the page just
    /// after it.
    ///
    /// When the window already ends on the last page this behaves like
    /// [`Self::next_page`].
    pub fn load_window_after(&mut self) -> Option<PageChangeEvent> {
        if self.window.is_empty() {
            return None;
        }

        let last_visible = self.window.end;
        let total = self.total_pages();
        if last_visible >= total {
            return self.next_page();
        }

        let window_size = self.config.window_size;
        let mut start = last_visible;
        if start.saturating_add(window_size) > total {
            start = total.saturating_sub(window_size);
        }
        self.load_window(start, start.saturating_add(window_size));
        Some(self.go_to_page(last_visible + 1))
    }

    /// Switch to a new page size, keeping the current page when it still exists.
    ///
    /// A size of `0` falls back to the default page size. The emitted event
    /// carries the page from before the change as `previous_page`.
    pub fn change_page_size(&mut self, page_size: usize) -> Option<PageChangeEvent> {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        if page_size == self.config.page_size {
            return None;
        }

        let previous_page = self.config.current_page;
        let new_total = total_pages(self.config.total_items, page_size);
        if self.config.current_page > new_total {
            self.config.current_page = new_total;
        }
        self.config.page_size = page_size;
        self.initialize();

        let current = self.config.current_page;
        Some(self.commit(previous_page, current))
    }

    /// Like [`Self::change_page_size`], but rejects a size of `0`.
    pub fn try_change_page_size(
        &mut self,
        page_size: usize,
    ) -> Result<Option<PageChangeEvent>, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::InvalidPageSize(0.0));
        }
        Ok(self.change_page_size(page_size))
    }

    fn is_visible(&self, page: usize) -> bool {
        page >= 1 && self.window.contains(&(page - 1))
    }

    fn load_window(&mut self, start: usize, end: usize) {
        self.window = slice_window(start, end, self.total_pages());
        trace!(
            first = self.window.start + 1,
            last = self.window.end,
            "page window moved"
        );
    }

    fn commit(&mut self, previous_page: usize, page: usize) -> PageChangeEvent {
        self.config.current_page = page;
        let event = PageChangeEvent {
            total_items: self.config.total_items,
            new_page: page,
            previous_page,
            page_size: self.config.page_size,
        };

        debug!(
            new_page = event.new_page,
            previous_page = event.previous_page,
            page_size = event.page_size,
            "page change committed"
        );
        self.observers.notify(&event);
        event
    }
}
