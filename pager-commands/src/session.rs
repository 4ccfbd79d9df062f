use std::cell::RefCell;
use std::rc::Rc;

use pager_core::{PageChangeEvent, PaginationConfig, PaginationController};
use pager_utils::labels::Labels;
use pager_utils::pagination::{PageSizeSelector, PaginationView, ViewOptions, build_pagination_view};
use pager_utils::render::render_view;

/// Text shown instead of the controls when auto-hide suppresses them.
pub const HIDDEN_VIEW_TEXT: &str = "(pagination hidden: fewer than two pages)";

/// Shared state passed into command handlers.
///
/// Owns the controller plus the view-local selector state. The selector is
/// closed by an observer on every committed page change.
pub struct Session {
    controller: PaginationController,
    selector: Rc<RefCell<PageSizeSelector>>,
    labels: Labels,
    view_options: ViewOptions,
}

impl Session {
    pub fn new(config: PaginationConfig, labels: Labels, view_options: ViewOptions) -> Self {
        let mut controller = PaginationController::with_config(config);
        let selector = Rc::new(RefCell::new(PageSizeSelector::default()));

        let observed = Rc::clone(&selector);
        controller.subscribe(move |_| observed.borrow_mut().close());

        Self {
            controller,
            selector,
            labels,
            view_options,
        }
    }

    pub fn controller(&self) -> &PaginationController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PaginationController {
        &mut self.controller
    }

    pub fn view_options(&self) -> &ViewOptions {
        &self.view_options
    }

    pub fn selector_open(&self) -> bool {
        self.selector.borrow().is_open()
    }

    pub fn open_selector(&mut self) {
        self.selector.borrow_mut().open();
    }

    /// Pick a page size through the selector, closing it.
    pub fn choose_page_size(&mut self, size: usize) -> Option<PageChangeEvent> {
        let mut selector = *self.selector.borrow();
        let event = selector.choose(&mut self.controller, size);
        *self.selector.borrow_mut() = selector;
        event
    }

    pub fn view(&self) -> Option<PaginationView> {
        build_pagination_view(
            &self.controller.state(),
            self.controller.config(),
            &self.selector.borrow(),
            &self.labels,
            &self.view_options,
        )
    }

    pub fn render(&self) -> String {
        self.view()
            .map(|view| render_view(&view))
            .unwrap_or_else(|| HIDDEN_VIEW_TEXT.to_owned())
    }
}
