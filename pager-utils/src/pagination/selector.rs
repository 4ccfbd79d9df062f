//! View-local page size selector state.

use pager_core::{PageChangeEvent, PaginationConfig, PaginationController};

/// One entry in the page size list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeOption {
    pub size: usize,
    pub selected: bool,
}

/// Open/closed state of the page size dropdown.
///
/// The selector must be closed whenever a page change is committed; hosts do
/// that by calling [`PageSizeSelector::close`] from a controller observer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageSizeSelector {
    opened: bool,
}

impl PageSizeSelector {
    pub fn open(&mut self) {
        self.opened = true;
    }

    pub fn close(&mut self) {
        self.opened = false;
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    /// Offered sizes in configuration order, marking the active one.
    pub fn options(config: &PaginationConfig) -> Vec<SizeOption> {
        config
            .page_size_options
            .iter()
            .map(|&size| SizeOption {
                size,
                selected: size == config.page_size,
            })
            .collect()
    }

    /// Pick a size from the list. Closes the selector even when the size is unchanged.
    pub fn choose(
        &mut self,
        controller: &mut PaginationController,
        size: usize,
    ) -> Option<PageChangeEvent> {
        self.close();
        controller.change_page_size(size)
    }
}

#[cfg(test)]
mod tests {
    use pager_core::PaginationOptions;

    use super::*;

    fn controller() -> PaginationController {
        PaginationController::new(&PaginationOptions {
            total_items: Some(100.0),
            page_size: Some(25.0),
            page_size_options: Some(vec![10.0, 25.0, 50.0]),
            ..PaginationOptions::default()
        })
    }

    #[test]
    fn options_mark_the_active_size() {
        let pager = controller();
        let options = PageSizeSelector::options(pager.config());

        let selected: Vec<usize> = options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.size)
            .collect();
        assert_eq!(options.len(), 3);
        assert_eq!(selected, vec![25]);
    }

    #[test]
    fn choosing_the_same_size_only_closes() {
        let mut pager = controller();
        let mut selector = PageSizeSelector::default();
        selector.open();

        assert_eq!(selector.choose(&mut pager, 25), None);
        assert!(!selector.is_open());
    }

    #[test]
    fn choosing_a_new_size_commits() {
        let mut pager = controller();
        let mut selector = PageSizeSelector::default();
        selector.open();

        let event = selector.choose(&mut pager, 10).expect("size changed");
        assert_eq!(event.page_size, 10);
        assert!(!selector.is_open());
        assert_eq!(pager.total_pages(), 10);
    }
}
