//! Environment-driven startup settings.

use std::env;

use pager_core::{PaginationConfig, PaginationOptions};
use pager_utils::labels::LabelOptions;
use pager_utils::pagination::ViewOptions;
use pager_utils::parse::{parse_flag, parse_number, parse_number_list};

/// Everything the binary needs to build a session.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub pagination: PaginationOptions,
    pub labels: LabelOptions,
    pub view: ViewOptions,
    /// Reject out-of-range options instead of coercing them.
    pub strict: bool,
}

impl Settings {
    /// Read settings from `PAGER_*` environment variables.
    ///
    /// Unparseable numbers are treated as absent and fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let number = |name: &str| lookup(name).as_deref().and_then(parse_number);
        let flag = |name: &str| lookup(name).as_deref().and_then(parse_flag);

        let pagination = PaginationOptions {
            total_items: number("PAGER_TOTAL_ITEMS"),
            page_size: number("PAGER_PAGE_SIZE"),
            current_page: number("PAGER_CURRENT_PAGE"),
            window_size: number("PAGER_WINDOW_SIZE"),
            page_size_options: lookup("PAGER_PAGE_SIZE_OPTIONS")
                .as_deref()
                .map(parse_number_list),
            auto_hide: flag("PAGER_AUTO_HIDE"),
        };

        let labels = LabelOptions {
            page_size_options_label: lookup("PAGER_PAGE_SIZE_LABEL"),
            previous_page_label: lookup("PAGER_PREVIOUS_LABEL"),
            next_page_label: lookup("PAGER_NEXT_LABEL"),
            first_page_label: lookup("PAGER_FIRST_LABEL"),
            last_page_label: lookup("PAGER_LAST_LABEL"),
        };

        let view = ViewOptions {
            disabled: flag("PAGER_DISABLED").unwrap_or(false),
            hide_page_size_options_label: flag("PAGER_HIDE_PAGE_SIZE_LABEL").unwrap_or(false),
        };

        Self {
            pagination,
            labels,
            view,
            strict: flag("PAGER_STRICT").unwrap_or(false),
        }
    }

    /// Build the pagination config, coercing or validating per `strict`.
    pub fn pagination_config(&self) -> anyhow::Result<PaginationConfig> {
        if self.strict {
            Ok(PaginationConfig::validate(&self.pagination)?)
        } else {
            Ok(PaginationConfig::from_options(&self.pagination))
        }
    }
}
