//! Raw pagination options and their coerced configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::PaginationError;
use crate::page::total_pages;

/// Page size used when none (or a non-positive one) is supplied.
pub const DEFAULT_PAGE_SIZE: usize = 25;
/// Number of page buttons visible at once when none is supplied.
pub const DEFAULT_WINDOW_SIZE: usize = 5;
/// Largest item count a configuration holds. Larger counts are capped so that
/// page numbers always have room for one past the last page.
pub const MAX_TOTAL_ITEMS: usize = usize::MAX - 1;

/// Raw, host-supplied pagination inputs.
///
/// Every field is optional and numeric fields are kept as `f64` so that values
/// coming from loosely typed hosts (JSON, environment variables) can be coerced
/// exactly once, in [`PaginationConfig::from_options`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationOptions {
    #[serde(alias = "length")]
    pub total_items: Option<f64>,
    pub page_size: Option<f64>,
    pub current_page: Option<f64>,
    #[serde(alias = "maxPagesToShow")]
    pub window_size: Option<f64>,
    pub page_size_options: Option<Vec<f64>>,
    pub auto_hide: Option<bool>,
}

/// Coerced pagination configuration. All values are in range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationConfig {
    pub total_items: usize,
    pub page_size: usize,
    pub current_page: usize,
    pub window_size: usize,
    pub page_size_options: Vec<usize>,
    /// Presentation hint: hide the controls when fewer than two pages exist.
    pub auto_hide: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::from_options(&PaginationOptions::default())
    }
}

impl PaginationConfig {
    /// Coerce raw options into a usable configuration. Never fails.
    ///
    /// - missing or negative totals become `0`, huge ones [`MAX_TOTAL_ITEMS`],
    /// - missing or non-positive page sizes become [`DEFAULT_PAGE_SIZE`],
    /// - missing or non-positive current pages become `1`,
    /// - a missing or zero window size becomes [`DEFAULT_WINDOW_SIZE`], any other
    ///   window size is taken by absolute value,
    /// - non-positive page size options are dropped.
    ///
    /// Fractional values are rounded up.
    pub fn from_options(options: &PaginationOptions) -> Self {
        let total_items = options
            .total_items
            .and_then(positive_ceil)
            .map_or(0, |total| total.min(MAX_TOTAL_ITEMS));
        let page_size = options
            .page_size
            .and_then(positive_ceil)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let current_page = options.current_page.and_then(positive_ceil).unwrap_or(1);
        let window_size = options
            .window_size
            .filter(|size| *size != 0.0 && !size.is_nan())
            .map(|size| ceil_to_usize(size.abs()))
            .unwrap_or(DEFAULT_WINDOW_SIZE);
        let page_size_options = options
            .page_size_options
            .iter()
            .flatten()
            .filter_map(|size| positive_ceil(*size))
            .collect();

        note_coercion("total_items", options.total_items, total_items);
        note_coercion("page_size", options.page_size, page_size);
        note_coercion("current_page", options.current_page, current_page);
        note_coercion("window_size", options.window_size, window_size);

        Self {
            total_items,
            page_size,
            current_page,
            window_size,
            page_size_options,
            auto_hide: options.auto_hide.unwrap_or(false),
        }
    }

    /// Validate raw options without coercing anything.
    ///
    /// Absent values still take their defaults; present values must already be
    /// in range, and the current page must exist when the list is non-empty.
    pub fn validate(options: &PaginationOptions) -> Result<Self, PaginationError> {
        let total_items = match options.total_items {
            None => 0,
            Some(raw) if is_whole(raw) && raw >= 0.0 && (raw as usize) <= MAX_TOTAL_ITEMS => {
                raw as usize
            }
            Some(raw) => return Err(PaginationError::InvalidTotalItems(raw)),
        };
        let page_size = match options.page_size {
            None => DEFAULT_PAGE_SIZE,
            Some(raw) if is_whole(raw) && raw > 0.0 => raw as usize,
            Some(raw) => return Err(PaginationError::InvalidPageSize(raw)),
        };
        let current_page = match options.current_page {
            None => 1,
            Some(raw) if is_whole(raw) && raw > 0.0 => raw as usize,
            Some(raw) => return Err(PaginationError::InvalidCurrentPage(raw)),
        };
        let window_size = match options.window_size {
            None => DEFAULT_WINDOW_SIZE,
            Some(raw) if is_whole(raw) && raw > 0.0 => raw as usize,
            Some(raw) => return Err(PaginationError::InvalidWindowSize(raw)),
        };
        let page_size_options = options
            .page_size_options
            .iter()
            .flatten()
            .map(|raw| {
                if is_whole(*raw) && *raw > 0.0 {
                    Ok(*raw as usize)
                } else {
                    Err(PaginationError::InvalidPageSizeOption(*raw))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let pages = total_pages(total_items, page_size);
        if pages > 0 && current_page > pages {
            return Err(PaginationError::PageOutOfRange {
                page: current_page,
                total_pages: pages,
            });
        }

        Ok(Self {
            total_items,
            page_size,
            current_page,
            window_size,
            page_size_options,
            auto_hide: options.auto_hide.unwrap_or(false),
        })
    }

    /// Number of pages implied by the item count and page size.
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }
}

fn positive_ceil(raw: f64) -> Option<usize> {
    (raw > 0.0).then(|| ceil_to_usize(raw))
}

fn ceil_to_usize(raw: f64) -> usize {
    // Float-to-int casts saturate, so infinities land on usize::MAX.
    raw.ceil() as usize
}

fn is_whole(raw: f64) -> bool {
    raw.is_finite() && raw.fract() == 0.0
}

fn note_coercion(field: &'static str, raw: Option<f64>, coerced: usize) {
    if let Some(raw) = raw
        && raw != coerced as f64
    {
        warn!(field, raw, coerced, "pagination option coerced");
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn options(total_items: Option<f64>, page_size: Option<f64>) -> PaginationOptions {
        PaginationOptions {
            total_items,
            page_size,
            ..PaginationOptions::default()
        }
    }

    #[test]
    fn defaults_apply_when_nothing_is_supplied() {
        let config = PaginationConfig::default();

        assert_eq!(config.total_items, 0);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.current_page, 1);
        assert_eq!(config.window_size, DEFAULT_WINDOW_SIZE);
        assert!(config.page_size_options.is_empty());
        assert!(!config.auto_hide);
    }

    #[rstest]
    #[case(None, 0)]
    #[case(Some(-4.0), 0)]
    #[case(Some(f64::NAN), 0)]
    #[case(Some(0.0), 0)]
    #[case(Some(99.2), 100)]
    #[case(Some(100.0), 100)]
    #[case(Some(1e20), MAX_TOTAL_ITEMS)]
    #[case(Some(f64::INFINITY), MAX_TOTAL_ITEMS)]
    #[case(Some(f64::NEG_INFINITY), 0)]
    fn total_items_is_coerced(#[case] raw: Option<f64>, #[case] expected: usize) {
        let config = PaginationConfig::from_options(&options(raw, None));
        assert_eq!(config.total_items, expected);
    }

    #[rstest]
    #[case(None, 25)]
    #[case(Some(0.0), 25)]
    #[case(Some(-10.0), 25)]
    #[case(Some(9.1), 10)]
    #[case(Some(50.0), 50)]
    fn page_size_is_coerced(#[case] raw: Option<f64>, #[case] expected: usize) {
        let config = PaginationConfig::from_options(&options(None, raw));
        assert_eq!(config.page_size, expected);
    }

    #[rstest]
    #[case(None, 1)]
    #[case(Some(0.0), 1)]
    #[case(Some(-3.0), 1)]
    #[case(Some(2.5), 3)]
    fn current_page_is_coerced(#[case] raw: Option<f64>, #[case] expected: usize) {
        let config = PaginationConfig::from_options(&PaginationOptions {
            current_page: raw,
            ..PaginationOptions::default()
        });
        assert_eq!(config.current_page, expected);
    }

    #[rstest]
    #[case(None, 5)]
    #[case(Some(0.0), 5)]
    #[case(Some(f64::NAN), 5)]
    #[case(Some(-7.0), 7)]
    #[case(Some(3.0), 3)]
    #[case(Some(0.4), 1)]
    #[case(Some(f64::INFINITY), usize::MAX)]
    #[case(Some(f64::NEG_INFINITY), usize::MAX)]
    fn window_size_is_coerced(#[case] raw: Option<f64>, #[case] expected: usize) {
        let config = PaginationConfig::from_options(&PaginationOptions {
            window_size: raw,
            ..PaginationOptions::default()
        });
        assert_eq!(config.window_size, expected);
    }

    #[test]
    fn page_size_options_drop_non_positive_entries_and_round_up() {
        let config = PaginationConfig::from_options(&PaginationOptions {
            page_size_options: Some(vec![10.0, 0.0, -5.0, 24.5, f64::NAN, 50.0]),
            ..PaginationOptions::default()
        });
        assert_eq!(config.page_size_options, vec![10, 25, 50]);
    }

    #[test]
    fn options_deserialize_from_camel_case_and_legacy_names() {
        let parsed: PaginationOptions = serde_json::from_str(
            r#"{"length": 120, "pageSize": 10, "maxPagesToShow": 7, "autoHide": true}"#,
        )
        .expect("options must parse");

        assert_eq!(parsed.total_items, Some(120.0));
        assert_eq!(parsed.page_size, Some(10.0));
        assert_eq!(parsed.window_size, Some(7.0));
        assert_eq!(parsed.auto_hide, Some(true));
        assert_eq!(parsed.current_page, None);
    }

    #[test]
    fn validate_accepts_in_range_values() {
        let config = PaginationConfig::validate(&PaginationOptions {
            total_items: Some(100.0),
            page_size: Some(10.0),
            current_page: Some(10.0),
            window_size: Some(3.0),
            page_size_options: Some(vec![10.0, 20.0]),
            auto_hide: Some(true),
        })
        .expect("options are valid");

        assert_eq!(config.total_pages(), 10);
        assert_eq!(config.current_page, 10);
        assert_eq!(config.page_size_options, vec![10, 20]);
    }

    #[rstest]
    #[case(options(Some(-1.0), None), PaginationError::InvalidTotalItems(-1.0))]
    #[case(options(Some(1.5), None), PaginationError::InvalidTotalItems(1.5))]
    #[case(options(Some(1e20), None), PaginationError::InvalidTotalItems(1e20))]
    #[case(options(None, Some(0.0)), PaginationError::InvalidPageSize(0.0))]
    #[case(
        PaginationOptions { window_size: Some(-2.0), ..PaginationOptions::default() },
        PaginationError::InvalidWindowSize(-2.0)
    )]
    #[case(
        PaginationOptions { page_size_options: Some(vec![10.0, 0.0]), ..PaginationOptions::default() },
        PaginationError::InvalidPageSizeOption(0.0)
    )]
    #[case(
        PaginationOptions { total_items: Some(30.0), current_page: Some(4.0), ..PaginationOptions::default() },
        PaginationError::PageOutOfRange { page: 4, total_pages: 2 }
    )]
    fn validate_rejects_values_that_would_be_coerced(
        #[case] raw: PaginationOptions,
        #[case] expected: PaginationError,
    ) {
        assert_eq!(PaginationConfig::validate(&raw), Err(expected));
    }
}
