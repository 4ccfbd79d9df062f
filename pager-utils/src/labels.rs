use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE_OPTIONS_LABEL: &str = "Items per page";
pub const DEFAULT_PREVIOUS_PAGE_LABEL: &str = "Previous";
pub const DEFAULT_NEXT_PAGE_LABEL: &str = "Next";
pub const DEFAULT_FIRST_PAGE_LABEL: &str = "First";
pub const DEFAULT_LAST_PAGE_LABEL: &str = "Last";

/// Host-supplied label overrides. Blank values fall back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelOptions {
    pub page_size_options_label: Option<String>,
    pub previous_page_label: Option<String>,
    pub next_page_label: Option<String>,
    pub first_page_label: Option<String>,
    pub last_page_label: Option<String>,
}

/// Resolved, trimmed labels used by the view builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub page_size_options: String,
    pub previous_page: String,
    pub next_page: String,
    pub first_page: String,
    pub last_page: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self::from_options(&LabelOptions::default())
    }
}

impl Labels {
    pub fn from_options(options: &LabelOptions) -> Self {
        Self {
            page_size_options: resolve(
                options.page_size_options_label.as_deref(),
                DEFAULT_PAGE_SIZE_OPTIONS_LABEL,
            ),
            previous_page: resolve(
                options.previous_page_label.as_deref(),
                DEFAULT_PREVIOUS_PAGE_LABEL,
            ),
            next_page: resolve(options.next_page_label.as_deref(), DEFAULT_NEXT_PAGE_LABEL),
            first_page: resolve(options.first_page_label.as_deref(), DEFAULT_FIRST_PAGE_LABEL),
            last_page: resolve(options.last_page_label.as_deref(), DEFAULT_LAST_PAGE_LABEL),
        }
    }
}

fn resolve(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|label| !label.is_empty())
        .unwrap_or(default)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_missing_labels_use_defaults() {
        let labels = Labels::from_options(&LabelOptions {
            previous_page_label: Some("   ".to_owned()),
            next_page_label: Some("  Onward ".to_owned()),
            ..LabelOptions::default()
        });

        assert_eq!(labels.previous_page, "Previous");
        assert_eq!(labels.next_page, "Onward");
        assert_eq!(labels.first_page, "First");
        assert_eq!(labels.page_size_options, "Items per page");
    }
}
