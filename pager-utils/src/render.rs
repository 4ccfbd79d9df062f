use crate::pagination::{NavControl, PageSizeControl, PaginationView};

/// Render a pagination view as plain text lines.
///
/// Selected pages are bracketed and disabled buttons are dimmed to `·`.
pub fn render_view(view: &PaginationView) -> String {
    let mut lines = Vec::with_capacity(3);

    if let Some(control) = &view.page_size {
        lines.push(render_page_size(control));
    }
    lines.push(render_controls(&view.controls));
    lines.push(render_footer(view));

    lines.join("\n")
}

/// Render the navigation row only.
pub fn render_controls(controls: &[NavControl]) -> String {
    controls
        .iter()
        .map(|control| {
            if control.disabled {
                "·".to_owned()
            } else if control.selected {
                format!("[{}]", control.text)
            } else {
                control.text.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_page_size(control: &PageSizeControl) -> String {
    let arrow = if control.opened { "▴" } else { "▾" };
    let mut line = match &control.label {
        Some(label) => format!("{label}: {} {arrow}", control.page_size),
        None => format!("{} {arrow}", control.page_size),
    };

    if control.opened {
        let sizes = control
            .options
            .iter()
            .map(|option| {
                if option.selected {
                    format!("[{}]", option.size)
                } else {
                    option.size.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" | ");
        line.push_str(&format!("  ({sizes})"));
    }

    line
}

/// Build the footer text (`Page x/y • Showing a-b of n`).
pub fn render_footer(view: &PaginationView) -> String {
    if view.total_items == 0 {
        return "No items".to_owned();
    }

    let (start, end) = view.item_range;
    format!(
        "Page {}/{} • Showing {}-{} of {}",
        view.current_page,
        view.total_pages,
        start.saturating_add(1),
        end,
        view.total_items
    )
}

#[cfg(test)]
mod tests {
    use pager_core::{PaginationController, PaginationOptions};

    use super::*;
    use crate::labels::Labels;
    use crate::pagination::{PageSizeSelector, ViewOptions, build_pagination_view};

    fn rendered(options: PaginationOptions, selector: &PageSizeSelector) -> String {
        let pager = PaginationController::new(&options);
        let view = build_pagination_view(
            &pager.state(),
            pager.config(),
            selector,
            &Labels::default(),
            &ViewOptions::default(),
        )
        .expect("auto hide is off");
        render_view(&view)
    }

    #[test]
    fn renders_controls_and_footer() {
        let text = rendered(
            PaginationOptions {
                total_items: Some(1000.0),
                page_size: Some(10.0),
                current_page: Some(8.0),
                ..PaginationOptions::default()
            },
            &PageSizeSelector::default(),
        );

        assert_eq!(
            text,
            "« ‹ … 4 5 6 7 [8] … › »\nPage 8/100 • Showing 71-80 of 1000"
        );
    }

    #[test]
    fn renders_open_selector_and_dimmed_buttons() {
        let mut selector = PageSizeSelector::default();
        selector.open();
        let text = rendered(
            PaginationOptions {
                total_items: Some(40.0),
                page_size: Some(20.0),
                page_size_options: Some(vec![10.0, 20.0]),
                ..PaginationOptions::default()
            },
            &selector,
        );

        assert_eq!(
            text,
            "Items per page: 20 ▴  (10 | [20])\n· · [1] 2 › »\nPage 1/2 • Showing 1-20 of 40"
        );
    }

    #[test]
    fn empty_lists_render_no_items() {
        let text = rendered(PaginationOptions::default(), &PageSizeSelector::default());
        assert_eq!(text, "· · · ·\nNo items");
    }
}
