//! Page handlers rendering the dashboard screens as plain text

pub mod auth;
pub mod dashboard;
pub mod inventory;
pub mod navigation;
pub mod orders;

use shared::PaginationMeta;

/// Render rows as a left-aligned table with a header rule
pub(crate) fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(headers.to_vec())];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(format_row(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}

pub(crate) fn pagination_footer(meta: &PaginationMeta) -> String {
    if meta.total_items == 0 {
        return String::new();
    }
    let first = (meta.page as u64 - 1) * meta.per_page as u64 + 1;
    let last = (first + meta.per_page as u64 - 1).min(meta.total_items);
    if first > meta.total_items {
        return format!(
            "Page {} of {} ({} total)",
            meta.page, meta.total_pages, meta.total_items
        );
    }
    format!(
        "Showing {first}-{last} of {} (page {} of {})",
        meta.total_items, meta.page, meta.total_pages
    )
}

/// Fallback page for unknown paths
pub fn not_found(path: &str) -> String {
    tracing::debug!(path, "No route matched");
    format!("404\nPage not found: {path}\nReturn to Dashboard: /")
}
