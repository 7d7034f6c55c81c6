//! Calendar formatting: month grids and the full-year layout.

use unicode_width::UnicodeWidthStr;

use crate::types::{
    DAYS_IN_WEEK, GUTTER_WIDTH, MONTH_NAMES, MONTH_WIDTH, MonthLayout, WEEKDAY_HEADER,
};

/// Portuguese name of a month (1-12).
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

/// Format month title, e.g. `Janeiro 2024`.
pub fn format_month_title(month: u32, year: i32) -> String {
    format!("{} {}", month_name(month), year)
}

/// Format one week of cells.
///
/// Cells are two columns wide and separated by a space. The Saturday cell
/// closes the line; blanks after the last day are not printed, so a short
/// final week keeps the space that follows its last day.
pub fn format_week(week: &[Option<u32>]) -> String {
    let Some(last_day) = week.iter().rposition(Option::is_some) else {
        return String::new();
    };

    let mut line = String::with_capacity(3 * DAYS_IN_WEEK);
    for (col, cell) in week.iter().take(last_day + 1).enumerate() {
        match cell {
            Some(day) => line.push_str(&format!("{:>2}", day)),
            None => line.push_str("  "),
        }
        if col + 1 < DAYS_IN_WEEK {
            line.push(' ');
        }
    }
    line
}

/// Format month as grid of lines: title, weekday header, then one line per week.
pub fn format_month_grid(layout: &MonthLayout) -> Vec<String> {
    let mut lines = Vec::with_capacity(8);
    lines.push(format_month_title(layout.month, layout.year));
    lines.push(WEEKDAY_HEADER.to_string());
    lines.extend(layout.weeks().map(format_week));
    lines
}

/// Render a single month.
pub fn render_month(month: u32, year: i32) -> Vec<String> {
    format_month_grid(&MonthLayout::new(month, year))
}

/// Render all 12 months of a year, `columns` months per row.
///
/// Rows are separated by a blank line. With one column the month blocks are
/// simply stacked.
pub fn render_year(year: i32, columns: usize) -> Vec<String> {
    let grids: Vec<Vec<String>> = (1..=12).map(|month| render_month(month, year)).collect();

    let mut lines = Vec::new();
    for (i, row) in grids.chunks(columns.max(1)).enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(join_side_by_side(row));
    }
    lines
}

/// Place month grids next to each other, each padded to the month width.
///
/// Padding is only emitted in front of text, so a row never ends in blanks
/// that belong to a shorter neighbour.
pub fn join_side_by_side(grids: &[Vec<String>]) -> Vec<String> {
    let max_height = grids.iter().map(Vec::len).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(max_height);
    for row in 0..max_height {
        let mut line = String::new();
        let mut pending = 0;
        for (i, grid) in grids.iter().enumerate() {
            if i > 0 {
                pending += GUTTER_WIDTH;
            }
            let text = grid.get(row).map(String::as_str).unwrap_or("");
            if !text.is_empty() {
                line.push_str(&" ".repeat(pending));
                line.push_str(text);
                pending = 0;
            }
            // Month names like "Março" are measured by display width
            pending += MONTH_WIDTH.saturating_sub(text.width());
        }
        lines.push(line);
    }
    lines
}
