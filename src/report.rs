//! Rendering contribution histograms.
//!
//! Rows are computed first ([`history_rows`], [`blame_rows`]) and rendered
//! second, so the numbers can be checked without parsing the table text.
//! Hidden contributors are dropped before any total or maximum is taken.

use crate::aggregate::{NormalizedSummary, is_hidden_contributor, visible};
use crate::collector::{BlameTally, LineCounts};
use crate::config::ReportConfig;
use console::Style;

/// Width of the added-percentage column, `%` included.
const PCT_WIDTH: usize = 7;

/// Width of the removed-percentage column, `%` included.
const WIDE_PCT_WIDTH: usize = 9;

/// Width of the count column in the raw blame listing.
const RAW_COUNT_WIDTH: usize = 6;

const BAR_CHAR: char = '█';

/// One history-mode row, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub name: String,
    pub added: u64,
    pub removed: u64,
    pub pct_added: f64,
    pub pct_removed: f64,
    pub added_bar: usize,
    pub removed_bar: usize,
}

/// One blame-mode row, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct BlameRow {
    pub name: String,
    pub lines: u64,
    pub pct: f64,
    pub bar: usize,
}

/// `value` as a percentage of `total`, or 0 when the total is 0.
#[must_use]
pub fn percentage(value: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        value as f64 / total as f64 * 100.0
    }
}

/// Number of bar cells for `value`, scaled so `max` fills `width`.
#[must_use]
pub fn bar_length(value: u64, max: u64, width: usize) -> usize {
    if max == 0 {
        0
    } else {
        (value as f64 / max as f64 * width as f64).round() as usize
    }
}

/// Computes history rows over the visible contributors, in summary order.
pub fn history_rows(summary: &NormalizedSummary, bar_width: usize) -> Vec<HistoryRow> {
    let mut max_value = 0;
    let mut total_added = 0;
    let mut total_removed = 0;
    for (_, record) in visible(summary) {
        max_value = max_value.max(record.added).max(record.removed);
        total_added += record.added;
        total_removed += record.removed;
    }

    visible(summary)
        .map(|(name, record)| HistoryRow {
            name: name.clone(),
            added: record.added,
            removed: record.removed,
            pct_added: percentage(record.added, total_added),
            pct_removed: percentage(record.removed, total_removed),
            added_bar: bar_length(record.added, max_value, bar_width),
            removed_bar: bar_length(record.removed, max_value, bar_width),
        })
        .collect()
}

/// Every contributor with their line count, most lines first, hidden
/// contributors included.
///
/// Contributors with equal counts keep their first-seen order.
pub fn ranked_counts(counts: &LineCounts) -> Vec<(&String, u64)> {
    let mut entries: Vec<(&String, u64)> = counts.iter().map(|(n, &c)| (n, c)).collect();
    entries.sort_by_key(|&(_, lines)| std::cmp::Reverse(lines));
    entries
}

/// Computes blame rows over the visible contributors, most lines first.
///
/// Contributors with equal counts keep their first-seen order.
pub fn blame_rows(counts: &LineCounts, bar_width: usize) -> Vec<BlameRow> {
    let entries: Vec<(&String, u64)> = ranked_counts(counts)
        .into_iter()
        .filter(|(name, _)| !is_hidden_contributor(name))
        .collect();

    let max_value = entries.iter().map(|&(_, lines)| lines).max().unwrap_or(0);
    let total: u64 = entries.iter().map(|&(_, lines)| lines).sum();

    entries
        .into_iter()
        .map(|(name, lines)| BlameRow {
            name: name.clone(),
            lines,
            pct: percentage(lines, total),
            bar: bar_length(lines, max_value, bar_width),
        })
        .collect()
}

/// Builds the report text for history mode.
pub fn render_history(summary: &NormalizedSummary, config: &ReportConfig) -> String {
    let rows = history_rows(summary, config.bar_width);
    let painter = Painter::new(config);
    let name_w = config.name_width;
    let val_w = config.value_width;
    let bar_w = config.bar_width;
    let table_width =
        name_w + 1 + (val_w + 2) * 2 + (PCT_WIDTH + 2) + (WIDE_PCT_WIDTH + 2) + (bar_w + 2) + bar_w;

    let mut out = String::new();
    out.push('\n');
    out.push_str(&banner(&format!("   {}   ", config.title), '=', table_width));
    out.push_str("\n\n");

    out.push_str(&format!(
        "{:<name_w$}|{:<val_w$} |{:>pct_w$} |{:<val_w$} |{:>wide_w$} |{:<bar_w$} |{:<bar_w$}\n",
        "Name",
        "Added",
        "%Added",
        "Removed",
        "%Removed",
        "Added Bar",
        "Removed Bar",
        pct_w = PCT_WIDTH,
        wide_w = WIDE_PCT_WIDTH,
    ));
    out.push_str(&format!(
        "{}|{}-|{}-|{}-|{}-|{}-|{}\n",
        "-".repeat(name_w),
        "-".repeat(val_w),
        "-".repeat(PCT_WIDTH),
        "-".repeat(val_w),
        "-".repeat(WIDE_PCT_WIDTH),
        "-".repeat(bar_w),
        "-".repeat(bar_w),
    ));

    for row in &rows {
        out.push_str(&format!(
            "{}|{:>val_w$} |{:>pct_w$.1}% |{:>val_w$} |{:>wide_w$.1}% | {}| {}\n",
            fit_name(&row.name, name_w),
            row.added,
            row.pct_added,
            row.removed,
            row.pct_removed,
            painter.added(row.added_bar, bar_w),
            painter.removed(row.removed_bar, bar_w),
            pct_w = PCT_WIDTH - 1,
            wide_w = WIDE_PCT_WIDTH - 1,
        ));
    }
    out
}

/// Builds the report text for blame mode.
///
/// The histogram is preceded by the raw ranked counts of every author,
/// hidden ones included, and closed by the repository's total attributed
/// line count between two rules.
pub fn render_blame(tally: &BlameTally, config: &ReportConfig) -> String {
    let rows = blame_rows(&tally.counts, config.bar_width);
    let painter = Painter::new(config);
    let name_w = config.name_width;
    let val_w = config.value_width;
    let bar_w = config.bar_width;
    let table_width = name_w + 1 + (val_w + 2) + (PCT_WIDTH + 2) + (bar_w + 1);

    let mut out = String::new();
    for (name, lines) in ranked_counts(&tally.counts) {
        out.push_str(&format!(
            "{:>raw_w$} {}\n",
            lines,
            name,
            raw_w = RAW_COUNT_WIDTH
        ));
    }
    out.push('\n');
    out.push_str(&banner(&format!("    {}    ", config.title), '=', table_width));
    out.push_str("\n\n");

    out.push_str(&format!(
        "{:<name_w$}|{:<val_w$} |{:>pct_w$} |{:<bar_w$}\n",
        "Name",
        "Added",
        "%Added",
        "Added Bar",
        pct_w = PCT_WIDTH,
    ));
    out.push_str(&format!(
        "{}|{}-|{}-|{}\n",
        "-".repeat(name_w),
        "-".repeat(val_w),
        "-".repeat(PCT_WIDTH),
        "-".repeat(bar_w),
    ));

    for row in &rows {
        out.push_str(&format!(
            "{}|{:>val_w$} |{:>pct_w$.1}% | {}|\n",
            fit_name(&row.name, name_w),
            row.lines,
            row.pct,
            painter.added(row.bar, bar_w),
            pct_w = PCT_WIDTH - 1,
        ));
    }

    out.push_str(&"=".repeat(table_width));
    out.push_str("\n\n");
    out.push_str(&banner(
        &format!("Total lines in repo: {}", tally.total_lines),
        ' ',
        table_width,
    ));
    out.push_str("\n\n");
    out.push_str(&"=".repeat(table_width));
    out.push('\n');
    out
}

/// Centers `title` in a line of `width` characters padded with `fill`.
fn banner(title: &str, fill: char, width: usize) -> String {
    let len = title.chars().count();
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(len + left);
    format!(
        "{}{}{}",
        fill.to_string().repeat(left),
        title,
        fill.to_string().repeat(right)
    )
}

/// Pads `name` to `width` characters, truncating longer names.
fn fit_name(name: &str, width: usize) -> String {
    let truncated: String = name.chars().take(width).collect();
    format!("{:<width$}", truncated)
}

/// Draws fixed-width bars, green for additions and red for removals.
struct Painter {
    green: Style,
    red: Style,
    color: bool,
}

impl Painter {
    fn new(config: &ReportConfig) -> Self {
        Self {
            green: Style::new().green().force_styling(true),
            red: Style::new().red().force_styling(true),
            color: config.color,
        }
    }

    fn added(&self, len: usize, width: usize) -> String {
        self.paint(&self.green, len, width)
    }

    fn removed(&self, len: usize, width: usize) -> String {
        self.paint(&self.red, len, width)
    }

    fn paint(&self, style: &Style, len: usize, width: usize) -> String {
        let bar = format!("{:<width$}", BAR_CHAR.to_string().repeat(len));
        if self.color {
            style.apply_to(bar).to_string()
        } else {
            bar
        }
    }
}
