// Markdown-style tables for debug output

use colored::Colorize;
use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("table has no rows")]
    Empty,

    #[error("malformed table: row {row} has {found} columns, header has {expected}")]
    Malformed {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Formatting configuration for debug tables, passed explicitly instead of global color state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableStyle {
    /// Print tables and progress while transforming
    pub debug: bool,
    /// Dim the stripped prefix in URL columns
    pub color: bool,
}

impl TableStyle {
    pub fn quiet() -> Self {
        Self::default()
    }

    pub fn debug(color: bool) -> Self {
        Self { debug: true, color }
    }

    /// Render a URL whose `prefix` was stripped, leaving `path` behind.
    pub fn highlight_prefix(&self, prefix: &str, path: &str) -> String {
        if self.color {
            format!("{}{}", prefix.white().dimmed(), path)
        } else {
            format!("{}{}", prefix, path)
        }
    }
}

/// Convert rows of columns into a fixed-width Markdown table. `rows[0]` is the header.
///
/// Every column but the last is left-justified to its widest cell; the last column is
/// never padded so lines carry no trailing whitespace. A dashed separator row follows
/// the header, its last cell as long as the header's last cell.
pub fn format_table<T: Display>(rows: &[Vec<T>]) -> Result<String, TableError> {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let header = cells.first().ok_or(TableError::Empty)?;
    let columns = header.len();
    if columns == 0 {
        return Err(TableError::Empty);
    }
    for (row, line) in cells.iter().enumerate() {
        if line.len() != columns {
            return Err(TableError::Malformed {
                row,
                expected: columns,
                found: line.len(),
            });
        }
    }

    let mut widths = vec![0usize; columns];
    for line in &cells {
        for (i, cell) in line.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let last = columns - 1;
    let mut lines: Vec<String> = cells
        .iter()
        .map(|line| {
            let formatted: Vec<String> = line
                .iter()
                .enumerate()
                .map(|(i, cell)| if i == last { cell.clone() } else { pad(cell, widths[i]) })
                .collect();
            wrap(&formatted)
        })
        .collect();

    let separator: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let width = if i == last { cell.chars().count() } else { widths[i] };
            "-".repeat(width)
        })
        .collect();
    lines.insert(1, wrap(&separator));

    Ok(lines.join("\n"))
}

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    let mut padded = String::with_capacity(cell.len() + width.saturating_sub(len));
    padded.push_str(cell);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
    padded
}

fn wrap(columns: &[String]) -> String {
    format!("| {} |", columns.join(" | "))
}
