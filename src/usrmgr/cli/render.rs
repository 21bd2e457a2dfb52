//! # Rendering
//!
//! Turns screen state into terminal text. Every function returns a `String` so
//! output can be asserted on without a terminal; `commands.rs` does the printing.
//!
//! Layout math stays width-aware: names are often CJK, which take two columns
//! each, so padding goes through `unicode-width` on the plain text before any
//! color is applied.

use chrono::NaiveDateTime;
use colored::Colorize;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;
use usrmgr::api::CmdMessage;
use usrmgr::config::UsrmgrConfig;
use usrmgr::dialog::validation::Field;
use usrmgr::dialog::RecordDialog;
use usrmgr::model::UserRecord;
use usrmgr::screen::SearchPanel;
use usrmgr::sort::{SortColumn, SortOrder, TableSort};

pub const EMPTY_CELL: &str = "-";
const COLUMN_GAP: &str = "  ";

fn or_empty(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

pub fn format_time(time: NaiveDateTime, datetime_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(datetime_format)).is_err() {
        return time.to_string();
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn sort_marker(sort: TableSort, column: SortColumn) -> &'static str {
    if sort.column != column {
        return "";
    }
    match sort.order {
        Some(SortOrder::Ascend) => " ↑",
        Some(SortOrder::Descend) => " ↓",
        None => "",
    }
}

/// The user table, one row per record, numbered from 1.
pub fn render_table(rows: &[UserRecord], sort: TableSort, datetime_format: &str) -> String {
    let header = vec![
        "#".to_string(),
        "Name".to_string(),
        "Sex".to_string(),
        format!("Age{}", sort_marker(sort, SortColumn::Age)),
        format!("Created{}", sort_marker(sort, SortColumn::CreatedAt)),
    ];

    let cells: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                (i + 1).to_string(),
                or_empty(Some(r.name.clone())),
                or_empty(r.sex.map(|s| s.to_string())),
                or_empty(r.age.map(|a| a.to_string())),
                format_time(r.created_at, datetime_format),
            ]
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            cells
                .iter()
                .map(|row| row[col].width())
                .chain(std::iter::once(header[col].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header_line: Vec<String> = header
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w).bold().to_string())
        .collect();
    let _ = writeln!(out, "{}", header_line.join(COLUMN_GAP).trim_end());

    if cells.is_empty() {
        let _ = writeln!(out, "{}", "No users found.".dimmed());
        return out;
    }

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(col, (value, w))| {
                let padded = pad(value, *w);
                match col {
                    0 => padded.yellow().to_string(),
                    4 => padded.dimmed().to_string(),
                    _ => padded,
                }
            })
            .collect();
        let _ = writeln!(out, "{}", line.join(COLUMN_GAP).trim_end());
    }
    out
}

/// The search panel. Age and created only show while expanded.
pub fn render_panel(panel: &SearchPanel, datetime_format: &str) -> String {
    let criteria = panel.criteria();
    let mut parts = vec![
        format!("name: {}", or_empty(criteria.name.clone())),
        format!("sex: {}", or_empty(criteria.sex.map(|s| s.to_string()))),
    ];
    if panel.is_expanded() {
        parts.push(format!("age: {}", or_empty(criteria.age.map(|a| a.to_string()))));
        parts.push(format!(
            "created: {}",
            or_empty(criteria.created_at.map(|r| format!(
                "{} .. {}",
                format_time(r.start, datetime_format),
                format_time(r.end, datetime_format)
            )))
        ));
    }
    let toggle = if panel.is_expanded() {
        "[collapse]"
    } else {
        "[expand]"
    };
    format!("{}  {}  {}\n", "Search".bold(), parts.join("  "), toggle.dimmed())
}

/// The open dialog with inline field errors, or nothing when it is closed.
pub fn render_dialog(dialog: &RecordDialog, datetime_format: &str) -> String {
    let (Some(mode), Some(fields)) = (dialog.mode(), dialog.fields()) else {
        return String::new();
    };
    let errors = dialog.errors();
    let error_for = |field: Field| -> String {
        errors
            .and_then(|e| e.get(field))
            .map(|m| format!("  {}", format!("✗ {}", m).red()))
            .unwrap_or_default()
    };

    let mut out = String::new();
    let _ = writeln!(out, "┌ {}", mode.title().bold());
    let _ = writeln!(
        out,
        "│ Name:    {}{}",
        or_empty(Some(fields.name.clone())),
        error_for(Field::Name)
    );
    let _ = writeln!(
        out,
        "│ Sex:     {}{}",
        or_empty(fields.sex.map(|s| s.to_string())),
        error_for(Field::Sex)
    );
    let _ = writeln!(
        out,
        "│ Age:     {}{}",
        or_empty(fields.age.map(|a| a.to_string())),
        error_for(Field::Age)
    );
    if let Some(created) = dialog.created_at() {
        let _ = writeln!(
            out,
            "│ Created: {}",
            format_time(created, datetime_format).dimmed()
        );
    }
    let footer = if mode.is_read_only() {
        "[dismiss]"
    } else {
        "[cancel] [submit]"
    };
    let _ = writeln!(out, "└ {}", footer.dimmed());
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("{}\n", m.content.green()))
        .collect()
}

pub fn render_config(config: &UsrmgrConfig) -> String {
    format!(
        "datetime_format = {}\nconfirm_delete = {}\ncolor = {}\n",
        config.datetime_format, config.confirm_delete, config.color
    )
}
