/*!
format.rs - presentation helpers for human output paths.

Returns formatted strings; commands decide where to print. JSON output
paths must not use these helpers so machine output stays clean.
*/

use crate::zoom::types::{MeetingType, User};

/* ---- Color ---- */

#[derive(Debug, Clone, Copy)]
pub enum Role {
    Header,
    Dim,
}

/// ANSI wrapper, disabled via NO_COLOR.
pub fn color(role: Role, text: impl AsRef<str>) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        return text.as_ref().to_string();
    }
    let code = match role {
        Role::Header => "1",
        Role::Dim => "2",
    };
    format!("\x1b[{code}m{}\x1b[0m", text.as_ref())
}

/* ---- User Records ---- */

/// Three-line user record, labels aligned.
pub fn user_block(user: &User) -> String {
    format!(
        "name:  {}\nemail: {}\ntype:  {}",
        user.display_name(),
        user.email,
        user.user_type.label()
    )
}

/* ---- Durations ---- */

/// Render a duration as H:MM for meeting kinds that carry one; everything
/// else shows a placeholder.
pub fn duration_hhmm(kind: MeetingType, minutes: Option<u32>) -> String {
    if !kind.has_fixed_duration() {
        return "-".to_string();
    }
    match minutes {
        Some(m) => format!("{}:{:02}", m / 60, m % 60),
        None => "-".to_string(),
    }
}

/* ---- Tables ---- */

/// Padded-column table with a dashed header separator. Column widths grow to
/// the widest cell; no truncation (this tool's rows are short).
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if headers.is_empty() {
        return String::new();
    }
    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();

    let mut header_line = String::new();
    for (i, h) in headers.iter().enumerate() {
        if i > 0 {
            header_line.push_str("  ");
        }
        header_line.push_str(&pad(h, widths[i]));
    }
    out.push_str(&color(Role::Header, header_line.trim_end()));
    out.push('\n');

    let mut sep = String::new();
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            sep.push_str("  ");
        }
        sep.push_str(&"-".repeat(*w));
    }
    out.push_str(&color(Role::Dim, sep));
    out.push('\n');

    for (r, row) in rows.iter().enumerate() {
        let mut line = String::new();
        for c in 0..col_count {
            if c > 0 {
                line.push_str("  ");
            }
            let cell = row.get(c).map(String::as_str).unwrap_or("");
            line.push_str(&pad(cell, widths[c]));
        }
        out.push_str(line.trim_end());
        if r + 1 < rows.len() {
            out.push('\n');
        }
    }

    out
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - len))
    }
}
