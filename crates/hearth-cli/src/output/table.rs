//! Aligned plain-text table for entity listings.

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string();

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                let truncated = truncate_text(&value, *width);
                let padded = format_cell(&truncated, *width);
                if options.color {
                    colorize_status(&padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

/// Shrink the widest shrinkable columns until the table fits `max_width`.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let Some((idx, _)) = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(6))
            .max_by_key(|(_, width)| **width)
        else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn format_cell(value: &str, width: usize) -> String {
    let pad = width.saturating_sub(value.chars().count());
    format!("{}{}", value, " ".repeat(pad))
}

/// Colorize a cell whose trimmed content is a known status value. Unknown
/// content passes through untouched — this is cosmetic, not a mapping that
/// may silently default.
fn colorize_status(padded: &str) -> String {
    let code = match padded.trim_end() {
        "completed" => Some("32"),
        "in_progress" => Some("34"),
        "planning" | "pending" => Some("36"),
        "on_hold" => Some("33"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
        None => padded.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_across_mixed_widths() {
        let headers = ["#", "title", "status"];
        let rows = vec![
            vec!["1".to_string(), "Kitchen Remodel".to_string(), "in_progress".to_string()],
            vec!["2".to_string(), "Patio".to_string(), "completed".to_string()],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("title"));
        assert!(lines[1].chars().all(|c| c == '-'));
        // "status" starts at the same column in every line.
        let header_col = lines[0].find("status").unwrap();
        assert_eq!(lines[2].find("in_progress").unwrap(), header_col);
        assert_eq!(lines[3].find("completed").unwrap(), header_col);
    }

    #[test]
    fn missing_cells_render_a_dash() {
        let headers = ["id", "title"];
        let rows = vec![vec!["1".to_string()]];
        let table = render_entity_table(&headers, &rows, PLAIN);
        assert!(table.lines().nth(2).unwrap().contains('-'));
    }

    #[test]
    fn long_cells_are_truncated_to_fit() {
        let headers = ["title"];
        let rows = vec![vec![
            "A very long project title that will not fit".to_string(),
        ]];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(20),
                color: false,
            },
        );
        for line in table.lines() {
            assert!(line.chars().count() <= 20, "line too wide: {line:?}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn status_cells_are_colorized_when_enabled() {
        let headers = ["status"];
        let rows = vec![vec!["completed".to_string()]];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[32m"));
    }

    #[test]
    fn non_status_cells_are_left_alone_even_with_color() {
        let headers = ["title"];
        let rows = vec![vec!["Kitchen".to_string()]];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(!table.contains('\u{1b}'));
    }
}
