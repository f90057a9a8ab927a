//! Text and JSON rendering of an [`AnalysisResult`].

use crate::{analysis::AnalysisResult, error::InternalResult};

const HEADER: [&str; 5] = ["#", "Kind", "Text", "Line", "Column"];

/// Renders a numbered token table followed by the counts and the error list.
pub fn render_table(result: &AnalysisResult) -> String {
    let rows: Vec<[String; 5]> = result
        .tokens
        .iter()
        .enumerate()
        .map(|(i, t)| {
            [
                (i + 1).to_string(),
                t.label.to_string(),
                t.text.clone(),
                t.line.to_string(),
                t.column.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADER.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADER.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    out.push_str(&format!(
        "\ntokens: {}, ok: {}, errors: {}\n",
        result.token_count, result.success_count, result.error_count
    ));
    if result.has_errors {
        out.push_str("\nerrors:\n");
        for message in &result.errors {
            out.push_str(&format!("  {}\n", message));
        }
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

pub fn render_json(result: &AnalysisResult, pretty: bool) -> InternalResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn test_table_rows_are_numbered() {
        let table = render_table(&analyze("x := 1;"));
        let lines: Vec<_> = table.lines().collect();
        assert!(lines[0].starts_with("# | Kind"));
        assert!(lines[2].starts_with("1 | Identifier"));
        assert!(lines[3].contains("Assignment"));
        assert!(lines[5].starts_with("4 | Semicolon"));
        assert!(table.contains("tokens: 4, ok: 4, errors: 0"));
        assert!(!table.contains("errors:\n"));
    }

    #[test]
    fn test_table_lists_errors() {
        let table = render_table(&analyze("x @"));
        assert!(table.contains("errors:\n  unexpected character '@' (line 1, column 3)"));
    }

    #[test]
    fn test_table_ends_with_newline_per_line() {
        let table = render_table(&analyze("a :: b"));
        assert!(table.ends_with("(line 1, column 4)\n"));
        assert_eq!(table.lines().filter(|l| l.contains("| ERROR")).count(), 2);
        assert!(table.contains("\ntokens: 4, ok: 2, errors: 2\n"));
    }

    #[test]
    fn test_json() {
        let json = render_json(&analyze("x"), false).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.contains(r#""token_count":1"#));
    }
}
