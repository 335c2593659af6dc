use crate::types::SummaryRow;
use std::fmt::Write;

const HEADERS: [&str; 5] = ["Generation", "a", "b", "c", "Best Fitness"];

/// Fixed-width text table of summary rows
pub fn render_table(rows: &[SummaryRow]) -> String {
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.generation.to_string(),
                format!("{:.6}", row.a),
                format!("{:.6}", row.b),
                format!("{:.6}", row.c),
                format!("{:.6}", row.fitness),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let separator: String = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let separator = format!("+{}+", separator);

    let _ = writeln!(out, "{}", separator);
    let _ = writeln!(out, "{}", format_row(&HEADERS.map(String::from), &widths));
    let _ = writeln!(out, "{}", separator);
    for row in &cells {
        let _ = writeln!(out, "{}", format_row(row, &widths));
    }
    let _ = writeln!(out, "{}", separator);

    out
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let inner: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!(" {:>width$} ", cell, width = width))
        .collect();
    format!("|{}|", inner.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table() {
        let rows = vec![
            SummaryRow { generation: 1, a: 1.0, b: 0.5, c: -2.0, fitness: -2.125 },
            SummaryRow { generation: 2, a: 0.25, b: 0.0, c: 3.0, fitness: f64::NEG_INFINITY },
        ];
        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("Generation"));
        assert!(lines[3].contains("-2.125000"));
        assert!(lines[4].contains("-inf"));
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn test_empty_table_has_header() {
        assert_eq!(render_table(&[]).lines().count(), 4);
    }
}
