use crate::io::join_names;
use crate::model::{DayOfWeek, ShiftKind};
use crate::scheduler::ScheduleReport;

/// Permet de customiser le rendu de la grille (texte, HTML, etc.).
pub trait GridRenderer {
    fn render(&self, report: &ScheduleReport) -> String;
}

/// Tableau texte encadré, une ligne par jour.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextGrid;

impl GridRenderer for TextGrid {
    fn render(&self, report: &ScheduleReport) -> String {
        let rows = table_rows(report);
        let header = header_row();

        let widths: Vec<usize> = (0..header.len())
            .map(|col| {
                rows.iter()
                    .map(|r| r[col].chars().count())
                    .chain(std::iter::once(header[col].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        out.push_str(&rule(&widths, '-'));
        out.push_str(&line(&header, &widths));
        out.push_str(&rule(&widths, '='));
        for row in &rows {
            out.push_str(&line(row, &widths));
            out.push_str(&rule(&widths, '-'));
        }
        out
    }
}

fn header_row() -> Vec<String> {
    std::iter::once("Day".to_string())
        .chain(ShiftKind::ALL.iter().map(|k| k.name().to_string()))
        .collect()
}

fn table_rows(report: &ScheduleReport) -> Vec<Vec<String>> {
    DayOfWeek::ALL
        .into_iter()
        .map(|day| {
            std::iter::once(day.name().to_string())
                .chain(ShiftKind::ALL.into_iter().map(|k| join_names(report, day, k)))
                .collect()
        })
        .collect()
}

fn rule(widths: &[usize], fill: char) -> String {
    let mut s = String::from("+");
    for w in widths {
        s.extend(std::iter::repeat(fill).take(w + 2));
        s.push('+');
    }
    s.push('\n');
    s
}

fn line(cells: &[String], widths: &[usize]) -> String {
    let mut s = String::from("|");
    for (cell, w) in cells.iter().zip(widths) {
        s.push_str(&format!(" {cell:<w$} |", w = *w));
    }
    s.push('\n');
    s
}

/// Tableau HTML minimal, pour une page ou un export web.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlTable;

impl GridRenderer for HtmlTable {
    fn render(&self, report: &ScheduleReport) -> String {
        let mut html = String::from("<h2>Final Weekly Schedule</h2>\n");
        html.push_str("<table border=\"1\" cellspacing=\"0\" cellpadding=\"5\">\n");
        html.push_str("<tr><th>Day</th>");
        for shift in ShiftKind::ALL {
            html.push_str(&format!("<th>{shift}</th>"));
        }
        html.push_str("</tr>\n");
        for day in DayOfWeek::ALL {
            html.push_str(&format!("<tr><td>{day}</td>"));
            for shift in ShiftKind::ALL {
                html.push_str(&format!("<td>{}</td>", escape(&join_names(report, day, shift))));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</table>\n");
        html
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
