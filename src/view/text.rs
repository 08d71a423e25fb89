use unicode_width::UnicodeWidthStr;

use super::{Body, Column, Region, Row, Table, View};

const GAP: &str = "  ";

/// Render a [`View`] as plain, column-aligned text.
pub fn render_text(view: &View) -> String {
    let mut out = String::new();

    push_region(&mut out, &view.header);
    out.push('\n');

    out.push_str(&view.title.heading);
    out.push('\n');
    let create = &view.title.create;
    out.push_str(&format!(
        "{}{GAP}[{}] {}\n",
        view.title.subheading, create.label, create.route
    ));
    out.push('\n');

    push_table(&mut out, &view.table);
    out.push('\n');

    push_region(&mut out, &view.footer);
    out
}

fn push_region(out: &mut String, region: &Region) {
    for line in [region.title.trim(), region.text.trim()] {
        if !line.is_empty() {
            out.push_str(line);
            out.push('\n');
        }
    }
}

/// Cell text including link targets, which the terminal table omits.
fn text_cell(row: &Row, column: Column) -> String {
    match column {
        Column::Actions => format!(
            "{} {}{GAP}{} {}",
            row.view.label, row.view.route, row.edit.label, row.edit.route
        ),
        other => row.cell(other),
    }
}

fn push_table(out: &mut String, table: &Table) {
    let header: Vec<String> = table
        .columns
        .iter()
        .map(|c| c.label().to_string())
        .collect();
    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|r| table.columns.iter().map(|&c| text_cell(r, c)).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for cells in &rows {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.width());
        }
    }

    push_line(out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_line(out, &rule, &widths);

    match &table.body {
        Body::Rows(_) => {
            for cells in &rows {
                push_line(out, cells, &widths);
            }
        }
        Body::Empty(empty) => {
            let spanned = widths.iter().take(empty.colspan).sum::<usize>()
                + GAP.len() * empty.colspan.saturating_sub(1);
            let pad = spanned.saturating_sub(empty.message.width()) / 2;
            out.push_str(&" ".repeat(pad));
            out.push_str(&empty.message);
            out.push('\n');
        }
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell}{}", " ".repeat(w.saturating_sub(cell.width()))))
        .collect::<Vec<String>>()
        .join(GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}
