//! UI rendering helpers for the terminal user interface.
//!
//! This module draws a rendered catalog `View` using `ratatui`, marking the
//! focused link control.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table, TableState, Wrap},
};

use crate::app::{App, Focus, RowAction};
use crate::config::UiSettings;
use crate::view::{Body, Column, Link, Region, Route};

const WIDTHS: [Constraint; 5] = [
    Constraint::Length(4),
    Constraint::Fill(3),
    Constraint::Fill(2),
    Constraint::Fill(2),
    Constraint::Length(16),
];

fn focused() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// A link drawn as a bracketed button, reversed when focused.
fn button(link: &Link, is_focused: bool) -> Span<'static> {
    let label = format!("[{}]", link.label);
    if is_focused {
        Span::styled(label, focused())
    } else {
        Span::raw(label)
    }
}

fn region_block(region: &Region) -> Paragraph<'_> {
    Paragraph::new(region.text.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(region.title.as_str())
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true })
}

fn status_text(app: &App, last: Option<&Route>) -> String {
    let mut parts: Vec<String> = vec![format!(" FOCUS: {}", app.focused_route())];

    if let Some(route) = last {
        parts.push(format!("LAST: {route}"));
    }
    parts.push(format!("BOOKS: {}", app.row_count()));
    if let Some(path) = &app.catalog {
        parts.push(format!("FILE: {}", path.display()));
    }

    parts.join(" • ")
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, last: Option<&Route>, ui_settings: &UiSettings) {
    let status_height = if ui_settings.show_status { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(status_height),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = &app.view.header;
    let header_par = Paragraph::new(header.text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(header.title.as_str())
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header_par, chunks[0]);

    // Title block with the create link
    let title = &app.view.title;
    let title_par = Paragraph::new(vec![
        Line::from(title.heading.as_str().bold()),
        Line::from(vec![
            Span::raw(format!("{}  ", title.subheading)),
            button(&title.create, app.focus == Focus::Create),
        ]),
    ])
    .block(Block::bordered().padding(Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }));
    frame.render_widget(title_par, chunks[1]);

    draw_table(frame, app, chunks[2]);

    if ui_settings.show_status {
        let status = Paragraph::new(status_text(app, last))
            .block(Block::bordered().title(" status "))
            .wrap(Wrap { trim: true });
        frame.render_widget(status, chunks[3]);
    }

    frame.render_widget(region_block(&app.view.footer), chunks[4]);
}

fn draw_table(frame: &mut Frame, app: &App, area: Rect) {
    let table_model = &app.view.table;
    let header = Row::new(table_model.columns.map(Column::label))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);
    let block = Block::default().borders(Borders::ALL).title(" books ");

    let (selected, action) = match app.focus {
        Focus::Row { pos, action } => (Some(pos), action),
        Focus::Create => (None, RowAction::View),
    };

    let rows: Vec<Row> = table_model
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let is_selected = selected == Some(i);
            let actions = Line::from(vec![
                button(&row.view, is_selected && action == RowAction::View),
                Span::raw(" "),
                button(&row.edit, is_selected && action == RowAction::Edit),
            ]);
            let mut cells: Vec<Cell> = table_model.columns[..4]
                .iter()
                .map(|&c| Cell::from(row.cell(c)))
                .collect();
            cells.push(Cell::from(actions));
            Row::new(cells)
        })
        .collect();

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .block(block.clone())
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(selected);
    frame.render_stateful_widget(table, area, &mut state);

    if let Body::Empty(empty) = &table_model.body {
        // The message spans the whole body below the column header.
        let inner = block.inner(area);
        if inner.height > 2 {
            let message_area = Rect {
                x: inner.x,
                y: inner.y + 2,
                width: inner.width,
                height: inner.height - 2,
            };
            let message = Paragraph::new(empty.message.as_str())
                .alignment(Alignment::Center)
                .italic()
                .wrap(Wrap { trim: true });
            frame.render_widget(message, message_area);
        }
    }
}
