use crate::catalog::BookId;

use super::Route;

/// Fixed table columns, in display order.
pub const COLUMNS: [Column; 5] = [
    Column::Index,
    Column::Title,
    Column::Author,
    Column::Genre,
    Column::Actions,
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Column {
    Index,
    Title,
    Author,
    Genre,
    Actions,
}

impl Column {
    pub fn label(self) -> &'static str {
        match self {
            Self::Index => "#",
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Genre => "Genre",
            Self::Actions => "Actions",
        }
    }
}

/// The complete rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub header: Region,
    pub title: TitleBlock,
    pub table: Table,
    pub footer: Region,
}

/// Opaque output of a header or footer collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub title: String,
    pub text: String,
}

impl Region {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Heading, subheading and the data-independent create link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBlock {
    pub heading: String,
    pub subheading: String,
    pub create: Link,
}

/// A labelled navigation control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub route: Route,
}

impl Link {
    pub fn new(label: impl Into<String>, route: Route) -> Self {
        Self {
            label: label.into(),
            route,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: [Column; 5],
    pub body: Body,
}

impl Table {
    /// Number of rendered body rows, counting the empty-state row.
    pub fn row_count(&self) -> usize {
        match &self.body {
            Body::Rows(rows) => rows.len(),
            Body::Empty(_) => 1,
        }
    }

    /// Record rows only; empty for the empty state.
    pub fn rows(&self) -> &[Row] {
        match &self.body {
            Body::Rows(rows) => rows,
            Body::Empty(_) => &[],
        }
    }
}

/// Table body: record rows, or the single empty-state row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Rows(Vec<Row>),
    Empty(EmptyRow),
}

/// One record row. `key` is the reconciliation identity; `index` is only
/// the 1-based display position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: BookId,
    pub index: usize,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub view: Link,
    pub edit: Link,
}

impl Row {
    /// Cell text for `column`; the actions column has no text of its own.
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Index => self.index.to_string(),
            Column::Title => self.title.clone(),
            Column::Author => self.author.clone(),
            Column::Genre => self.genre.clone(),
            Column::Actions => format!("{} {}", self.view.label, self.edit.label),
        }
    }
}

/// A message cell spanning `colspan` columns, with no links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyRow {
    pub colspan: usize,
    pub message: String,
}
