use crate::catalog::Book;

use super::{Body, COLUMNS, EmptyRow, Link, Region, Route, Row, Table, TitleBlock, View};

pub const HEADING: &str = "Library Book List";
pub const SUBHEADING: &str = "Available Books";
pub const CREATE_LABEL: &str = "Add New Book";
pub const VIEW_LABEL: &str = "View";
pub const EDIT_LABEL: &str = "Edit";
pub const EMPTY_MESSAGE: &str = "No books available. Add new books to the list!";

/// A parameterless rendering collaborator for page chrome (header, footer).
pub trait Chrome {
    fn render(&self) -> Region;
}

/// Projects a book collection into a [`View`], composing the injected
/// header and footer around the table.
pub struct CatalogListView<H, F> {
    header: H,
    footer: F,
}

impl<H: Chrome, F: Chrome> CatalogListView<H, F> {
    pub fn new(header: H, footer: F) -> Self {
        Self { header, footer }
    }

    /// Render `books` in the order given.
    ///
    /// An absent collection renders exactly like an empty one. Missing
    /// record fields become blank cells. Duplicate ids are not checked.
    pub fn render(&self, books: Option<&[Book]>) -> View {
        let books = books.unwrap_or_default();

        View {
            header: self.header.render(),
            title: TitleBlock {
                heading: HEADING.to_string(),
                subheading: SUBHEADING.to_string(),
                create: Link::new(CREATE_LABEL, Route::Create),
            },
            table: Table {
                columns: COLUMNS,
                body: body(books),
            },
            footer: self.footer.render(),
        }
    }
}

fn body(books: &[Book]) -> Body {
    if books.is_empty() {
        return Body::Empty(EmptyRow {
            colspan: COLUMNS.len(),
            message: EMPTY_MESSAGE.to_string(),
        });
    }

    Body::Rows(
        books
            .iter()
            .enumerate()
            .map(|(i, book)| row(i + 1, book))
            .collect(),
    )
}

fn row(index: usize, book: &Book) -> Row {
    Row {
        key: book.id.clone(),
        index,
        title: book.title().to_string(),
        author: book.author().to_string(),
        genre: book.genre().to_string(),
        view: Link::new(VIEW_LABEL, Route::View(book.id.clone())),
        edit: Link::new(EDIT_LABEL, Route::Edit(book.id.clone())),
    }
}
