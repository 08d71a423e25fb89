use super::*;
use crate::catalog::{Book, BookId};
use crate::view::{CatalogListView, Chrome, Region, Route, View};

struct Blank;

impl Chrome for Blank {
    fn render(&self) -> Region {
        Region::default()
    }
}

fn view_of(ids: &[&str]) -> View {
    let books: Vec<Book> = ids
        .iter()
        .map(|&id| Book::new(id, format!("title {id}"), "author", "genre"))
        .collect();
    CatalogListView::new(Blank, Blank).render(Some(books.as_slice()))
}

fn row(pos: usize, action: RowAction) -> Focus {
    Focus::Row { pos, action }
}

#[test]
fn new_focuses_first_row_or_create_when_empty() {
    assert_eq!(App::new(view_of(&["a", "b"])).focus, row(0, RowAction::View));
    assert_eq!(App::new(view_of(&[])).focus, Focus::Create);
}

#[test]
fn next_and_prev_wrap_through_create_link() {
    let mut app = App::new(view_of(&["a", "b"]));

    app.next();
    assert_eq!(app.focus, row(1, RowAction::View));
    app.next();
    assert_eq!(app.focus, Focus::Create);
    app.next();
    assert_eq!(app.focus, row(0, RowAction::View));

    app.prev();
    assert_eq!(app.focus, Focus::Create);
    app.prev();
    assert_eq!(app.focus, row(1, RowAction::View));
}

#[test]
fn empty_view_keeps_focus_on_create() {
    let mut app = App::new(view_of(&[]));
    app.next();
    app.prev();
    app.first_row();
    app.last_row();
    app.toggle_action();
    assert_eq!(app.focus, Focus::Create);
    assert_eq!(app.focused_route(), Route::Create);
    assert_eq!(app.row_route(RowAction::Edit), None);
}

#[test]
fn action_survives_row_moves() {
    let mut app = App::new(view_of(&["a", "b", "c"]));
    app.toggle_action();
    app.next();
    assert_eq!(app.focus, row(1, RowAction::Edit));

    app.last_row();
    assert_eq!(app.focus, row(2, RowAction::Edit));
    app.first_row();
    assert_eq!(app.focus, row(0, RowAction::Edit));
}

#[test]
fn focused_route_follows_focus() {
    let mut app = App::new(view_of(&["a", "b"]));
    assert_eq!(app.focused_route(), Route::View(BookId::from("a")));

    app.toggle_action();
    assert_eq!(app.focused_route(), Route::Edit(BookId::from("a")));

    app.next();
    assert_eq!(app.focused_route(), Route::Edit(BookId::from("b")));
    assert_eq!(app.row_route(RowAction::View), Some(Route::View(BookId::from("b"))));

    app.next();
    assert_eq!(app.focused_route(), Route::Create);
    assert!(app.selected_row().is_none());
}

#[test]
fn replace_view_follows_row_key() {
    let mut app = App::new(view_of(&["a", "b", "c"]));
    app.next();
    app.toggle_action();
    assert_eq!(app.selected_row().unwrap().key.as_str(), "b");

    app.replace_view(view_of(&["c", "x", "a", "b"]));
    assert_eq!(app.focus, row(3, RowAction::Edit));
    assert_eq!(app.selected_row().unwrap().index, 4);
}

#[test]
fn replace_view_clamps_when_row_disappears() {
    let mut app = App::new(view_of(&["a", "b", "c"]));
    app.last_row();

    app.replace_view(view_of(&["a"]));
    assert_eq!(app.focus, row(0, RowAction::View));

    app.replace_view(view_of(&[]));
    assert_eq!(app.focus, Focus::Create);
}

#[test]
fn replace_view_keeps_create_focus() {
    let mut app = App::new(view_of(&[]));
    app.replace_view(view_of(&["a"]));
    assert_eq!(app.focus, Focus::Create);
    assert!(app.has_rows());
}
