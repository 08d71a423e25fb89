//! The catalog list view: a typed view tree built from a book collection.
//!
//! [`CatalogListView::render`] is a pure projection of an ordered list of
//! books into a [`View`]. Header and footer chrome are injected through the
//! [`Chrome`] trait; navigation targets are expressed as [`Route`]s for a
//! router to resolve.

mod list;
mod model;
mod route;
mod text;

pub use list::*;
pub use model::*;
pub use route::Route;
pub use text::render_text;
