use std::fmt;

use crate::catalog::BookId;

/// A logical navigation target emitted by the list view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/book/create`
    Create,
    /// `/book/view/{id}`
    View(BookId),
    /// `/book/edit/{id}`
    Edit(BookId),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("/book/create"),
            Self::View(id) => write!(f, "/book/view/{id}"),
            Self::Edit(id) => write!(f, "/book/edit/{id}"),
        }
    }
}
