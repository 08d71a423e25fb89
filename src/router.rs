//! Navigation hand-off.
//!
//! The list view only names where to go; a [`Router`] decides what that
//! means. Calls are fire-and-forget: nothing is returned to the caller.

use crate::view::Route;

pub trait Router {
    fn navigate(&mut self, route: &Route);
}

/// Records every route it is asked to open.
#[derive(Debug, Default)]
pub struct History {
    visited: Vec<Route>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> &[Route] {
        &self.visited
    }
}

impl Router for History {
    fn navigate(&mut self, route: &Route) {
        log::info!("navigate {route}");
        self.visited.push(route.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BookId;

    #[test]
    fn history_keeps_navigation_order() {
        let mut history = History::new();
        assert!(history.visited().is_empty());

        history.navigate(&Route::Create);
        history.navigate(&Route::Edit(BookId::from("b2")));

        assert_eq!(history.visited().len(), 2);
        assert_eq!(history.visited()[0], Route::Create);
        assert_eq!(history.visited().last(), Some(&Route::Edit(BookId::from("b2"))));
    }
}
