//! Application model types: `App`, `Focus` and `RowAction`.
//!
//! Focus moves over the view's link controls in page order: the create
//! link first, then every record row. A focused row has one of its two
//! actions selected.

use std::path::PathBuf;

use crate::view::{Route, Row, View};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum RowAction {
    #[default]
    View,
    Edit,
}

impl RowAction {
    pub fn toggled(self) -> Self {
        match self {
            Self::View => Self::Edit,
            Self::Edit => Self::View,
        }
    }
}

/// Which link control is focused.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Focus {
    Create,
    Row { pos: usize, action: RowAction },
}

/// The main application model.
pub struct App {
    pub view: View,
    pub focus: Focus,
    pub catalog: Option<PathBuf>,
}

impl App {
    /// Create a new `App` focused on the first row, or on the create link
    /// when there are no rows.
    pub fn new(view: View) -> Self {
        let focus = if view.table.rows().is_empty() {
            Focus::Create
        } else {
            Focus::Row {
                pos: 0,
                action: RowAction::View,
            }
        };

        Self {
            view,
            focus,
            catalog: None,
        }
    }

    /// Record the catalog file the view was rendered from.
    pub fn set_catalog(&mut self, path: PathBuf) {
        self.catalog = Some(path);
    }

    pub fn row_count(&self) -> usize {
        self.view.table.rows().len()
    }

    /// Return true if the view contains any record rows.
    pub fn has_rows(&self) -> bool {
        self.row_count() > 0
    }

    /// Slot in page order: 0 is the create link, `n` is row `n - 1`.
    fn slot(&self) -> usize {
        match self.focus {
            Focus::Create => 0,
            Focus::Row { pos, .. } => pos + 1,
        }
    }

    fn action(&self) -> RowAction {
        match self.focus {
            Focus::Create => RowAction::View,
            Focus::Row { action, .. } => action,
        }
    }

    fn focus_slot(&mut self, slot: usize) {
        let action = self.action();
        self.focus = match slot {
            0 => Focus::Create,
            n => Focus::Row {
                pos: n - 1,
                action,
            },
        };
    }

    /// Move focus to the next control, wrapping to the create link.
    pub fn next(&mut self) {
        let slots = self.row_count() + 1;
        self.focus_slot((self.slot() + 1) % slots);
    }

    /// Move focus to the previous control, wrapping to the last row.
    pub fn prev(&mut self) {
        let slots = self.row_count() + 1;
        self.focus_slot((self.slot() + slots - 1) % slots);
    }

    /// Focus the first row, if any.
    pub fn first_row(&mut self) {
        if self.has_rows() {
            self.focus_slot(1);
        }
    }

    /// Focus the last row, if any.
    pub fn last_row(&mut self) {
        if self.has_rows() {
            self.focus_slot(self.row_count());
        }
    }

    /// Switch the focused row between its view and edit links.
    pub fn toggle_action(&mut self) {
        if let Focus::Row { pos, action } = self.focus {
            self.focus = Focus::Row {
                pos,
                action: action.toggled(),
            };
        }
    }

    pub fn selected_row(&self) -> Option<&Row> {
        match self.focus {
            Focus::Create => None,
            Focus::Row { pos, .. } => self.view.table.rows().get(pos),
        }
    }

    /// Route of the focused control.
    pub fn focused_route(&self) -> Route {
        match self.focus {
            Focus::Row { action, .. } => self
                .row_route(action)
                .unwrap_or_else(|| self.view.title.create.route.clone()),
            Focus::Create => self.view.title.create.route.clone(),
        }
    }

    /// Route of `action` on the focused row; `None` when no row is focused.
    pub fn row_route(&self, action: RowAction) -> Option<Route> {
        self.selected_row().map(|row| match action {
            RowAction::View => row.view.route.clone(),
            RowAction::Edit => row.edit.route.clone(),
        })
    }

    /// Swap in a freshly rendered view. A focused row follows its record id
    /// to its new position; if the record is gone, the position is clamped.
    pub fn replace_view(&mut self, view: View) {
        let previous = match self.focus {
            Focus::Create => None,
            Focus::Row { pos, action } => {
                let key = self.selected_row().map(|r| r.key.clone());
                Some((key, pos, action))
            }
        };
        self.view = view;

        let Some((key, pos, action)) = previous else {
            return;
        };

        let rows = self.view.table.rows();
        if rows.is_empty() {
            self.focus = Focus::Create;
            return;
        }

        let pos = key
            .and_then(|key| rows.iter().position(|r| r.key == key))
            .unwrap_or_else(|| pos.min(rows.len() - 1));
        self.focus = Focus::Row { pos, action };
    }
}
