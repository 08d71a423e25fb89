//! Application module: exposes the focus model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the rendered view and
//! which of its link controls currently has focus.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
