//! Header and footer collaborators composed around the catalog table.

use crate::config::UiSettings;
use crate::view::{Chrome, Region};

/// Key bindings shown in the footer, in display order.
const KEY_HINTS: [(&str, &str); 8] = [
    ("j/k", "up/down"),
    ("h/l", "view/edit"),
    ("gg/G", "top/bottom"),
    ("enter", "open"),
    ("n", "new book"),
    ("v/e", "view/edit row"),
    ("R", "reload"),
    ("q", "quit"),
];

/// Page header built from `[ui]` settings.
pub struct Banner {
    title: String,
    text: String,
}

impl Banner {
    pub fn new(ui: &UiSettings) -> Self {
        Self {
            title: ui.header_title.clone(),
            text: ui.header_text.clone(),
        }
    }
}

impl Chrome for Banner {
    fn render(&self) -> Region {
        Region::new(self.title.as_str(), self.text.as_str())
    }
}

/// Page footer listing the key bindings.
pub struct KeyHints;

impl Chrome for KeyHints {
    fn render(&self) -> Region {
        let text = KEY_HINTS
            .iter()
            .map(|(k, v)| format!("[{k}] {v}"))
            .collect::<Vec<String>>()
            .join(" | ");
        Region::new(" controls ", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_echoes_ui_settings() {
        let ui = UiSettings {
            header_title: " t ".into(),
            header_text: "hello".into(),
            ..UiSettings::default()
        };
        assert_eq!(Banner::new(&ui).render(), Region::new(" t ", "hello"));
    }

    #[test]
    fn key_hints_keep_binding_order() {
        let region = KeyHints.render();
        assert_eq!(region.title, " controls ");
        assert!(region.text.starts_with("[j/k] up/down | [h/l] view/edit"));
        assert!(region.text.ends_with("[q] quit"));
    }
}
