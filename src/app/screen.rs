// SPDX-License-Identifier: MPL-2.0
//! Top-level screens reachable from the navigation bar.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Gallery,
    Contact,
    Settings,
}

impl Screen {
    /// Screens in menu order.
    pub const ALL: [Screen; 3] = [Screen::Gallery, Screen::Contact, Screen::Settings];

    /// The i18n key for this screen's menu label.
    pub fn label_key(self) -> &'static str {
        match self {
            Screen::Gallery => "navbar-menu-gallery",
            Screen::Contact => "navbar-menu-contact",
            Screen::Settings => "navbar-menu-settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_screens_have_distinct_labels() {
        let keys: Vec<_> = Screen::ALL.iter().map(|s| s.label_key()).collect();
        let mut deduped = keys.clone();
        deduped.dedup();
        assert_eq!(keys.len(), deduped.len());
    }
}
