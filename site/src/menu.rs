//! Mobile navigation menu.

/// Selector of the hamburger button.
pub const TOGGLE_SELECTOR: &str = ".mobile-menu-toggle";
/// Selector of the navigation menu.
pub const MENU_SELECTOR: &str = ".nav-menu";
/// Class that shows the menu on small screens.
pub const ACTIVE_CLASS: &str = "active";

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuController {
    open: bool,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger button clicked.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A link inside the menu was followed; the menu always closes.
    pub fn link_clicked(&mut self) {
        self.open = false;
    }

    /// Transform applied to each hamburger bar.
    pub fn bar_transform(&self) -> &'static str {
        if self.open {
            "rotate(45deg)"
        } else {
            "rotate(0deg)"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        // GIVEN
        let mut menu = MenuController::new();
        assert_eq!(menu.bar_transform(), "rotate(0deg)");

        // WHEN
        assert!(menu.toggle());

        // THEN
        assert_eq!(menu.bar_transform(), "rotate(45deg)");

        // WHEN - a link is followed
        menu.link_clicked();
        assert!(!menu.is_open());

        // WHEN - closing an already closed menu
        menu.link_clicked();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(!menu.toggle());
    }
}
