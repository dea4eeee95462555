//! Mobile menu state machine
//!
//! Two states, four ways to close, one way to open:
//!
//! | Event | Transition |
//! |-------|------------|
//! | toggle button | flips open/closed |
//! | nav link click | forces closed |
//! | click outside toggle and menu | forces closed |
//! | Escape key | forces closed |
//! | viewport widens past the breakpoint | forces closed |

/// Viewport width at which the mobile menu exists at all. Crossing it
/// upward force-closes the menu.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Menu hidden; toggle shows its closed glyph.
    #[default]
    Closed,
    /// Menu expanded over the page.
    Open,
}

impl MenuState {
    /// Whether the menu is currently expanded.
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Toggle-button activation: flips the state.
    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    /// Forces the menu closed. Used by every close path: link clicks,
    /// outside clicks, Escape, and breakpoint crossings.
    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    /// CSS class for the menu container.
    pub fn menu_class(self) -> &'static str {
        if self.is_open() {
            "nav-menu active"
        } else {
            "nav-menu"
        }
    }

    /// CSS class for the toggle button.
    pub fn toggle_class(self) -> &'static str {
        if self.is_open() {
            "nav-toggle active"
        } else {
            "nav-toggle"
        }
    }
}

/// True when a resize crossed the breakpoint from mobile to desktop.
///
/// Strict on the far side: landing exactly on the breakpoint is still
/// mobile, so only `previous <= breakpoint < new` closes the menu.
pub fn crossed_to_desktop(previous_width: f64, width: f64) -> bool {
    previous_width <= MOBILE_BREAKPOINT && width > MOBILE_BREAKPOINT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_flips_both_ways() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn close_is_forced_and_idempotent() {
        let mut menu = MenuState::Open;
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn breakpoint_crossing_is_strict() {
        assert!(crossed_to_desktop(768.0, 769.0));
        assert!(crossed_to_desktop(400.0, 1024.0));

        // Still mobile, or already desktop: no forced close.
        assert!(!crossed_to_desktop(400.0, 768.0));
        assert!(!crossed_to_desktop(769.0, 1024.0));
        // Narrowing never closes.
        assert!(!crossed_to_desktop(1024.0, 400.0));
    }

    #[test]
    fn classes_follow_state() {
        let mut menu = MenuState::default();
        assert_eq!(menu.menu_class(), "nav-menu");
        assert_eq!(menu.toggle_class(), "nav-toggle");
        menu.toggle();
        assert_eq!(menu.menu_class(), "nav-menu active");
        assert_eq!(menu.toggle_class(), "nav-toggle active");
    }
}
