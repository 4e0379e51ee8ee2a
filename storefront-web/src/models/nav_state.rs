use shared::models::User;

use crate::routes::ShopRoute;

/// Minimum window width treated as a wide viewport, in CSS pixels.
pub const WIDE_VIEWPORT_MIN: f64 = 768.0;

/// Responsive visibility state owned by the navigation bar.
///
/// The two flags are deliberately decoupled: the manual toggle may open the
/// menu on a narrow viewport, and that override lasts until the next resize
/// or narrow-width navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    /// Whether the member menu is expanded.
    pub menu_open: bool,
    /// Whether the window is at or above the responsive breakpoint.
    pub wide_viewport: bool,
}

impl NavState {
    /// State derived from a window measurement: both flags follow the
    /// breakpoint.
    #[must_use]
    pub fn measured(width: f64) -> Self {
        let wide = width >= WIDE_VIEWPORT_MIN;
        Self {
            menu_open: wide,
            wide_viewport: wide,
        }
    }

    /// A navigation while narrow collapses the menu; while wide it leaves
    /// the state untouched.
    #[must_use]
    pub fn navigated(self, width: f64) -> Self {
        if width < WIDE_VIEWPORT_MIN {
            Self {
                menu_open: false,
                ..self
            }
        } else {
            self
        }
    }

    /// Manual menu toggle, independent of the viewport.
    #[must_use]
    pub fn toggled(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    /// The home icon shows away from the landing route, and on it only
    /// while the menu is hidden.
    #[must_use]
    pub fn shows_home_icon(self, route: &ShopRoute) -> bool {
        !route.is_home() || !self.menu_open
    }
}

/// Whether the cart link belongs in the member menu for `route`.
#[must_use]
pub fn shows_cart_link(route: &ShopRoute) -> bool {
    !route.is_home() && !route.is_login() && !route.is_register()
}

/// Register/login are offered to guests; members get logout instead.
#[must_use]
pub fn shows_join_links(user: Option<&User>) -> bool {
    user.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Timestamp;
    use uuid::Uuid;

    fn member() -> User {
        User {
            id: Uuid::new_v4(),
            username: "mei".to_string(),
            email: "mei@example.com".to_string(),
            display_name: None,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn wide_measurement_opens_menu() {
        let state = NavState::measured(1024.0);
        assert!(state.wide_viewport);
        assert!(state.menu_open);
    }

    #[test]
    fn narrow_measurement_hides_menu() {
        let state = NavState::measured(400.0);
        assert!(!state.wide_viewport);
        assert!(!state.menu_open);
    }

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(NavState::measured(768.0).wide_viewport);
        assert!(!NavState::measured(767.9).wide_viewport);
    }

    #[test]
    fn resize_crosses_breakpoint_both_ways() {
        let narrow = NavState::measured(400.0);
        let widened = NavState::measured(1024.0);
        assert!(!narrow.menu_open && !narrow.wide_viewport);
        assert!(widened.menu_open && widened.wide_viewport);

        let narrowed = NavState::measured(500.0);
        assert!(!narrowed.menu_open && !narrowed.wide_viewport);
    }

    #[test]
    fn manual_toggle_persists_until_next_measurement() {
        let opened = NavState::measured(400.0).toggled();
        assert!(opened.menu_open);
        assert!(!opened.wide_viewport);

        // The next resize overwrites the override
        let remeasured = NavState::measured(500.0);
        assert!(!remeasured.menu_open);
    }

    #[test]
    fn toggle_inverts_regardless_of_viewport() {
        let closed_on_wide = NavState::measured(1024.0).toggled();
        assert!(!closed_on_wide.menu_open);
        assert!(closed_on_wide.wide_viewport);

        assert!(closed_on_wide.toggled().menu_open);
    }

    #[test]
    fn narrow_navigation_collapses_menu() {
        let opened = NavState::measured(400.0).toggled();
        let navigated = opened.navigated(400.0);
        assert!(!navigated.menu_open);
        assert!(!navigated.wide_viewport);

        // Already-closed menus stay closed
        assert!(!navigated.navigated(400.0).menu_open);
    }

    #[test]
    fn wide_navigation_preserves_state() {
        let state = NavState::measured(1024.0);
        assert_eq!(state.navigated(1024.0), state);

        // A manual close on desktop also survives navigation
        let closed = state.toggled();
        assert_eq!(closed.navigated(1024.0), closed);
    }

    #[test]
    fn home_icon_hidden_only_on_home_with_open_menu() {
        let open = NavState::measured(1024.0);
        assert!(!open.shows_home_icon(&ShopRoute::Home));
        assert!(open.shows_home_icon(&ShopRoute::Seller));

        let closed = NavState::measured(400.0);
        assert!(closed.shows_home_icon(&ShopRoute::Home));
        assert!(closed.shows_home_icon(&ShopRoute::Cart));
    }

    #[test]
    fn cart_link_hidden_on_home_login_register() {
        assert!(!shows_cart_link(&ShopRoute::Home));
        assert!(!shows_cart_link(&ShopRoute::Login));
        assert!(!shows_cart_link(&ShopRoute::Register));

        assert!(shows_cart_link(&ShopRoute::Seller));
        assert!(shows_cart_link(&ShopRoute::Profile));
        assert!(shows_cart_link(&ShopRoute::Cart));
    }

    #[test]
    fn join_links_only_for_guests() {
        assert!(shows_join_links(None));

        let user = member();
        assert!(!shows_join_links(Some(&user)));
    }
}
