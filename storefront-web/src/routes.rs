use crate::containers::layout::Layout;
use crate::pages::*;
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The storefront routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum ShopRoute {
    #[at("/")]
    Home,
    #[at("/seller")]
    Seller,
    #[at("/user/profile")]
    Profile,
    #[at("/user/cart")]
    Cart,
    #[at("/user/register")]
    Register,
    #[at("/user/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Default for ShopRoute {
    fn default() -> Self {
        ShopRoute::Home
    }
}

impl ShopRoute {
    /// Whether this is the storefront landing route.
    #[must_use]
    pub fn is_home(&self) -> bool {
        matches!(self, ShopRoute::Home)
    }

    /// Whether this is the login route.
    #[must_use]
    pub fn is_login(&self) -> bool {
        matches!(self, ShopRoute::Login)
    }

    /// Whether this is the registration route.
    #[must_use]
    pub fn is_register(&self) -> bool {
        matches!(self, ShopRoute::Register)
    }
}

/// Switch function for the storefront routes.
pub fn switch(route: ShopRoute) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    match route {
        ShopRoute::Home => html! { <Layout><HomePage /></Layout> },
        ShopRoute::Seller => html! { <Layout><SellerPage /></Layout> },
        ShopRoute::Profile => html! { <Layout><ProfilePage /></Layout> },
        ShopRoute::Cart => html! { <Layout><CartPage /></Layout> },
        ShopRoute::Register => html! { <Layout><RegisterPage /></Layout> },
        ShopRoute::Login => html! { <Layout><LoginPage /></Layout> },
        ShopRoute::NotFound => html! { <Layout><ErrorPage /></Layout> },
    }
}

#[cfg(test)]
mod tests {
    use super::ShopRoute;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    #[test]
    fn route_paths() {
        assert_eq!(ShopRoute::Home.to_path(), "/");
        assert_eq!(ShopRoute::Seller.to_path(), "/seller");
        assert_eq!(ShopRoute::Profile.to_path(), "/user/profile");
        assert_eq!(ShopRoute::Cart.to_path(), "/user/cart");
        assert_eq!(ShopRoute::Register.to_path(), "/user/register");
        assert_eq!(ShopRoute::Login.to_path(), "/user/login");
        assert_eq!(ShopRoute::NotFound.to_path(), "/404");
    }

    #[test]
    fn recognize_roundtrips_every_route() {
        for route in ShopRoute::iter() {
            let path = route.to_path();
            assert_eq!(ShopRoute::recognize(&path), Some(route));
        }
    }

    #[test]
    fn unknown_path_falls_back_to_not_found() {
        assert_eq!(
            ShopRoute::recognize("/no/such/page"),
            Some(ShopRoute::NotFound)
        );
    }

    #[test]
    fn route_paths_are_distinct() {
        let paths: Vec<String> = ShopRoute::iter().map(|route| route.to_path()).collect();
        let mut deduped = paths.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(paths.len(), deduped.len());
    }

    #[test]
    fn default_is_home() {
        assert_eq!(ShopRoute::default(), ShopRoute::Home);
    }

    #[test]
    fn route_predicates() {
        assert!(ShopRoute::Home.is_home());
        assert!(!ShopRoute::Cart.is_home());

        assert!(ShopRoute::Login.is_login());
        assert!(!ShopRoute::Seller.is_login());

        assert!(ShopRoute::Register.is_register());
        assert!(!ShopRoute::Profile.is_register());
    }
}
