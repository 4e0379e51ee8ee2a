use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{ShopRoute, switch};
use crate::session::{BrowserSessions, SessionHandle};

/// Application root: injects the session provider and mounts the router.
#[function_component(App)]
pub fn app() -> Html {
    let sessions = use_memo((), |_| SessionHandle::new(Rc::new(BrowserSessions)));

    html! {
        <ContextProvider<SessionHandle> context={(*sessions).clone()}>
            <BrowserRouter>
                <Switch<ShopRoute> render={switch} />
            </BrowserRouter>
        </ContextProvider<SessionHandle>>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::language::supported_languages;
    use crate::session::MemorySessions;
    use i18nrs::yew::{I18nProvider, I18nProviderConfig};
    use shared::models::{Timestamp, User};
    use std::collections::HashMap;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        sessions: SessionHandle,
    }

    /// Mirrors the production wiring in `main.rs`, with the session store
    /// swapped for a deterministic in-memory one.
    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let translations: HashMap<&str, &str> = supported_languages()
            .iter()
            .map(|(&key, value)| (key, value.translation))
            .collect();

        let config = I18nProviderConfig {
            translations,
            default_language: "en".to_string(),
            ..Default::default()
        };

        html! {
            <I18nProvider ..config>
                <ContextProvider<SessionHandle> context={props.sessions.clone()}>
                    <BrowserRouter>
                        <Switch<ShopRoute> render={switch} />
                    </BrowserRouter>
                </ContextProvider<SessionHandle>>
            </I18nProvider>
        }
    }

    async fn render_with(sessions: SessionHandle) -> String {
        yew::LocalServerRenderer::<Harness>::with_props(HarnessProps { sessions })
            .render()
            .await
    }

    fn member() -> User {
        User {
            id: uuid::Uuid::new_v4(),
            username: "mei".to_string(),
            email: "mei@example.com".to_string(),
            display_name: Some("Mei-Ling".to_string()),
            created_at: Timestamp::now(),
        }
    }

    #[wasm_bindgen_test]
    async fn shell_renders_contact_links_and_footer() {
        let rendered = render_with(SessionHandle::new(Rc::new(MemorySessions::default()))).await;

        assert!(rendered.contains("tel:"));
        assert!(rendered.contains("mailto:"));
        assert!(rendered.contains("linkedin"));
        assert!(rendered.contains("Powered by Rust and Yew"));
    }

    #[wasm_bindgen_test]
    async fn guest_sees_join_prompt() {
        let rendered = render_with(SessionHandle::new(Rc::new(MemorySessions::default()))).await;

        assert!(rendered.contains("Welcome! Sign in to start shopping."));
        assert!(!rendered.contains("Welcome back,"));
    }

    #[wasm_bindgen_test]
    async fn signed_in_member_is_greeted() {
        let sessions = SessionHandle::new(Rc::new(MemorySessions::signed_in(member())));
        let rendered = render_with(sessions).await;

        assert!(rendered.contains("Welcome back,"));
        assert!(rendered.contains("Mei-Ling"));
        assert!(!rendered.contains("Welcome! Sign in to start shopping."));
    }
}
