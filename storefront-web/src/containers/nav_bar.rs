use i18nrs::yew::use_translation;
use shared::models::OAuthProvider;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, window};
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_icons::{Icon, IconId};
use yew_router::prelude::{Link, use_navigator, use_route};

use crate::api::AuthClient;
use crate::config::FrontendConfig;
use crate::models::nav_state::{NavState, shows_cart_link, shows_join_links};
use crate::routes::ShopRoute;
use crate::session::SessionHandle;

/// Current window width in CSS pixels, or 0 when no window is attached.
fn window_width() -> f64 {
    window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

/// Responsive navigation bar.
///
/// Owns the menu-visibility state, tracks the window against the 768 px
/// breakpoint for its lifetime, collapses the menu on narrow-width
/// navigation, and mirrors the injected session at every navigation
/// boundary.
#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let (i18n, ..) = use_translation();
    let route = use_route::<ShopRoute>().unwrap_or_default();
    let navigator = use_navigator().unwrap();
    let sessions = use_context::<SessionHandle>().expect("session context not mounted");

    // Mount-time measurement: both flags follow the breakpoint
    let state = use_state(|| NavState::measured(window_width()));
    let current_user = use_state(|| sessions.current_user());

    // Resize overwrites the whole state for the component's lifetime; the
    // subscription is released on unmount.
    {
        let state = state.clone();
        use_event_with_window("resize", move |_: Event| {
            state.set(NavState::measured(window_width()));
        });
    }

    // A navigation while narrow collapses the menu
    {
        let state = state.clone();
        use_effect_with(route.clone(), move |_| {
            let next = (*state).navigated(window_width());
            state.set(next);
            || ()
        });
    }

    // The session is re-read only at mount and navigation boundaries
    {
        let current_user = current_user.clone();
        let sessions = sessions.clone();
        use_effect_with(route.clone(), move |_| {
            current_user.set(sessions.current_user());
            || ()
        });
    }

    let on_menu_toggle = {
        let state = state.clone();
        Callback::from(move |_: Event| {
            let next = (*state).toggled();
            state.set(next);
        })
    };

    let on_logout = {
        let sessions = sessions.clone();
        let current_user = current_user.clone();
        let navigator = navigator.clone();
        let notice = i18n.t("nav.logout_notice");
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let sessions = sessions.clone();
            let current_user = current_user.clone();
            let navigator = navigator.clone();
            let notice = notice.clone();
            spawn_local(async move {
                let result = if current_user.is_some() {
                    // Local session: cleared before any navigation is issued
                    sessions.clear();
                    current_user.set(None);
                    Ok(())
                } else {
                    AuthClient::shared().sign_out(OAuthProvider::Google).await
                };
                match result {
                    Ok(()) => {
                        if let Some(window) = window() {
                            window.alert_with_message(&notice).unwrap_or_default();
                        }
                        navigator.push(&ShopRoute::Home);
                    }
                    Err(err) => log::error!("sign-out failed: {err}"),
                }
            });
        })
    };

    let config = FrontendConfig::new();

    let member_menu = state.menu_open.then(|| {
        html! {
            <div class="navbar-end">
                <nav>
                    <ul class="menu menu-horizontal px-1 gap-1">
                        <li>
                            <Link<ShopRoute> to={ShopRoute::Seller}>
                                {i18n.t("nav.seller_center")}
                            </Link<ShopRoute>>
                        </li>
                        <li>
                            <Link<ShopRoute> to={ShopRoute::Profile}>
                                {i18n.t("nav.member_center")}
                            </Link<ShopRoute>>
                        </li>
                        { shows_cart_link(&route).then(|| html! {
                            <li>
                                <Link<ShopRoute> to={ShopRoute::Cart}>
                                    {i18n.t("nav.cart")}
                                </Link<ShopRoute>>
                            </li>
                        }) }
                        {
                            if shows_join_links(current_user.as_ref()) {
                                html! {
                                    <>
                                        <li>
                                            <Link<ShopRoute> to={ShopRoute::Register}>
                                                {i18n.t("nav.register")}
                                            </Link<ShopRoute>>
                                        </li>
                                        <li>
                                            <Link<ShopRoute> to={ShopRoute::Login}>
                                                {i18n.t("nav.login")}
                                            </Link<ShopRoute>>
                                        </li>
                                    </>
                                }
                            } else {
                                html! {
                                    <li>
                                        <a onclick={on_logout}>{i18n.t("nav.logout")}</a>
                                    </li>
                                }
                            }
                        }
                    </ul>
                </nav>
            </div>
        }
    });

    html! {
        <div class="navbar bg-base-100">
            <div class="hidden">
                <input
                    type="checkbox"
                    id="menu-control"
                    checked={state.menu_open}
                    onchange={on_menu_toggle}
                />
            </div>
            <div class="navbar-start gap-2">
                <label for="menu-control" class="btn btn-ghost md:hidden">
                    <Icon icon_id={IconId::HeroiconsSolidBars3} class="w-5 h-5" />
                </label>
                <ul class="flex items-center gap-3 px-2">
                    { state.shows_home_icon(&route).then(|| html! {
                        <li>
                            <Link<ShopRoute> to={ShopRoute::Home}>
                                <Icon icon_id={IconId::HeroiconsSolidHome} class="w-5 h-5" />
                            </Link<ShopRoute>>
                        </li>
                    }) }
                    <li>
                        <a href={format!("tel:{}", config.contact_phone())}>
                            <Icon icon_id={IconId::HeroiconsSolidPhone} class="w-5 h-5" />
                        </a>
                    </li>
                    <li>
                        <a href={format!("mailto:{}", config.contact_email())}>
                            <Icon icon_id={IconId::HeroiconsSolidEnvelope} class="w-5 h-5" />
                        </a>
                    </li>
                    <li>
                        <a href={config.linkedin_url().to_string()} target="_blank">
                            <i class="fa-brands fa-linkedin text-lg"></i>
                        </a>
                    </li>
                </ul>
            </div>
            {member_menu}
        </div>
    }
}
