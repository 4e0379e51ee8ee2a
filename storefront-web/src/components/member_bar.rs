use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routes::ShopRoute;
use crate::session::SessionHandle;

/// Session-status bar under the navigation bar: greets a signed-in member
/// or invites a guest to join.
#[function_component(MemberBar)]
pub fn member_bar() -> Html {
    let (i18n, ..) = use_translation();
    let sessions = use_context::<SessionHandle>().expect("session context not mounted");
    let current_user = use_state(|| sessions.current_user());

    html! {
        <div class="flex justify-end items-center gap-2 px-4 py-1 text-sm bg-base-200">
            {
                current_user.as_ref().map_or_else(
                    || html! {
                        <>
                            <span>{i18n.t("member.guest")}</span>
                            <Link<ShopRoute> to={ShopRoute::Register} classes="link">
                                {i18n.t("nav.register")}
                            </Link<ShopRoute>>
                            <Link<ShopRoute> to={ShopRoute::Login} classes="link">
                                {i18n.t("nav.login")}
                            </Link<ShopRoute>>
                        </>
                    },
                    |user| html! {
                        <>
                            <span class="font-semibold">
                                {i18n.t("member.greeting")}{" "}{user.greeting_name()}
                            </span>
                            <span class="text-base-content/70">
                                {i18n.t("member.since")}{" "}{user.created_at.clone()}
                            </span>
                        </>
                    },
                )
            }
        </div>
    }
}
