use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::ShopRoute;

/// Not-found page.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="space-y-4 text-center">
            <h1 class="text-2xl font-bold">{i18n.t("pages.error.title")}</h1>
            <Link<ShopRoute> to={ShopRoute::Home} classes="link">
                {i18n.t("pages.error.back_home")}
            </Link<ShopRoute>>
        </div>
    }
}
