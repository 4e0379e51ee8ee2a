use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

/// Storefront landing page.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{i18n.t("pages.home.title")}</h1>
            <p>{i18n.t("pages.home.blurb")}</p>
        </div>
    }
}
