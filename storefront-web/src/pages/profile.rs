use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

/// Member account page.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{i18n.t("pages.profile.title")}</h1>
            <p>{i18n.t("pages.profile.blurb")}</p>
        </div>
    }
}
