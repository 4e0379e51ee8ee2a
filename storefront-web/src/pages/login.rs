use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

/// Member login page.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="max-w-sm mx-auto space-y-4">
            <h1 class="text-2xl font-bold">{i18n.t("pages.login.title")}</h1>
            <input type="text" class="input input-bordered w-full" placeholder="username or email" />
            <input type="password" class="input input-bordered w-full" placeholder="password" />
            <button class="btn btn-primary w-full">{i18n.t("pages.login.action")}</button>
        </div>
    }
}
