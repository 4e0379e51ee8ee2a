use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

/// Account registration page.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="max-w-sm mx-auto space-y-4">
            <h1 class="text-2xl font-bold">{i18n.t("pages.register.title")}</h1>
            <input type="text" class="input input-bordered w-full" placeholder="username" />
            <input type="email" class="input input-bordered w-full" placeholder="email" />
            <input type="password" class="input input-bordered w-full" placeholder="password" />
            <button class="btn btn-primary w-full">{i18n.t("pages.register.action")}</button>
        </div>
    }
}
