use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

/// Shopping cart page.
#[function_component(CartPage)]
pub fn cart_page() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{i18n.t("pages.cart.title")}</h1>
            <div class="card bg-base-200">
                <div class="card-body items-center">
                    <p>{i18n.t("pages.cart.empty")}</p>
                </div>
            </div>
        </div>
    }
}
