use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

/// Seller dashboard entry page.
#[function_component(SellerPage)]
pub fn seller_page() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{i18n.t("pages.seller.title")}</h1>
            <p>{i18n.t("pages.seller.blurb")}</p>
        </div>
    }
}
