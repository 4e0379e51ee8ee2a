use crate::components::member_bar::MemberBar;
use crate::containers::nav_bar::NavBar;
use i18nrs::yew::use_translation;
use web_sys::window;
use yew::{Children, Html, Properties, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Page shell: declares document metadata, mounts the navigation region,
/// and wraps the routed content.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();

    // The shell owns the document title and the description/viewport metas
    let title = i18n.t("app.title");
    let description = i18n.t("app.description");
    use_effect_with((title, description), |(title, description)| {
        apply_document_metadata(title, description);
        || {}
    });

    html! {
        <>
            <header>
                <div class="border-b border-base-300 bg-base-100">
                    <NavBar />
                    <MemberBar />
                </div>
            </header>
            <main class="min-h-screen bg-base-100 p-4">
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{i18n.t("footer.copyright")}</p>
                </div>
            </footer>
        </>
    }
}

/// Sets the title and ensures the description and viewport meta tags exist.
/// Tolerates a missing window so server-side rendering stays a no-op.
fn apply_document_metadata(title: &str, description: &str) {
    let Some(document) = window().and_then(|window| window.document()) else {
        return;
    };
    document.set_title(title);
    upsert_meta(&document, "description", description);
    upsert_meta(&document, "viewport", "width=device-width, initial-scale=1");
}

fn upsert_meta(document: &web_sys::Document, name: &str, content: &str) {
    let selector = format!("meta[name='{name}']");
    let element = match document.query_selector(&selector).ok().flatten() {
        Some(element) => element,
        None => {
            let Ok(element) = document.create_element("meta") else {
                return;
            };
            element.set_attribute("name", name).unwrap_or_default();
            if let Some(head) = document.head() {
                let _ = head.append_child(&element);
            }
            element
        }
    };
    element.set_attribute("content", content).unwrap_or_default();
}
