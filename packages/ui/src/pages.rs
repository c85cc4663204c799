use dioxus::prelude::*;

/// Static text page keyed into the site dictionary as `{prefix}.title` / `{prefix}.body`.
#[component]
fn TextPage(prefix: &'static str) -> Element {
    let lang = crate::use_lang()();
    rsx! {
        div { class: "page panel",
            h1 { {crate::t(lang, &format!("{prefix}.title"))} }
            p { {crate::t(lang, &format!("{prefix}.body"))} }
        }
    }
}

#[component]
pub fn AboutPage() -> Element {
    rsx! { TextPage { prefix: "about" } }
}

#[component]
pub fn ContactPage() -> Element {
    rsx! { TextPage { prefix: "contact" } }
}
