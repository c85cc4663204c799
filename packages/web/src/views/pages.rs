use dioxus::prelude::*;

#[component]
pub fn Translator() -> Element {
    rsx! { ui::TranslatorPage {} }
}

#[component]
pub fn About() -> Element {
    rsx! { ui::AboutPage {} }
}

#[component]
pub fn Contact() -> Element {
    rsx! { ui::ContactPage {} }
}
