use dioxus::prelude::*;
use ui::Hero;

#[component]
pub fn Home() -> Element {
    let lang = ui::use_lang()();
    rsx! {
        Hero {}
        div { class: "panel fade-in",
            h2 { {ui::t(lang, "translator.title")} }
            p { class: "hint", {ui::t(lang, "home.subtitle")} }
            div { class: "cta_row",
                a { class: "btn primary", href: "/translator", {ui::t(lang, "home.cta.translator")} }
            }
        }
    }
}
