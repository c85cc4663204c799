use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        div {
            id: "hero",
            class: "fade-in",
            h1 { {crate::t(lang, "home.title")} }
            p { {crate::t(lang, "home.subtitle")} }

            div { class: "cta_row",
                a { class: "btn primary", href: "/translator", {crate::t(lang, "home.cta.translator")} }
                a { class: "btn", href: "/about", {crate::t(lang, "home.cta.about")} }
            }
        }
    }
}
