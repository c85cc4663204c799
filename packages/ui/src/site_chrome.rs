use dioxus::prelude::*;

use crate::fragments::{
    load_fragments, localize, FragmentState, HttpFragmentSource, LoadedFragments, PageHooks,
};
use crate::language_menu::{DropdownEvent, DropdownState, LanguageMenu};

/// Page frame: fetched header, routed content, fetched footer.
///
/// Hooks come from a `PageHooks` context when the app provides one. Either
/// fragment may be missing; the content renders regardless.
#[component]
pub fn SiteChrome(current_path: String, children: Element) -> Element {
    let lang = crate::use_lang()();
    let hooks = try_use_context::<PageHooks>().unwrap_or_default();
    let mut dropdown = use_signal(DropdownState::default);
    use_context_provider(|| dropdown);

    let fragments = use_resource({
        let hooks = hooks.clone();
        move || {
            let hooks = hooks.clone();
            async move {
                let source = HttpFragmentSource::for_current_origin();
                load_fragments(&source, &hooks).await
            }
        }
    });

    let loaded = fragments().unwrap_or_else(LoadedFragments::default);

    rsx! {
        div {
            class: "site_root",
            onclick: move |_| {
                let (next, _) = dropdown().on(DropdownEvent::OutsideClick);
                if next != dropdown() {
                    dropdown.set(next);
                }
            },

            match &loaded.header {
                FragmentState::Fulfilled(bound) => rsx! {
                    header { class: "site_header",
                        div {
                            class: "site_header_inner",
                            dangerous_inner_html: bound.render(&current_path, lang),
                        }
                        LanguageMenu {
                            options: bound.language_options.clone(),
                            hooks: hooks.clone(),
                        }
                    }
                },
                FragmentState::Pending | FragmentState::Rejected(_) => rsx! {},
            }

            main { class: "site_main", {children} }

            if let FragmentState::Fulfilled(markup) = &loaded.footer {
                footer {
                    class: "site_footer",
                    dangerous_inner_html: localize(markup, lang),
                }
            }
        }
    }
}
