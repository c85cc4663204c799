use dioxus::prelude::*;

use crate::fragments::{LanguageOption, PageHooks};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
    Toggle,
    OutsideClick,
    Select(String),
}

impl DropdownState {
    pub fn is_open(self) -> bool {
        self == DropdownState::Open
    }

    /// Next state plus the language code to dispatch, if any.
    pub fn on(self, event: DropdownEvent) -> (DropdownState, Option<String>) {
        match event {
            DropdownEvent::Toggle => match self {
                DropdownState::Closed => (DropdownState::Open, None),
                DropdownState::Open => (DropdownState::Closed, None),
            },
            DropdownEvent::OutsideClick => (DropdownState::Closed, None),
            DropdownEvent::Select(code) => (DropdownState::Closed, Some(code)),
        }
    }
}

/// Language dropdown built from the options bound out of the header fragment.
///
/// Clicks that reach the page root close it: the root dispatches
/// `OutsideClick` through the shared `Signal<DropdownState>`, and clicks inside
/// the selector stop propagation.
#[component]
pub fn LanguageMenu(options: Vec<LanguageOption>, hooks: PageHooks) -> Element {
    let mut state = use_context::<Signal<DropdownState>>();
    let lang = crate::use_lang()();

    if options.is_empty() {
        return rsx! {};
    }

    let current = options
        .iter()
        .find(|o| o.code == lang.code())
        .map(|o| o.code.to_uppercase())
        .unwrap_or_else(|| lang.code().to_uppercase());

    rsx! {
        div {
            class: if state().is_open() { "language-selector open" } else { "language-selector" },
            onclick: move |evt| evt.stop_propagation(),
            button {
                class: "language-current",
                "aria-haspopup": "listbox",
                "aria-expanded": "{state().is_open()}",
                title: crate::t(lang, "lang.label"),
                onclick: move |_| {
                    let (next, _) = state().on(DropdownEvent::Toggle);
                    state.set(next);
                },
                "{current}"
            }

            if state().is_open() {
                ul { class: "language-menu", role: "listbox",
                    for option in options.iter().cloned() {
                        li {
                            key: "{option.code}",
                            class: if option.code == lang.code() { "language-option selected" } else { "language-option" },
                            role: "option",
                            onclick: {
                                let hooks = hooks.clone();
                                let code = option.code.clone();
                                move |_| {
                                    let (next, dispatch) = state().on(DropdownEvent::Select(code.clone()));
                                    state.set(next);
                                    if let Some(code) = dispatch {
                                        hooks.set_language(&code);
                                    }
                                }
                            },
                            "{option.label}"
                        }
                    }
                }
            }
        }
    }
}
