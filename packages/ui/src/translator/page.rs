use dioxus::logger::tracing;
use dioxus::prelude::*;

use api::types::{MAX_TEXT_CHARS, SUPPORTED_LANGUAGES};

use super::{EmptyInput, TranslatorForm};

const TRANSLATOR_CSS: Asset = asset!("/assets/styling/translator.css");

#[component]
pub fn TranslatorPage() -> Element {
    let lang = crate::use_lang()();
    let mut form = use_signal(TranslatorForm::default);

    let input_ph = crate::t(lang, "translator.input_ph");
    let output_ph = crate::t(lang, "translator.output_ph");

    let on_translate = move |_| {
        let request = form.write().begin_translate();
        match request {
            Err(EmptyInput) => alert(crate::t(lang, "translator.empty_alert")),
            Ok(req) => {
                spawn(async move {
                    let result =
                        api::translation(req.text, req.source_language, req.target_language).await;
                    form.write().finish_translate(result);
                });
            }
        }
    };

    let state = form();

    rsx! {
        document::Link { rel: "stylesheet", href: TRANSLATOR_CSS }

        div { class: "page translator",
            h1 { {crate::t(lang, "translator.title")} }

            div { class: "translator_langs",
                label {
                    span { class: "hint", {crate::t(lang, "translator.source")} }
                    select {
                        value: "{state.source_language}",
                        onchange: move |e| form.write().source_language = e.value(),
                        for (code, name) in SUPPORTED_LANGUAGES.iter() {
                            option { key: "{code}", value: "{code}", selected: *code == state.source_language, "{name}" }
                        }
                    }
                }
                button {
                    class: "btn swap_btn",
                    title: crate::t(lang, "translator.swap"),
                    onclick: move |_| form.write().swap(),
                    "⇄"
                }
                label {
                    span { class: "hint", {crate::t(lang, "translator.target")} }
                    select {
                        value: "{state.target_language}",
                        onchange: move |e| form.write().target_language = e.value(),
                        for (code, name) in SUPPORTED_LANGUAGES.iter() {
                            option { key: "{code}", value: "{code}", selected: *code == state.target_language, "{name}" }
                        }
                    }
                }
            }

            div { class: "translator_panes",
                div { class: "pane",
                    textarea {
                        id: "inputText",
                        value: "{state.input}",
                        maxlength: "{MAX_TEXT_CHARS}",
                        placeholder: "{input_ph}",
                        rows: 10,
                        oninput: move |e| form.write().set_input(e.value()),
                    }
                    span { id: "inputCounter", class: "counter", "{state.input_counter()}" }
                }
                div { class: "pane",
                    textarea {
                        id: "outputText",
                        value: "{state.output}",
                        placeholder: "{output_ph}",
                        rows: 10,
                        oninput: move |e| form.write().set_output(e.value()),
                    }
                    span { id: "outputCounter", class: "counter", "{state.output_counter()}" }
                }
            }

            div { class: "cta_row",
                button {
                    id: "translateBtn",
                    class: "btn primary",
                    onclick: on_translate,
                    {crate::t(lang, "translator.translate")}
                }
                button {
                    id: "clearBtn",
                    class: "btn",
                    onclick: move |_| form.write().clear(),
                    {crate::t(lang, "translator.clear")}
                }
                if state.loading {
                    span { id: "loading", class: "loading", {crate::t(lang, "common.loading")} }
                }
            }
        }
    }
}

/// Blocking browser alert.
fn alert(message: String) {
    spawn(async move {
        if let Err(e) = document::eval(&alert_script(&message)).await {
            tracing::warn!("alert failed, message not shown: {e}");
        }
    });
}

fn alert_script(message: &str) -> String {
    format!("alert({message:?}); return '';")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_script_quotes_message() {
        assert_eq!(
            alert_script(r#"Say "hi""#),
            r#"alert("Say \"hi\""); return '';"#
        );
    }
}
