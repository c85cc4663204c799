use dioxus::logger::tracing;
use dioxus::prelude::*;
use std::env;
use std::rc::Rc;

use views::{About, Contact, Home, Translator};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/translator")]
    Translator {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    #[cfg(feature = "server")]
    init_tracing();
    log_runtime_config();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Dioxus may already have a subscriber installed; keep whichever came first.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let mode = env::var("APP_MODE").unwrap_or_else(|_| "<unset>".to_string());

    tracing::info!("startup: IP={ip} PORT={port} APP_MODE={mode}");

    if mode.to_lowercase() != "local" {
        log_missing_envs("translator", &["OPENAI_API_KEY"]);
    }
}

fn log_missing_envs(group: &str, keys: &[&str]) {
    let missing: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|key| env::var(key).map(|v| v.trim().is_empty()).unwrap_or(true))
        .collect();
    if missing.is_empty() {
        return;
    }

    tracing::warn!("startup: missing {group} envs: {}", missing.join(", "));
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SiteTheme {}
        ui::I18nProvider {
            Router::<Route> {}
        }
    }
}

/// Wraps every route in the fetched header/footer and hands the fragment
/// loader this app's language hooks.
#[component]
fn SiteLayout() -> Element {
    let lang = ui::use_lang();
    use_context_provider(|| ui::PageHooks {
        translate_page: Some(Rc::new(move || ui::restore_lang(lang))),
        set_language: Some(Rc::new(move |code: &str| {
            match ui::Lang::from_code(code) {
                Some(next) => ui::set_lang(lang, next),
                None => tracing::warn!("ignoring unsupported language option {code:?}"),
            }
        })),
    });

    let current_path = use_route::<Route>().to_string();

    rsx! {
        ui::SiteChrome { current_path,
            Outlet::<Route> {}
        }
    }
}
