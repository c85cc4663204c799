//! This crate contains all shared UI for the workspace.

mod hero;
pub use hero::Hero;

mod pages;
pub use pages::{AboutPage, ContactPage};

mod theme;
pub use theme::SiteTheme;

mod i18n;
pub use i18n::{restore_lang, set_lang, t, use_lang, I18nProvider, Lang};

pub mod nav;

pub mod fragments;
pub use fragments::PageHooks;

mod language_menu;
pub use language_menu::{DropdownEvent, DropdownState, LanguageMenu};

mod site_chrome;
pub use site_chrome::SiteChrome;

pub mod translator;
pub use translator::TranslatorPage;
