use dioxus::prelude::*;

const STORAGE_KEY: &str = "site_lang";

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Ru,
    Kk,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ru => "ru",
            Lang::Kk => "kk",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            "ru" | "ru-ru" => Some(Lang::Ru),
            "kk" | "kk-kz" => Some(Lang::Kk),
            _ => None,
        }
    }
}

/// Provide `Signal<Lang>` to the component tree, defaulting to English.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let lang = use_signal(|| Lang::En);
    use_context_provider(|| lang);

    // Best-effort: load from localStorage or browser language after mount.
    use_effect(move || restore_lang(lang));

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    dioxus::logger::tracing::warn!("missing I18nProvider context, using local Lang::En signal");
    use_signal(|| Lang::En)
}

/// Re-read the saved (or browser) language and apply it. Cheap enough to run
/// after every fragment splice.
pub fn restore_lang(mut lang: Signal<Lang>) {
    spawn(async move {
        let js = format!(
            r#"
            (function(){{
              try {{
                const saved = localStorage.getItem("{STORAGE_KEY}");
                if(saved && typeof saved === "string" && saved.length > 0) return saved;
              }} catch(e) {{}}
              try {{ return (navigator.language || "en"); }} catch(e) {{}}
              return "en";
            }})()
            "#
        );
        if let Ok(v) = document::eval(&js).await {
            if let Some(next) = v.as_str().and_then(Lang::from_code) {
                if *lang.peek() != next {
                    lang.set(next);
                }
            }
        }
    });
}

/// Switch language and persist the choice.
pub fn set_lang(mut lang: Signal<Lang>, next: Lang) {
    lang.set(next);
    spawn(async move {
        let _ = document::eval(&format!(
            r#"(function(){{ try {{ localStorage.setItem("{STORAGE_KEY}","{}"); }} catch(e) {{}} return ""; }})()"#,
            next.code()
        ))
        .await;
    });
}

/// Translate a key for a given language. Falls back to English, then to the key.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Nav / common
        (Lang::En, "app.name") => "Lingva".to_string(),
        (Lang::En, "nav.home") => "Home".to_string(),
        (Lang::Ru, "nav.home") => "Главная".to_string(),
        (Lang::Kk, "nav.home") => "Басты бет".to_string(),
        (Lang::En, "nav.about") => "About".to_string(),
        (Lang::Ru, "nav.about") => "О нас".to_string(),
        (Lang::Kk, "nav.about") => "Біз туралы".to_string(),
        (Lang::En, "nav.translator") => "Translator".to_string(),
        (Lang::Ru, "nav.translator") => "Переводчик".to_string(),
        (Lang::Kk, "nav.translator") => "Аудармашы".to_string(),
        (Lang::En, "nav.contact") => "Contact".to_string(),
        (Lang::Ru, "nav.contact") => "Контакты".to_string(),
        (Lang::Kk, "nav.contact") => "Байланыс".to_string(),
        (Lang::En, "lang.label") => "Language".to_string(),
        (Lang::Ru, "lang.label") => "Язык".to_string(),
        (Lang::Kk, "lang.label") => "Тіл".to_string(),
        (Lang::En, "common.loading") => "Loading…".to_string(),
        (Lang::Ru, "common.loading") => "Загрузка…".to_string(),
        (Lang::Kk, "common.loading") => "Жүктелуде…".to_string(),

        // Footer
        (Lang::En, "footer.rights") => "All rights reserved.".to_string(),
        (Lang::Ru, "footer.rights") => "Все права защищены.".to_string(),
        (Lang::Kk, "footer.rights") => "Барлық құқықтар қорғалған.".to_string(),
        (Lang::En, "footer.tagline") => "Small tools for everyday work.".to_string(),
        (Lang::Ru, "footer.tagline") => "Небольшие инструменты для каждого дня.".to_string(),
        (Lang::Kk, "footer.tagline") => "Күнделікті жұмысқа арналған құралдар.".to_string(),

        // Home / hero
        (Lang::En, "home.title") => "Tools that get out of your way".to_string(),
        (Lang::Ru, "home.title") => "Инструменты, которые не мешают".to_string(),
        (Lang::Kk, "home.title") => "Кедергі келтірмейтін құралдар".to_string(),
        (Lang::En, "home.subtitle") => "Translate text between eight languages in one click.".to_string(),
        (Lang::Ru, "home.subtitle") => "Переводите текст между восемью языками в один клик.".to_string(),
        (Lang::Kk, "home.subtitle") => "Мәтінді сегіз тіл арасында бір басумен аударыңыз.".to_string(),
        (Lang::En, "home.cta.translator") => "Open the translator".to_string(),
        (Lang::Ru, "home.cta.translator") => "Открыть переводчик".to_string(),
        (Lang::Kk, "home.cta.translator") => "Аудармашыны ашу".to_string(),
        (Lang::En, "home.cta.about") => "Learn more".to_string(),
        (Lang::Ru, "home.cta.about") => "Подробнее".to_string(),
        (Lang::Kk, "home.cta.about") => "Толығырақ".to_string(),

        // About / contact
        (Lang::En, "about.title") => "About us".to_string(),
        (Lang::Ru, "about.title") => "О нас".to_string(),
        (Lang::Kk, "about.title") => "Біз туралы".to_string(),
        (Lang::En, "about.body") => "We build small, focused web tools. No accounts, no tracking, no clutter.".to_string(),
        (Lang::Ru, "about.body") => "Мы делаем небольшие веб-инструменты. Без аккаунтов, без слежки, без лишнего.".to_string(),
        (Lang::Kk, "about.body") => "Біз шағын веб-құралдар жасаймыз. Тіркелусіз, бақылаусыз, артық нәрсесіз.".to_string(),
        (Lang::En, "contact.title") => "Contact".to_string(),
        (Lang::Ru, "contact.title") => "Контакты".to_string(),
        (Lang::Kk, "contact.title") => "Байланыс".to_string(),
        (Lang::En, "contact.body") => "Questions or feedback? Write to hello@lingva.example.".to_string(),
        (Lang::Ru, "contact.body") => "Вопросы или отзывы? Пишите на hello@lingva.example.".to_string(),
        (Lang::Kk, "contact.body") => "Сұрақтар немесе пікірлер? hello@lingva.example мекенжайына жазыңыз.".to_string(),

        // Translator
        (Lang::En, "translator.title") => "Translator".to_string(),
        (Lang::Ru, "translator.title") => "Переводчик".to_string(),
        (Lang::Kk, "translator.title") => "Аудармашы".to_string(),
        (Lang::En, "translator.source") => "From".to_string(),
        (Lang::Ru, "translator.source") => "С".to_string(),
        (Lang::Kk, "translator.source") => "Қайдан".to_string(),
        (Lang::En, "translator.target") => "To".to_string(),
        (Lang::Ru, "translator.target") => "На".to_string(),
        (Lang::Kk, "translator.target") => "Қайда".to_string(),
        (Lang::En, "translator.swap") => "Swap".to_string(),
        (Lang::Ru, "translator.swap") => "Поменять".to_string(),
        (Lang::Kk, "translator.swap") => "Ауыстыру".to_string(),
        (Lang::En, "translator.clear") => "Clear".to_string(),
        (Lang::Ru, "translator.clear") => "Очистить".to_string(),
        (Lang::Kk, "translator.clear") => "Тазалау".to_string(),
        (Lang::En, "translator.translate") => "Translate".to_string(),
        (Lang::Ru, "translator.translate") => "Перевести".to_string(),
        (Lang::Kk, "translator.translate") => "Аудару".to_string(),
        (Lang::En, "translator.input_ph") => "Enter text to translate…".to_string(),
        (Lang::Ru, "translator.input_ph") => "Введите текст для перевода…".to_string(),
        (Lang::Kk, "translator.input_ph") => "Аударылатын мәтінді енгізіңіз…".to_string(),
        (Lang::En, "translator.output_ph") => "Translation".to_string(),
        (Lang::Ru, "translator.output_ph") => "Перевод".to_string(),
        (Lang::Kk, "translator.output_ph") => "Аударма".to_string(),
        (Lang::En, "translator.empty_alert") => "Please enter text to translate.".to_string(),
        (Lang::Ru, "translator.empty_alert") => "Введите текст для перевода.".to_string(),
        (Lang::Kk, "translator.empty_alert") => "Аударылатын мәтінді енгізіңіз.".to_string(),

        // Fallback: use English string if present, else show key.
        (Lang::Ru | Lang::Kk, k) => t(Lang::En, k),
        (Lang::En, _) => key.to_string(),
    }
}
