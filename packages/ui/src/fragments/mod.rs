//! Shared header/footer fragments fetched at runtime and spliced into the page.

use std::rc::Rc;

use async_trait::async_trait;
use dioxus::logger::tracing;
use thiserror::Error;

mod markup;
pub use markup::{localize, HeaderBindings, LanguageOption, NavLink};

pub const HEADER_PATH: &str = "/components/header.html";
pub const FOOTER_PATH: &str = "/components/footer.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Header,
    Footer,
}

impl FragmentKind {
    pub fn path(self) -> &'static str {
        match self {
            FragmentKind::Header => HEADER_PATH,
            FragmentKind::Footer => FOOTER_PATH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    #[error("request for {path} failed: {message}")]
    Transport { path: String, message: String },
    #[error("{path} answered with status {status}")]
    Status { path: String, status: u16 },
}

/// `pending → fulfilled | rejected`, nothing else.
#[derive(Debug, Clone, PartialEq)]
pub enum FragmentState<T> {
    Pending,
    Fulfilled(T),
    Rejected(FragmentError),
}

impl<T> FragmentState<T> {
    pub fn fulfilled(&self) -> Option<&T> {
        match self {
            FragmentState::Fulfilled(value) => Some(value),
            _ => None,
        }
    }
}

/// Optional capabilities the page may provide. Empty slots are skipped.
#[derive(Clone, Default)]
pub struct PageHooks {
    /// Localize visible page text after a fragment was spliced in.
    pub translate_page: Option<Rc<dyn Fn()>>,
    /// Switch the site language; receives the selected option's code.
    pub set_language: Option<Rc<dyn Fn(&str)>>,
}

impl PageHooks {
    pub fn run_translation_pass(&self) {
        if let Some(hook) = &self.translate_page {
            hook();
        }
    }

    pub fn set_language(&self, code: &str) {
        if let Some(hook) = &self.set_language {
            hook(code);
        }
    }
}

impl PartialEq for PageHooks {
    fn eq(&self, other: &Self) -> bool {
        fn same<T: ?Sized>(a: &Option<Rc<T>>, b: &Option<Rc<T>>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
        }
        same(&self.translate_page, &other.translate_page)
            && same(&self.set_language, &other.set_language)
    }
}

impl std::fmt::Debug for PageHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageHooks")
            .field("translate_page", &self.translate_page.is_some())
            .field("set_language", &self.set_language.is_some())
            .finish()
    }
}

/// Where fragment markup comes from.
#[async_trait(?Send)]
pub trait FragmentSource {
    async fn fetch(&self, path: &str) -> Result<String, FragmentError>;
}

/// Fetches fragments from the site's own origin.
#[derive(Debug, Clone)]
pub struct HttpFragmentSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFragmentSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The browser's origin on the web, `SITE_BASE_URL` elsewhere.
    pub fn for_current_origin() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let origin = web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_default();
            Self::new(&origin)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let base = std::env::var("SITE_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
            Self::new(&base)
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait(?Send)]
impl FragmentSource for HttpFragmentSource {
    async fn fetch(&self, path: &str) -> Result<String, FragmentError> {
        let transport = |e: reqwest::Error| FragmentError::Transport {
            path: path.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(self.url(path)).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FragmentError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(transport)
    }
}

/// Result of one page-load pass over both fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedFragments {
    pub header: FragmentState<HeaderBindings>,
    pub footer: FragmentState<String>,
}

impl Default for LoadedFragments {
    fn default() -> Self {
        Self {
            header: FragmentState::Pending,
            footer: FragmentState::Pending,
        }
    }
}

/// Fetch header and footer concurrently and run each one's follow-up work as
/// soon as it lands. A failed fragment is logged and left out.
pub async fn load_fragments<S>(source: &S, hooks: &PageHooks) -> LoadedFragments
where
    S: FragmentSource + ?Sized,
{
    let header = async {
        match source.fetch(FragmentKind::Header.path()).await {
            Ok(markup) => {
                let bindings = HeaderBindings::bind(&markup);
                tracing::debug!(
                    "header fragment bound: {} nav links, {} language options",
                    bindings.nav_links.len(),
                    bindings.language_options.len()
                );
                hooks.run_translation_pass();
                FragmentState::Fulfilled(bindings)
            }
            Err(e) => {
                tracing::warn!("header fragment unavailable: {e}");
                FragmentState::Rejected(e)
            }
        }
    };

    let footer = async {
        match source.fetch(FragmentKind::Footer.path()).await {
            Ok(markup) => {
                hooks.run_translation_pass();
                FragmentState::Fulfilled(markup)
            }
            Err(e) => {
                tracing::warn!("footer fragment unavailable: {e}");
                FragmentState::Rejected(e)
            }
        }
    };

    let (header, footer) = futures_util::future::join(header, footer).await;
    tracing::info!(
        "fragments loaded: header={} footer={}",
        header.fulfilled().is_some(),
        footer.fulfilled().is_some()
    );

    LoadedFragments { header, footer }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    /// Serves canned bodies per path; unknown paths answer 404.
    struct StaticSource {
        pages: HashMap<&'static str, Result<String, FragmentError>>,
        requested: RefCell<Vec<String>>,
    }

    impl StaticSource {
        fn new(pages: Vec<(&'static str, Result<String, FragmentError>)>) -> Self {
            Self {
                pages: pages.into_iter().collect(),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl FragmentSource for StaticSource {
        async fn fetch(&self, path: &str) -> Result<String, FragmentError> {
            self.requested.borrow_mut().push(path.to_string());
            self.pages.get(path).cloned().unwrap_or(Err(FragmentError::Status {
                path: path.to_string(),
                status: 404,
            }))
        }
    }

    const HEADER: &str = r#"<a class="nav-link" href="/">Home</a><div class="language-selector"><span class="language-option" data-lang="ru">RU</span></div>"#;
    const FOOTER: &str = "<footer>bye</footer>";

    fn counting_hooks() -> (PageHooks, Rc<Cell<u32>>) {
        let passes = Rc::new(Cell::new(0));
        let counter = passes.clone();
        let hooks = PageHooks {
            translate_page: Some(Rc::new(move || counter.set(counter.get() + 1))),
            set_language: None,
        };
        (hooks, passes)
    }

    #[tokio::test]
    async fn both_fragments_load_and_trigger_translation_pass() {
        let source = StaticSource::new(vec![
            (HEADER_PATH, Ok(HEADER.to_string())),
            (FOOTER_PATH, Ok(FOOTER.to_string())),
        ]);
        let (hooks, passes) = counting_hooks();

        let loaded = load_fragments(&source, &hooks).await;

        let header = loaded.header.fulfilled().expect("header");
        assert_eq!(header.nav_links.len(), 1);
        assert_eq!(header.language_options[0].code, "ru");
        assert_eq!(loaded.footer, FragmentState::Fulfilled(FOOTER.to_string()));
        assert_eq!(passes.get(), 2);
        assert_eq!(source.requested.borrow().len(), 2);
    }

    #[tokio::test]
    async fn header_failure_does_not_block_footer() {
        let source = StaticSource::new(vec![(FOOTER_PATH, Ok(FOOTER.to_string()))]);
        let (hooks, passes) = counting_hooks();

        let loaded = load_fragments(&source, &hooks).await;

        assert_eq!(
            loaded.header,
            FragmentState::Rejected(FragmentError::Status {
                path: HEADER_PATH.to_string(),
                status: 404,
            })
        );
        assert_eq!(loaded.footer, FragmentState::Fulfilled(FOOTER.to_string()));
        assert_eq!(passes.get(), 1);
    }

    #[tokio::test]
    async fn transport_failures_degrade_silently() {
        let down = |path: &str| -> Result<String, FragmentError> {
            Err(FragmentError::Transport {
                path: path.to_string(),
                message: "connection refused".to_string(),
            })
        };
        let source = StaticSource::new(vec![
            (HEADER_PATH, down(HEADER_PATH)),
            (FOOTER_PATH, down(FOOTER_PATH)),
        ]);
        let (hooks, passes) = counting_hooks();

        let loaded = load_fragments(&source, &hooks).await;

        assert!(matches!(loaded.header, FragmentState::Rejected(_)));
        assert!(matches!(loaded.footer, FragmentState::Rejected(_)));
        assert_eq!(passes.get(), 0);
        // One attempt each, no retry.
        assert_eq!(source.requested.borrow().len(), 2);
    }

    #[tokio::test]
    async fn missing_hooks_are_skipped() {
        let source = StaticSource::new(vec![
            (HEADER_PATH, Ok(HEADER.to_string())),
            (FOOTER_PATH, Ok(FOOTER.to_string())),
        ]);
        let loaded = load_fragments(&source, &PageHooks::default()).await;
        assert!(loaded.header.fulfilled().is_some());
        assert!(loaded.footer.fulfilled().is_some());
    }

    #[test]
    fn set_language_hook_receives_code() {
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = seen.clone();
        let hooks = PageHooks {
            translate_page: None,
            set_language: Some(Rc::new(move |code: &str| sink.borrow_mut().push(code.to_string()))),
        };
        hooks.set_language("kk");
        PageHooks::default().set_language("en");
        assert_eq!(*seen.borrow(), vec!["kk".to_string()]);
    }

    #[test]
    fn hooks_compare_by_identity() {
        let pass: Rc<dyn Fn()> = Rc::new(|| {});
        let a = PageHooks {
            translate_page: Some(pass.clone()),
            set_language: None,
        };
        let b = PageHooks {
            translate_page: Some(pass),
            set_language: None,
        };
        assert_eq!(a, b);
        assert_ne!(a, PageHooks::default());
    }

    #[test]
    fn url_joins_origin_and_path() {
        let source = HttpFragmentSource::new("http://localhost:8080/");
        assert_eq!(
            source.url(HEADER_PATH),
            "http://localhost:8080/components/header.html"
        );
        assert_eq!(FragmentKind::Footer.path(), FOOTER_PATH);
    }
}
