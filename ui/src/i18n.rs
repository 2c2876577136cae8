//! Internationalization (i18n) support for `openatlas-ui`.
//!
//! Two layers share one [`Language`]:
//! - UI chrome (nav labels, buttons, status lines) comes from Fluent files
//!   under `i18n/<locale>/openatlas-ui.ftl`, looked up with [`t!`].
//! - Page copy comes from the structured JSON bundles in [`crate::content`].
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/openatlas-ui.ftl   (fallback/reference)
//!   es-ES/openatlas-ui.ftl
//!   ja-JP/openatlas-ui.ftl
//!   zh-CN/openatlas-ui.ftl
//! ```
//!
//! Every language gets its own immutable loader, built lazily on first
//! use. Switching language never mutates a loader; the active language is
//! a [`LanguageContext`] provided at the app root, written only by the
//! navbar switcher and read by every view.
//!
//! Usage in a component:
//! ```ignore
//! let lang = use_language();
//! let home_label = t!(lang, "nav-home");
//! ```
use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

use crate::core::storage;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!(lang, "nav-home")
///     t!(lang, "listing-count", count = 3)
///
/// Expands to `fl!` against the loader of `lang`.
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "openatlas-ui";

const FALLBACK_LOCALE: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Languages the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
    Zh,
    Es,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Ja, Language::Zh, Language::Es];

    /// Short code used for content bundles and session persistence.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
            Language::Zh => "zh",
            Language::Es => "es",
        }
    }

    /// Fluent locale folder backing this language.
    pub fn locale(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Ja => "ja-JP",
            Language::Zh => "zh-CN",
            Language::Es => "es-ES",
        }
    }

    /// Name shown in the language switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ja => "日本語",
            Language::Zh => "中文",
            Language::Es => "Español",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// First requested identifier whose primary language we publish.
    pub fn negotiate(requested: &[LanguageIdentifier]) -> Option<Self> {
        requested
            .iter()
            .find_map(|id| Self::from_code(id.language.as_str()))
    }

    /// Initial language: session choice, then platform preference, then English.
    pub fn detect() -> Self {
        if let Some(saved) = storage::load_language().and_then(|code| Self::from_code(&code)) {
            return saved;
        }
        Self::negotiate(&requested_languages()).unwrap_or_default()
    }

    fn index(self) -> usize {
        self as usize
    }

    fn identifier(self) -> LanguageIdentifier {
        self.locale()
            .parse()
            .expect("built-in locale tags are valid language identifiers")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim()).ok_or_else(|| format!("unsupported language code `{s}`"))
    }
}

static LOADERS: Lazy<[FluentLanguageLoader; 4]> = Lazy::new(|| Language::ALL.map(build_loader));

fn build_loader(lang: Language) -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = FALLBACK_LOCALE
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    match i18n_embed::select(&loader, &Localizations, &[lang.identifier()]) {
        Ok(selected) => debug!(lang = %lang, ?selected, "loaded Fluent bundle"),
        Err(err) => warn!(lang = %lang, error = %err, "failed selecting language; using fallback"),
    }
    loader
}

/// Loader for one language (used by [`t!`]).
pub fn loader(lang: Language) -> &'static FluentLanguageLoader {
    &LOADERS[lang.index()]
}

/// List available (embedded) locale folders.
pub fn available_locales() -> Vec<String> {
    let mut locales = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    locales.sort();
    locales.dedup();
    locales
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

/// Active-language handle shared through the Dioxus context.
///
/// Views read it with [`use_language`]. Only the navbar switcher writes
/// it, through [`LanguageContext::select`].
#[derive(Clone, Copy, PartialEq)]
pub struct LanguageContext {
    current: Signal<Language>,
}

impl LanguageContext {
    pub fn new(current: Signal<Language>) -> Self {
        Self { current }
    }

    pub fn get(&self) -> Language {
        (self.current)()
    }

    pub(crate) fn select(&mut self, lang: Language) {
        if *self.current.peek() == lang {
            return;
        }
        debug!(lang = %lang, "language switched");
        storage::save_language(lang.code());
        self.current.set(lang);
    }
}

/// Install the language context at the app root.
pub fn use_language_provider() -> LanguageContext {
    let current = use_signal(Language::detect);
    use_context_provider(|| LanguageContext::new(current))
}

/// Active language for the calling component (English outside a provider).
pub fn use_language() -> Language {
    try_use_context::<LanguageContext>()
        .map(|ctx| ctx.get())
        .unwrap_or_default()
}
