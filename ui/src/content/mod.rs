//! Localized page copy.
//!
//! Each page has one JSON bundle per language under `content/<code>/`,
//! embedded at compile time. A bundle deserializes into an all-optional
//! raw form ([`Bundle`]) which `resolve` turns into a fully populated
//! record: hard-coded defaults for anything missing, site placeholders
//! substituted. Views only ever see resolved records.
//!
//! Lookup order for a page in language `L`:
//! 1. `content/L/<page>.json`
//! 2. `content/en/<page>.json` if (1) is missing or malformed
//! 3. an empty raw bundle (every field defaulted)

use rust_embed::Embed;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::i18n::Language;

mod about;
mod blog;
mod data_pages;
mod faqs;
mod footer;
mod home;
mod legal;
pub mod site;
mod team;

pub use about::{AboutContent, AboutPage, Feature};
pub use blog::{filter_posts, BlogContent, BlogPage, BlogPost, BLOG_PAGE_SIZE};
pub use data_pages::{DataPage, DataPageContent, FilterLabels, SearchPage, SearchPageContent};
pub use faqs::{Faq, FaqsContent, FaqsPage};
pub use footer::{FooterContent, FooterLink, FooterPage, FooterSection, SocialLink};
pub use home::{CtaLink, HomeContent, HomePage, TextSection};
pub use legal::{LegalContent, LegalSection, PrivacyPage, TermsPage};
pub use team::{Member, TeamContent, TeamPage};

#[derive(Embed)]
#[folder = "content"]
struct Bundles;

/// Raw (all-optional) form of one page's bundle.
pub trait Bundle: DeserializeOwned + Default {
    /// File stem under `content/<code>/`.
    const PAGE: &'static str;

    type Content;

    /// Apply defaults and placeholder substitution.
    fn resolve(self) -> Self::Content;
}

/// Resolved content of page `B` in `lang`.
pub fn load<B: Bundle>(lang: Language) -> B::Content {
    raw_bundle::<B>(lang)
        .or_else(|| {
            if lang == Language::En {
                None
            } else {
                raw_bundle::<B>(Language::En)
            }
        })
        .unwrap_or_default()
        .resolve()
}

/// Parse `content/<code>/<page>.json`, if present and well-formed.
pub fn raw_bundle<B: Bundle>(lang: Language) -> Option<B> {
    let path = bundle_path(lang, B::PAGE);
    let file = Bundles::get(&path)?;
    match serde_json::from_slice(&file.data) {
        Ok(bundle) => Some(bundle),
        Err(err) => {
            warn!(%path, error = %err, "malformed content bundle; falling back");
            None
        }
    }
}

/// Whether a bundle file exists for `lang` (regardless of validity).
pub fn has_bundle(lang: Language, page: &str) -> bool {
    Bundles::get(&bundle_path(lang, page)).is_some()
}

fn bundle_path(lang: Language, page: &str) -> String {
    format!("{}/{}.json", lang.code(), page)
}

/// Resolve an optional string: default when absent, site name substituted.
pub(crate) fn text(value: Option<String>, default: &str) -> String {
    site::fill(value.as_deref().unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_every_page() {
        let pages = [
            AboutPage::PAGE,
            BlogPage::PAGE,
            DataPage::PAGE,
            FaqsPage::PAGE,
            FooterPage::PAGE,
            HomePage::PAGE,
            PrivacyPage::PAGE,
            SearchPage::PAGE,
            TeamPage::PAGE,
            TermsPage::PAGE,
        ];
        for lang in Language::ALL {
            for page in pages {
                assert!(has_bundle(lang, page), "missing {lang}/{page}.json");
            }
        }
    }

    #[test]
    fn every_bundle_parses() {
        for lang in Language::ALL {
            assert!(raw_bundle::<HomePage>(lang).is_some(), "{lang}/home");
            assert!(raw_bundle::<AboutPage>(lang).is_some(), "{lang}/about");
            assert!(raw_bundle::<TeamPage>(lang).is_some(), "{lang}/team");
            assert!(raw_bundle::<FaqsPage>(lang).is_some(), "{lang}/faqs");
            assert!(raw_bundle::<BlogPage>(lang).is_some(), "{lang}/blogs");
            assert!(raw_bundle::<PrivacyPage>(lang).is_some(), "{lang}/privacy");
            assert!(raw_bundle::<TermsPage>(lang).is_some(), "{lang}/terms");
            assert!(raw_bundle::<DataPage>(lang).is_some(), "{lang}/data");
            assert!(raw_bundle::<SearchPage>(lang).is_some(), "{lang}/search");
            assert!(raw_bundle::<FooterPage>(lang).is_some(), "{lang}/footer");
        }
    }

    #[test]
    fn placeholders_never_survive_resolution() {
        for lang in Language::ALL {
            let about = load::<AboutPage>(lang);
            assert!(!about.title.contains('{'), "{lang}: {}", about.title);
            let faqs = load::<FaqsPage>(lang);
            for faq in &faqs.items {
                assert!(!faq.answer.contains("{websiteName}"), "{lang}: {}", faq.answer);
            }
        }
    }

    #[test]
    fn translated_bundles_differ_from_english() {
        let en = load::<DataPage>(Language::En);
        let ja = load::<DataPage>(Language::Ja);
        assert_ne!(en.title, ja.title);
    }
}
