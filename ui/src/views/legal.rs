use dioxus::prelude::*;

use crate::content::{self, LegalContent, PrivacyPage, TermsPage};
use crate::i18n::use_language;
use crate::t;

#[component]
pub fn Privacy() -> Element {
    let lang = use_language();
    rsx! {
        LegalDocument { page: "privacy", content: content::load::<PrivacyPage>(lang) }
    }
}

#[component]
pub fn Terms() -> Element {
    let lang = use_language();
    rsx! {
        LegalDocument { page: "terms", content: content::load::<TermsPage>(lang) }
    }
}

/// Hero, table of contents and collapsible sections.
#[component]
fn LegalDocument(page: &'static str, content: LegalContent) -> Element {
    let lang = use_language();
    let mut expanded = use_signal(|| Option::<u32>::None);

    rsx! {
        section { class: "page page-legal page-{page}",
            div { class: "page-hero",
                h1 { "{content.title}" }
                p { "{content.subtitle}" }
            }

            nav { class: "legal-toc", aria_label: t!(lang, "legal-contents"),
                h2 { {t!(lang, "legal-contents")} }
                ol {
                    for section in content.sections.iter() {
                        {
                            let id = section.id;
                            rsx! {
                                li { key: "{id}",
                                    a {
                                        href: "#section-{id}",
                                        onclick: move |_| expanded.set(Some(id)),
                                        "{section.title}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "accordion",
                for section in content.sections.iter() {
                    {
                        let id = section.id;
                        let open = expanded() == Some(id);
                        rsx! {
                            div { key: "{id}", id: "section-{id}", class: "accordion__item",
                                button {
                                    class: "accordion__toggle",
                                    r#type: "button",
                                    aria_expanded: "{open}",
                                    aria_controls: "section-content-{id}",
                                    onclick: move |_| expanded.set(if open { None } else { Some(id) }),
                                    "{section.title}"
                                }
                                if open {
                                    p { id: "section-content-{id}", class: "accordion__body", "{section.content}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
