use dioxus::prelude::*;

use crate::content::{self, FaqsPage};
use crate::i18n::use_language;
use crate::t;

#[component]
pub fn Faqs() -> Element {
    let lang = use_language();
    let faqs = content::load::<FaqsPage>(lang);
    // One answer open at a time.
    let mut expanded = use_signal(|| Option::<u32>::None);

    rsx! {
        section { class: "page page-faqs",
            div { class: "page-hero",
                h1 { "{faqs.title}" }
                p { "{faqs.subtitle}" }
            }

            if faqs.items.is_empty() {
                p { class: "page-empty", {t!(lang, "faqs-empty")} }
            }

            div { class: "accordion",
                for faq in faqs.items.iter() {
                    {
                        let id = faq.id;
                        let open = expanded() == Some(id);
                        let item_class = if open {
                            "accordion__item accordion__item--open"
                        } else {
                            "accordion__item"
                        };
                        rsx! {
                            div { key: "{id}", class: item_class,
                                button {
                                    class: "accordion__toggle",
                                    r#type: "button",
                                    aria_expanded: "{open}",
                                    aria_controls: "faq-answer-{id}",
                                    onclick: move |_| expanded.set(if open { None } else { Some(id) }),
                                    "{faq.question}"
                                }
                                if open {
                                    p { id: "faq-answer-{id}", class: "accordion__body", "{faq.answer}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
