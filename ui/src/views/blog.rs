use dioxus::prelude::*;

use crate::content::{self, filter_posts, BlogPage, BLOG_PAGE_SIZE};
use crate::i18n::use_language;
use crate::t;

#[component]
pub fn Blog() -> Element {
    let lang = use_language();
    let blog = content::load::<BlogPage>(lang);
    let mut query = use_signal(String::new);
    let mut visible = use_signal(|| BLOG_PAGE_SIZE);

    let matches = filter_posts(&blog.posts, &query());
    let shown = visible().min(matches.len());

    rsx! {
        section { class: "page page-blog",
            div { class: "page-hero",
                h1 { "{blog.title}" }
                p { "{blog.subtitle}" }
            }

            div { class: "search-bar",
                input {
                    r#type: "search",
                    placeholder: t!(lang, "blog-search-placeholder"),
                    aria_label: t!(lang, "blog-search-label"),
                    value: "{query}",
                    oninput: move |evt: FormEvent| {
                        query.set(evt.value());
                        visible.set(BLOG_PAGE_SIZE);
                    },
                }
            }

            div { class: "card-grid",
                for post in matches.iter().take(shown) {
                    article { key: "{post.id}", class: "card blog-card",
                        h2 { class: "card__title", "{post.title}" }
                        p { "{post.excerpt}" }
                        div { class: "card__meta",
                            span { "{post.date}" }
                            span { "{post.category}" }
                        }
                    }
                }
            }

            if shown < matches.len() {
                div { class: "page-actions",
                    button {
                        class: "button button--ghost",
                        r#type: "button",
                        onclick: move |_| visible.set(visible() + BLOG_PAGE_SIZE),
                        {t!(lang, "blog-show-more")}
                    }
                }
            }

            if matches.is_empty() {
                p { class: "page-empty", {t!(lang, "blog-no-results")} }
            }
        }
    }
}
