use dioxus::prelude::*;

use crate::content::{self, TeamPage};
use crate::i18n::use_language;
use crate::t;

#[component]
pub fn Team() -> Element {
    let lang = use_language();
    let team = content::load::<TeamPage>(lang);
    // Bio shown for the hovered or focused card.
    let mut revealed = use_signal(|| Option::<u32>::None);

    rsx! {
        section { class: "page page-team",
            div { class: "page-hero",
                h1 { "{team.title}" }
                p { "{team.subtitle}" }
            }

            div { class: "page-block",
                h2 { "{team.intro_title}" }
                p { "{team.intro_description}" }
            }

            if team.members.is_empty() {
                p { class: "page-empty", {t!(lang, "team-empty")} }
            }

            div { class: "card-grid",
                for member in team.members.iter() {
                    {
                        let id = member.id;
                        rsx! {
                            article {
                                key: "{id}",
                                class: "card team-card",
                                tabindex: "0",
                                onmouseenter: move |_| revealed.set(Some(id)),
                                onmouseleave: move |_| revealed.set(None),
                                onfocusin: move |_| revealed.set(Some(id)),
                                onfocusout: move |_| revealed.set(None),
                                img { class: "team-card__image", src: "{member.image}", alt: "{member.name}", loading: "lazy" }
                                h3 { class: "card__title", "{member.name}" }
                                p { class: "team-card__role", "{member.role}" }
                                if revealed() == Some(id) {
                                    p { class: "team-card__bio", "{member.bio}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
