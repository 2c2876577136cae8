use dioxus::prelude::*;

use crate::components::app_navbar::{nav_link, NavTarget};
use crate::content::{self, AboutPage};
use crate::i18n::use_language;

#[component]
pub fn About() -> Element {
    let lang = use_language();
    let about = content::load::<AboutPage>(lang);

    rsx! {
        section { class: "page page-about",
            div { class: "page-hero",
                h1 { "{about.title}" }
                p { "{about.subtitle}" }
            }

            div { class: "page-block",
                h2 { "{about.mission_title}" }
                p { "{about.mission_description}" }
            }

            div { class: "page-block",
                h2 { "{about.features_title}" }
                div { class: "card-grid",
                    for feature in about.features.iter() {
                        article { key: "{feature.id}", class: "card",
                            h3 { class: "card__title", "{feature.title}" }
                            p { "{feature.description}" }
                        }
                    }
                }
            }

            div { class: "page-block page-block--accent",
                h2 { "{about.team_title}" }
                p { "{about.team_description}" }
                {nav_link(NavTarget::Team, &NavTarget::Team.label(lang))}
            }
        }
    }
}
