use dioxus::prelude::*;

use crate::components::app_navbar::{nav_link, NavTarget};
use crate::content::{self, CtaLink, HomePage};
use crate::i18n::use_language;
use crate::t;

const HERO_IMAGE: &str = "https://openatlas.eu/static/images/layout/hero_image.jpg";
const SCHEMA_IMAGE: &str = "https://openatlas.eu/static/images/layout/openatlas_schema.png";
const MAP_IMAGE: &str = "https://openatlas.eu/static/images/layout/map.jpg";

const PARTNER_LOGOS: [&str; 4] = [
    "https://assets.tdar.org/images/logos/Mellon.png",
    "https://assets.tdar.org/images/logos/aia.png",
    "https://assets.tdar.org/images/logos/neh_logo_stckd.jpg",
    "https://assets.tdar.org/images/logos/asu_veritcal.png",
];

fn cta(link: &CtaLink) -> Element {
    match NavTarget::from_path(&link.to) {
        Some(target) => nav_link(target, &link.text),
        None => rsx! {
            a { class: "button button--primary", href: "{link.to}", "{link.text}" }
        },
    }
}

#[component]
pub fn Home() -> Element {
    let lang = use_language();
    let home = content::load::<HomePage>(lang);
    let [platform, model, banner, schema, map] = &home.sections;

    rsx! {
        section { class: "page page-home",
            div { class: "home-hero",
                div { class: "home-hero__copy",
                    h1 { "{home.hero.title}" }
                    p { "{home.hero.description}" }
                    div { class: "home-hero__actions",
                        for link in home.hero_links.iter() {
                            span { key: "{link.to}", class: "home-hero__action", {cta(link)} }
                        }
                    }
                }
                img { class: "home-hero__image", src: HERO_IMAGE, alt: "{home.hero.title}", loading: "lazy" }
            }

            div { class: "home-section",
                h2 { "{platform.title}" }
                p { "{platform.description}" }
            }
            div { class: "home-section home-section--alt",
                h2 { "{model.title}" }
                p { "{model.description}" }
            }
            div { class: "home-banner",
                h2 { "{banner.title}" }
                p { "{banner.description}" }
            }
            div { class: "home-section home-section--media",
                div {
                    h2 { "{schema.title}" }
                    p { class: "home-section__multiline", "{schema.description}" }
                }
                img { src: SCHEMA_IMAGE, alt: "{schema.title}", loading: "lazy" }
            }
            div { class: "home-section home-section--media",
                div {
                    h2 { "{map.title}" }
                    p { "{map.description}" }
                }
                img { src: MAP_IMAGE, alt: "{map.title}", loading: "lazy" }
            }

            div { class: "home-partners",
                h2 { "{home.partners_title}" }
                div { class: "home-partners__grid",
                    for (index, logo) in PARTNER_LOGOS.iter().enumerate() {
                        img {
                            key: "{logo}",
                            src: *logo,
                            alt: t!(lang, "home-partners-alt", index = (index + 1)),
                            loading: "lazy",
                        }
                    }
                }
            }
        }
    }
}
