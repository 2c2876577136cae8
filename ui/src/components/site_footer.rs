use dioxus::prelude::*;

use super::app_navbar::{nav_link, NavTarget};
use crate::content::{self, site, FooterLink, FooterPage};
use crate::i18n::use_language;
use crate::t;

fn footer_link(link: &FooterLink) -> Element {
    match NavTarget::from_path(&link.path) {
        Some(target) if !link.is_external() => nav_link(target, &link.label),
        _ => rsx! {
            a { class: "site-footer__link", href: "{link.path}", "{link.label}" }
        },
    }
}

#[component]
pub fn SiteFooter() -> Element {
    let lang = use_language();
    let footer = content::load::<FooterPage>(lang);
    let (name, mail) = (site::NAME, site::MAIL);

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__grid",
                div { class: "site-footer__sections",
                    for section in footer.sections.iter() {
                        div { key: "{section.title}", class: "site-footer__section",
                            h3 { "{section.title}" }
                            ul {
                                for link in section.links.iter() {
                                    li { key: "{link.path}", {footer_link(link)} }
                                }
                            }
                        }
                    }
                }

                div { class: "site-footer__brand",
                    span { class: "site-footer__name", aria_label: "{footer.logo_alt}", "{name}" }
                    p { class: "site-footer__slogan", "{footer.slogan}" }
                    p { class: "site-footer__contact",
                        span { {t!(lang, "footer-contact")} ": " }
                        a { href: "mailto:{mail}", "{mail}" }
                    }
                    if !footer.social.is_empty() {
                        p { class: "site-footer__social",
                            span { {t!(lang, "footer-follow")} ": " }
                            for social in footer.social.iter() {
                                a { key: "{social.name}", class: "site-footer__link", href: "{social.href}", "{social.name}" }
                            }
                        }
                    }
                }
            }
            p { class: "site-footer__copyright", "{footer.copyright}" }
        }
    }
}
