use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::content::site;
use crate::i18n::{use_language, Language, LanguageContext};
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Every page reachable from the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    About,
    Team,
    Faqs,
    Blog,
    RefinedData,
    AddData,
    Privacy,
    Terms,
}

impl NavTarget {
    pub const ALL: [NavTarget; 9] = [
        NavTarget::Home,
        NavTarget::About,
        NavTarget::Team,
        NavTarget::Faqs,
        NavTarget::Blog,
        NavTarget::RefinedData,
        NavTarget::AddData,
        NavTarget::Privacy,
        NavTarget::Terms,
    ];

    /// Targets shown in the header; legal pages live in the footer.
    pub const HEADER: [NavTarget; 7] = [
        NavTarget::Home,
        NavTarget::About,
        NavTarget::Team,
        NavTarget::Faqs,
        NavTarget::Blog,
        NavTarget::RefinedData,
        NavTarget::AddData,
    ];

    pub fn path(self) -> &'static str {
        match self {
            NavTarget::Home => "/",
            NavTarget::About => "/about",
            NavTarget::Team => "/teams",
            NavTarget::Faqs => "/faqs",
            NavTarget::Blog => "/blogs",
            NavTarget::RefinedData => "/refine-findings",
            NavTarget::AddData => "/searchdata",
            NavTarget::Privacy => "/privacy",
            NavTarget::Terms => "/terms",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::ALL.into_iter().find(|target| target.path() == path)
    }

    pub fn label(self, lang: Language) -> String {
        match self {
            NavTarget::Home => t!(lang, "nav-home"),
            NavTarget::About => t!(lang, "nav-about"),
            NavTarget::Team => t!(lang, "nav-team"),
            NavTarget::Faqs => t!(lang, "nav-faqs"),
            NavTarget::Blog => t!(lang, "nav-blog"),
            NavTarget::RefinedData => t!(lang, "nav-refined-data"),
            NavTarget::AddData => t!(lang, "nav-add-data"),
            NavTarget::Privacy => t!(lang, "nav-privacy"),
            NavTarget::Terms => t!(lang, "nav-terms"),
        }
    }
}

/// Platform hook for building router links.
///
/// `ui` does not know the platform's `Route` enum, so the launcher registers
/// a builder that turns a [`NavTarget`] and its localized label into a
/// `Link`. Without one, plain anchors are rendered.
///
/// ```ignore
/// register_nav(NavBuilder {
///     link: |target, label| rsx!(Link { class: "navbar__link", to: Route::from(target), "{label}" }),
/// });
/// ```
pub struct NavBuilder {
    pub link: fn(target: NavTarget, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navigation builder already registered");
    }
}

/// Router link for `target`, or an anchor when no builder is registered.
pub fn nav_link(target: NavTarget, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(target, label),
        None => rsx! {
            a { class: "navbar__link", href: target.path(), "{label}" }
        },
    }
}

#[component]
pub fn AppNavbar() -> Element {
    let lang = use_language();
    let mut language = try_use_context::<LanguageContext>();
    let mut menu_open = use_signal(|| false);

    let on_change = move |evt: FormEvent| match evt.value().parse::<Language>() {
        Ok(choice) => {
            if let Some(ctx) = language.as_mut() {
                ctx.select(choice);
            }
        }
        Err(err) => tracing::warn!(error = %err, "ignored language selection"),
    };

    let links_class = if menu_open() {
        "navbar__links navbar__links--open"
    } else {
        "navbar__links"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    {nav_link(NavTarget::Home, site::NAME)}
                    span { class: "navbar__brand-subtitle", {t!(lang, "tagline")} }
                }

                button {
                    class: "navbar__toggle",
                    r#type: "button",
                    aria_expanded: "{menu_open()}",
                    onclick: move |_| menu_open.set(!menu_open()),
                    {t!(lang, "nav-menu-toggle")}
                }

                nav { class: "{links_class}",
                    for target in NavTarget::HEADER {
                        span { key: "{target.path()}", onclick: move |_| menu_open.set(false),
                            {nav_link(target, &target.label(lang))}
                        }
                    }
                }

                div { class: "navbar__locale",
                    label { class: "visually-hidden", r#for: "locale-select",
                        {t!(lang, "nav-language-label")}
                    }
                    select {
                        id: "locale-select",
                        value: "{lang.code()}",
                        oninput: on_change,
                        for choice in Language::ALL {
                            option {
                                key: "{choice.code()}",
                                value: "{choice.code()}",
                                selected: choice == lang,
                                "{choice.native_name()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
