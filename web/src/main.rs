use dioxus::prelude::*;

use ui::components::{register_nav, AppNavbar, NavBuilder, NavTarget, SiteFooter};
use ui::i18n::use_language_provider;
use ui::views::{About, Blog, Faqs, Home, Privacy, RefinedData, SearchData, Team, Terms};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/teams")]
    Team {},
    #[route("/faqs")]
    Faqs {},
    #[route("/blogs")]
    Blog {},
    #[route("/refine-findings")]
    RefinedData {},
    #[route("/searchdata")]
    SearchData {},
    #[route("/privacy")]
    Privacy {},
    #[route("/terms")]
    Terms {},
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Route::Home {},
            NavTarget::About => Route::About {},
            NavTarget::Team => Route::Team {},
            NavTarget::Faqs => Route::Faqs {},
            NavTarget::Blog => Route::Blog {},
            NavTarget::RefinedData => Route::RefinedData {},
            NavTarget::AddData => Route::SearchData {},
            NavTarget::Privacy => Route::Privacy {},
            NavTarget::Terms => Route::Terms {},
        }
    }
}

fn nav_link(target: NavTarget, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "active",
        to: Route::from(target),
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder { link: nav_link });
    use_language_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Header and footer around every routed page.
#[component]
fn WebLayout() -> Element {
    rsx! {
        AppNavbar {}
        main { Outlet::<Route> {} }
        SiteFooter {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_match_navigation_paths() {
        for target in NavTarget::ALL {
            assert_eq!(Route::from(target).to_string(), target.path(), "{target:?}");
        }
    }

    #[test]
    fn every_path_parses_back_to_its_route() {
        for target in NavTarget::ALL {
            let parsed: Route = target.path().parse().expect("known path parses");
            assert_eq!(parsed, Route::from(target));
        }
    }
}
