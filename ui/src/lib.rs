//! Shared UI crate for the OpenAtlas site: localization, page content, the
//! data listing and submission state, and every routed view.

pub mod content;
pub mod core;
pub mod data;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized header with language switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::{nav_link, register_nav, AppNavbar, NavBuilder, NavTarget};

    // Localized footer (components/site_footer.rs)
    mod site_footer;
    pub use site_footer::SiteFooter;
}

use dioxus::prelude::manganis;

/// Shared stylesheet for every page.
pub const THEME_CSS: dioxus::prelude::Asset = dioxus::prelude::asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
