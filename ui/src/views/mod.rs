//! Routed pages. Each view reads the active language and resolves its own
//! content bundle on render.

mod about;
mod blog;
mod faqs;
mod home;
mod legal;
mod refined_data;
mod search_data;
mod team;

pub use about::About;
pub use blog::Blog;
pub use faqs::Faqs;
pub use home::Home;
pub use legal::{Privacy, Terms};
pub use refined_data::RefinedData;
pub use search_data::SearchData;
pub use team::Team;
