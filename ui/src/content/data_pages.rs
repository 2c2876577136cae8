use serde::Deserialize;

use super::{text, Bundle};
use crate::data::FilterCriterion;

/// Copy for the refined data listing page.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataPage {
    title: Option<String>,
    subtitle: Option<String>,
    search_placeholder: Option<String>,
    filters: Option<RawFilters>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFilters {
    all: Option<String>,
    verified: Option<String>,
    popular: Option<String>,
    recent: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterLabels {
    pub all: String,
    pub verified: String,
    pub popular: String,
    pub recent: String,
}

impl FilterLabels {
    pub fn label(&self, criterion: FilterCriterion) -> &str {
        match criterion {
            FilterCriterion::All => &self.all,
            FilterCriterion::Verified => &self.verified,
            FilterCriterion::Popular => &self.popular,
            FilterCriterion::Recent => &self.recent,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataPageContent {
    pub title: String,
    pub subtitle: String,
    pub search_placeholder: String,
    pub filters: FilterLabels,
}

impl Bundle for DataPage {
    const PAGE: &'static str = "data";
    type Content = DataPageContent;

    fn resolve(self) -> DataPageContent {
        let filters = self.filters.unwrap_or_default();
        DataPageContent {
            title: text(self.title, "Refined Data Repository"),
            subtitle: text(
                self.subtitle,
                "Verified archaeological and historical datasets",
            ),
            search_placeholder: text(self.search_placeholder, "Search datasets..."),
            filters: FilterLabels {
                all: text(filters.all, "All Data"),
                verified: text(filters.verified, "Verified"),
                popular: text(filters.popular, "Popular"),
                recent: text(filters.recent, "Recent"),
            },
        }
    }
}

/// Copy for the data submission page.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchPage {
    add_data_title: Option<String>,
    form_fields: Option<RawFormFields>,
    submit_data: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFormFields {
    title: Option<String>,
    description: Option<String>,
    tags: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchPageContent {
    pub add_data_title: String,
    pub title_label: String,
    pub description_label: String,
    pub tags_label: String,
    pub submit: String,
}

impl Bundle for SearchPage {
    const PAGE: &'static str = "search";
    type Content = SearchPageContent;

    fn resolve(self) -> SearchPageContent {
        let fields = self.form_fields.unwrap_or_default();
        SearchPageContent {
            add_data_title: text(self.add_data_title, "Add New Data Entry"),
            title_label: text(fields.title, "Data Title"),
            description_label: text(fields.description, "Data Description"),
            tags_label: text(fields.tags, "Tags (comma-separated)"),
            submit: text(self.submit_data, "Submit Data"),
        }
    }
}
