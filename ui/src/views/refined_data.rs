use api::{DataClient, DataEntry};
use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::content::{self, DataPage};
use crate::core::format::{format_count, format_entry_date};
use crate::data::{FilterCriterion, Listing, Presentation};
use crate::i18n::{use_language, Language};
use crate::t;

#[component]
pub fn RefinedData() -> Element {
    let lang = use_language();
    let page = content::load::<DataPage>(lang);
    let client = use_hook(DataClient::from_env);
    let mut listing = use_signal(Listing::default);

    // Fetch the full collection; search and filter never refetch.
    let load = move || {
        let client = client.clone();
        let token = listing.write().begin_load();
        spawn(async move {
            let result = client.list_entries().await;
            listing.write().finish_load(token, result);
        });
    };
    let mut initial = load.clone();
    use_effect(move || initial());
    let mut refresh = load;

    let state = listing.read();
    let active = state.filter();
    let loading = state.is_loading();
    let presentation = state.presentation(OffsetDateTime::now_utc());

    rsx! {
        section { class: "page page-data",
            div { class: "page-hero",
                h1 { "{page.title}" }
                p { "{page.subtitle}" }
            }

            div { class: "data-toolbar",
                input {
                    class: "data-toolbar__search",
                    r#type: "search",
                    placeholder: "{page.search_placeholder}",
                    aria_label: t!(lang, "listing-search-label"),
                    value: "{state.query()}",
                    oninput: move |evt: FormEvent| listing.write().set_search_query(evt.value()),
                }
                div { class: "data-toolbar__filters", role: "tablist",
                    for criterion in FilterCriterion::ALL {
                        button {
                            key: "{criterion.id()}",
                            class: tab_class(criterion == active),
                            r#type: "button",
                            role: "tab",
                            aria_selected: "{criterion == active}",
                            onclick: move |_| listing.write().set_filter(criterion),
                            "{page.filters.label(criterion)}"
                        }
                    }
                }
                button {
                    class: "button button--ghost",
                    r#type: "button",
                    disabled: loading,
                    onclick: move |_| refresh(),
                    {t!(lang, "listing-refresh")}
                }
            }

            {match presentation {
                Presentation::Loading => rsx! {
                    p { class: "data-status data-status--loading", {t!(lang, "listing-loading")} }
                },
                Presentation::Failed(message) => rsx! {
                    p { class: "data-status data-status--error", role: "alert",
                        {t!(lang, "listing-error", message = message)}
                    }
                },
                Presentation::Empty => rsx! {
                    p { class: "data-status", {t!(lang, "listing-no-results")} }
                },
                Presentation::Entries(entries) => rsx! {
                    p { class: "data-count", {t!(lang, "listing-count", count = entries.len())} }
                    div { class: "card-grid",
                        for entry in entries.iter().copied() {
                            EntryCard { key: "{entry.id}", entry: entry.clone(), lang }
                        }
                    }
                },
            }}
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "filter-tab filter-tab--active"
    } else {
        "filter-tab"
    }
}

#[component]
fn EntryCard(entry: DataEntry, lang: Language) -> Element {
    let downloads = format_count(entry.download_count());

    rsx! {
        article { class: "card data-card",
            header { class: "data-card__header",
                h2 { class: "card__title", "{entry.title}" }
                if entry.is_verified() {
                    span { class: "badge badge--verified", {t!(lang, "listing-verified-badge")} }
                }
            }
            p { "{entry.description}" }
            if !entry.tags.is_empty() {
                ul { class: "data-card__tags",
                    for tag in entry.tags.iter() {
                        li { class: "tag", "#{tag}" }
                    }
                }
            }
            div { class: "card__meta",
                if let Some(name) = entry.contributor.as_deref() {
                    span { {t!(lang, "listing-contributor", name = name)} }
                }
                if let Some(date) = entry.date.as_deref() {
                    span { "{format_entry_date(date)}" }
                }
                if entry.downloads.is_some() {
                    span { {t!(lang, "listing-downloads", count = downloads.as_str())} }
                }
            }
        }
    }
}
