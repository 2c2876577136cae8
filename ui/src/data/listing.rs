use api::{ApiError, DataEntry};
use time::OffsetDateTime;
use tracing::{debug, warn};

use super::filter::{matches_search, FilterCriterion};

/// Identifies one list request. Only the most recently issued token may
/// change the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// What the listing page should render right now.
#[derive(Debug, PartialEq)]
pub enum Presentation<'a> {
    Loading,
    Failed(&'a str),
    /// The fetch succeeded but nothing passes the search and filter.
    Empty,
    Entries(Vec<&'a DataEntry>),
}

/// Entries from the last accepted fetch plus the active search and filter.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    entries: Vec<DataEntry>,
    state: LoadState,
    query: String,
    filter: FilterCriterion,
    issued: u64,
}

impl Listing {
    /// Enter the loading state and clear any previous error.
    pub fn begin_load(&mut self) -> RequestToken {
        self.issued += 1;
        self.state = LoadState::Loading;
        RequestToken(self.issued)
    }

    /// Apply the outcome of the request identified by `token`.
    ///
    /// Returns `false` (and changes nothing) when a newer request has been
    /// issued since. A failure empties the collection.
    pub fn finish_load(
        &mut self,
        token: RequestToken,
        result: Result<Vec<DataEntry>, ApiError>,
    ) -> bool {
        if token.0 != self.issued {
            debug!(
                token = token.0,
                latest = self.issued,
                "ignoring superseded list response"
            );
            return false;
        }

        match result {
            Ok(entries) => {
                self.entries = entries;
                self.state = LoadState::Ready;
            }
            Err(err) => {
                warn!(error = %err, "data listing failed");
                self.entries.clear();
                self.state = LoadState::Failed(err.to_string());
            }
        }
        true
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Idle | LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn entries(&self) -> &[DataEntry] {
        &self.entries
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> FilterCriterion {
        self.filter
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn set_filter(&mut self, criterion: FilterCriterion) {
        self.filter = criterion;
    }

    /// Entries passing both the search query and the active filter,
    /// in fetch order.
    pub fn visible_entries(&self, now: OffsetDateTime) -> Vec<&DataEntry> {
        self.entries
            .iter()
            .filter(|entry| matches_search(entry, &self.query))
            .filter(|entry| self.filter.matches(entry, now))
            .collect()
    }

    pub fn presentation(&self, now: OffsetDateTime) -> Presentation<'_> {
        match &self.state {
            LoadState::Idle | LoadState::Loading => Presentation::Loading,
            LoadState::Failed(message) => Presentation::Failed(message),
            LoadState::Ready => {
                let visible = self.visible_entries(now);
                if visible.is_empty() {
                    Presentation::Empty
                } else {
                    Presentation::Entries(visible)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    const NOW: OffsetDateTime = datetime!(2024-06-15 12:00 UTC);

    fn entry(id: &str, title: &str) -> DataEntry {
        DataEntry {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            contributor: None,
            date: None,
            tags: Vec::new(),
            downloads: None,
            verified: None,
        }
    }

    fn catalogue() -> Vec<DataEntry> {
        let mut hoard = entry("1", "Roman coin hoard");
        hoard.verified = Some(true);
        hoard.downloads = Some(340);
        hoard.date = Some("2024-06-01T09:00:00Z".into());
        hoard.tags = vec!["numismatics".into()];

        let mut tax = entry("2", "Ottoman tax registers");
        tax.description = "Defter transcriptions, coin values included".into();
        tax.downloads = Some(12);
        tax.date = Some("not-a-date".into());

        let mut kiln = entry("3", "Kiln survey");
        kiln.tags = vec!["pottery".into(), "Bronze Age".into()];
        kiln.date = Some("2023-01-01".into());

        vec![hoard, tax, kiln]
    }

    fn ready(entries: Vec<DataEntry>) -> Listing {
        let mut listing = Listing::default();
        let token = listing.begin_load();
        assert!(listing.finish_load(token, Ok(entries)));
        listing
    }

    fn ids<'a>(entries: &[&'a DataEntry]) -> Vec<&'a str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn fresh_listing_presents_as_loading() {
        let mut listing = Listing::default();
        assert_eq!(listing.presentation(NOW), Presentation::Loading);
        listing.begin_load();
        assert!(listing.is_loading());
        assert_eq!(listing.presentation(NOW), Presentation::Loading);
    }

    #[test]
    fn successful_load_replaces_the_collection() {
        let mut listing = ready(catalogue());
        assert_eq!(listing.entries().len(), 3);

        let token = listing.begin_load();
        listing.finish_load(token, Ok(vec![entry("9", "Only one")]));
        assert_eq!(ids(&listing.visible_entries(NOW)), ["9"]);
    }

    #[test]
    fn failure_empties_the_collection_and_reports() {
        let mut listing = ready(catalogue());
        let token = listing.begin_load();
        listing.finish_load(token, Err(ApiError::Status { status: 500 }));

        assert!(listing.entries().is_empty());
        assert_eq!(listing.error(), Some("Failed with 500"));
        assert_eq!(
            listing.presentation(NOW),
            Presentation::Failed("Failed with 500")
        );
    }

    #[test]
    fn new_load_clears_previous_error() {
        let mut listing = Listing::default();
        let token = listing.begin_load();
        listing.finish_load(token, Err(ApiError::Transport("offline".into())));
        assert!(listing.error().is_some());

        listing.begin_load();
        assert_eq!(listing.error(), None);
        assert_eq!(listing.state(), &LoadState::Loading);
    }

    #[test]
    fn search_and_filter_combine() {
        let mut listing = ready(catalogue());

        listing.set_search_query("COIN");
        assert_eq!(ids(&listing.visible_entries(NOW)), ["1", "2"]);

        listing.set_filter(FilterCriterion::Popular);
        assert_eq!(ids(&listing.visible_entries(NOW)), ["1"]);

        listing.set_search_query("");
        listing.set_filter(FilterCriterion::Verified);
        assert_eq!(ids(&listing.visible_entries(NOW)), ["1"]);

        listing.set_filter(FilterCriterion::Recent);
        assert_eq!(ids(&listing.visible_entries(NOW)), ["1"]);

        listing.set_filter(FilterCriterion::All);
        assert_eq!(ids(&listing.visible_entries(NOW)), ["1", "2", "3"]);
    }

    #[test]
    fn search_reaches_tags() {
        let mut listing = ready(catalogue());
        listing.set_search_query("bronze");
        assert_eq!(ids(&listing.visible_entries(NOW)), ["3"]);
    }

    #[test]
    fn no_match_is_distinct_from_loading_and_error() {
        let mut listing = ready(catalogue());
        listing.set_search_query("obsidian");
        assert_eq!(listing.presentation(NOW), Presentation::Empty);
        assert!(!listing.is_loading());
        assert_eq!(listing.error(), None);
    }

    #[test]
    fn empty_payload_presents_as_empty() {
        let listing = ready(Vec::new());
        assert_eq!(listing.presentation(NOW), Presentation::Empty);
    }

    #[test]
    fn reloading_the_same_payload_is_idempotent() {
        let mut listing = ready(catalogue());
        listing.set_search_query("o");
        let first: Vec<String> = listing
            .visible_entries(NOW)
            .iter()
            .map(|e| e.id.clone())
            .collect();

        let token = listing.begin_load();
        listing.finish_load(token, Ok(catalogue()));
        let second: Vec<String> = listing
            .visible_entries(NOW)
            .iter()
            .map(|e| e.id.clone())
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut listing = Listing::default();
        let a = listing.begin_load();
        let b = listing.begin_load();

        assert!(listing.finish_load(b, Ok(vec![entry("b", "From B")])));
        assert!(!listing.finish_load(a, Ok(vec![entry("a", "From A")])));

        assert_eq!(ids(&listing.visible_entries(NOW)), ["b"]);
        assert_eq!(listing.state(), &LoadState::Ready);
    }

    #[test]
    fn superseded_failure_does_not_clobber_fresh_data() {
        let mut listing = Listing::default();
        let a = listing.begin_load();
        let b = listing.begin_load();

        listing.finish_load(b, Ok(catalogue()));
        listing.finish_load(a, Err(ApiError::Transport("timed out".into())));

        assert_eq!(listing.error(), None);
        assert_eq!(listing.entries().len(), 3);
    }

    #[test]
    fn stale_response_while_newer_in_flight_keeps_loading() {
        let mut listing = Listing::default();
        let a = listing.begin_load();
        let _b = listing.begin_load();

        assert!(!listing.finish_load(a, Ok(catalogue())));
        assert!(listing.is_loading());
        assert!(listing.entries().is_empty());
    }
}
