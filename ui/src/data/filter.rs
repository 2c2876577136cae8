//! Search and filter predicates over [`DataEntry`] records.

use std::fmt;

use api::DataEntry;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Duration, Month, OffsetDateTime, PrimitiveDateTime};

/// Entries with strictly more downloads than this are "popular".
pub const POPULAR_MIN_DOWNLOADS: u64 = 100;

/// The closed set of filter tabs on the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterCriterion {
    #[default]
    All,
    Verified,
    Popular,
    Recent,
}

impl FilterCriterion {
    pub const ALL: [FilterCriterion; 4] = [
        FilterCriterion::All,
        FilterCriterion::Verified,
        FilterCriterion::Popular,
        FilterCriterion::Recent,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FilterCriterion::All => "all",
            FilterCriterion::Verified => "verified",
            FilterCriterion::Popular => "popular",
            FilterCriterion::Recent => "recent",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|criterion| criterion.id() == id)
    }

    /// Whether `entry` passes this filter at instant `now`.
    pub fn matches(self, entry: &DataEntry, now: OffsetDateTime) -> bool {
        match self {
            FilterCriterion::All => true,
            FilterCriterion::Verified => entry.is_verified(),
            FilterCriterion::Popular => entry.download_count() > POPULAR_MIN_DOWNLOADS,
            FilterCriterion::Recent => {
                let cutoff = one_month_before(now);
                entry
                    .date
                    .as_deref()
                    .and_then(parse_entry_date)
                    .is_some_and(|date| date > cutoff)
            }
        }
    }
}

impl fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Case-insensitive substring match against title, description or any tag.
/// An empty query matches everything.
pub fn matches_search(entry: &DataEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let hit = |text: &str| text.to_lowercase().contains(&needle);

    hit(&entry.title) || hit(&entry.description) || entry.tags.iter().any(|tag| hit(tag))
}

/// Parse an entry timestamp: RFC 3339, a zone-less `YYYY-MM-DDTHH:MM`
/// with optional seconds and fraction (read as UTC), or a bare `YYYY-MM-DD`
/// (UTC midnight).
pub fn parse_entry_date(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(stamp) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(stamp);
    }
    if let Ok(local) = PrimitiveDateTime::parse(
        raw,
        &format_description!(
            "[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
        ),
    ) {
        return Some(local.assume_utc());
    }
    Date::parse(raw, &format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|day| day.midnight().assume_utc())
}

/// Same wall-clock instant one calendar month earlier. The day is clamped
/// to the length of the previous month (31 March → 28/29 February).
pub fn one_month_before(now: OffsetDateTime) -> OffsetDateTime {
    let (year, month) = match now.month() {
        Month::January => (now.year() - 1, Month::December),
        other => (now.year(), other.previous()),
    };
    let day = now.day().min(time::util::days_in_year_month(year, month));
    Date::from_calendar_date(year, month, day)
        .map_or(now - Duration::days(30), |date| now.replace_date(date))
}
