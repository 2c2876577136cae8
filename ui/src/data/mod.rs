//! Client-side state for the two data pages.
//!
//! [`Listing`] backs the Refined Data page (fetch once, then search and
//! filter locally) and [`Submission`] backs the Search Data form. Both are
//! plain state machines; the views own them in signals and feed them the
//! results of [`api::DataClient`] calls.

pub mod filter;
mod listing;
mod submission;

pub use filter::FilterCriterion;
pub use listing::{Listing, LoadState, Presentation, RequestToken};
pub use submission::{parse_tags, Notice, NoticeOutcome, Submission, SubmissionForm, NOTICE_TTL_MS};
