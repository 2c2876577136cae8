use api::{ApiError, NewEntry};
use tracing::{debug, warn};

/// How long a success or failure notice stays on screen.
pub const NOTICE_TTL_MS: u64 = 4_000;

/// Raw field values of the submission form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    pub title: String,
    pub description: String,
    /// Comma-separated tags as typed.
    pub tags: String,
}

impl SubmissionForm {
    /// Request body for the current field values.
    pub fn payload(&self) -> NewEntry {
        NewEntry {
            title: self.title.clone(),
            description: self.description.clone(),
            tags: parse_tags(&self.tags),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Split on commas and trim each segment. An empty string yields no tags;
/// empty segments are kept (`"a,,b"` → `["a", "", "b"]`).
pub fn parse_tags(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeOutcome {
    Saved,
    /// No service address configured; nothing was sent.
    MissingConfig,
    Failed(String),
}

/// A transient banner reporting the last submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub outcome: NoticeOutcome,
    pub shown_at_ms: f64,
}

impl Notice {
    pub fn is_success(&self) -> bool {
        self.outcome == NoticeOutcome::Saved
    }

    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms - self.shown_at_ms >= NOTICE_TTL_MS as f64
    }
}

/// Form values plus the busy flag and the current notice.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub form: SubmissionForm,
    busy: bool,
    notice: Option<Notice>,
    notices_issued: u64,
}

impl Submission {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Start a submission: returns the payload to send, or `None` while a
    /// previous request is still in flight. Clears any displayed notice.
    pub fn begin(&mut self) -> Option<NewEntry> {
        if self.busy {
            debug!("submission already in flight");
            return None;
        }
        self.busy = true;
        self.notice = None;
        Some(self.form.payload())
    }

    /// Record the outcome of the request started by [`Submission::begin`].
    /// Returns the id of the notice now showing, for [`Submission::dismiss`].
    pub fn complete<T>(&mut self, result: Result<T, ApiError>, now_ms: f64) -> u64 {
        self.busy = false;
        let outcome = match result {
            Ok(_) => {
                self.form.clear();
                NoticeOutcome::Saved
            }
            Err(ApiError::MissingBaseUrl) => {
                warn!("submission attempted without a configured data service");
                NoticeOutcome::MissingConfig
            }
            Err(err) => NoticeOutcome::Failed(err.to_string()),
        };

        self.notices_issued += 1;
        self.notice = Some(Notice {
            id: self.notices_issued,
            outcome,
            shown_at_ms: now_ms,
        });
        self.notices_issued
    }

    /// Notice to display at `now_ms`; expired notices are hidden.
    pub fn notice(&self, now_ms: f64) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|notice| !notice.is_expired(now_ms))
    }

    /// Drop the notice with `id`. A newer notice is left alone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.notice.as_ref().is_some_and(|notice| notice.id == id) {
            self.notice = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use api::{ApiConfig, DataClient, RawResponse, Transport};
    use futures::executor::block_on;
    use serde::Serialize;

    use super::*;

    /// Counts requests and answers every one with a fixed response.
    struct CannedTransport {
        reply: RawResponse,
        requests: Cell<usize>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                reply: RawResponse::new(status, body),
                requests: Cell::new(0),
            }
        }
    }

    impl Transport for CannedTransport {
        async fn get(&self, _url: &str) -> Result<RawResponse, ApiError> {
            self.requests.set(self.requests.get() + 1);
            Ok(self.reply.clone())
        }

        async fn post_json<B>(&self, _url: &str, _body: &B) -> Result<RawResponse, ApiError>
        where
            B: Serialize + ?Sized,
        {
            self.requests.set(self.requests.get() + 1);
            Ok(self.reply.clone())
        }
    }

    fn filled() -> Submission {
        Submission {
            form: SubmissionForm {
                title: "Survey A".into(),
                description: "A test survey".into(),
                tags: "pottery, bronze age".into(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn tags_are_split_and_trimmed() {
        assert_eq!(parse_tags("pottery, bronze age"), ["pottery", "bronze age"]);
        assert_eq!(parse_tags(" kiln "), ["kiln"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn empty_tag_segments_are_kept() {
        assert_eq!(parse_tags("a,,b"), ["a", "", "b"]);
        assert_eq!(parse_tags("   "), [""]);
    }

    #[test]
    fn payload_matches_the_form() {
        assert_eq!(
            filled().form.payload(),
            NewEntry {
                title: "Survey A".into(),
                description: "A test survey".into(),
                tags: vec!["pottery".into(), "bronze age".into()],
            }
        );
    }

    #[test]
    fn success_clears_form_and_notice_expires_after_four_seconds() {
        let client = DataClient::new(
            ApiConfig::with_base_url("https://api.openatlas.test"),
            CannedTransport::new(201, r#"{"id":"abc"}"#),
        );
        let mut submission = filled();

        let payload = submission.begin().expect("idle form starts");
        assert!(submission.is_busy());
        let result = block_on(client.create_entry(&payload));
        submission.complete(result, 10_000.0);

        assert!(!submission.is_busy());
        assert_eq!(submission.form, SubmissionForm::default());
        let notice = submission.notice(10_000.0).expect("notice showing");
        assert!(notice.is_success());
        assert!(submission.notice(13_999.0).is_some());
        assert!(submission.notice(14_000.0).is_none());
        assert_eq!(client.transport().requests.get(), 1);
    }

    #[test]
    fn missing_config_reports_and_sends_nothing() {
        let client = DataClient::new(ApiConfig::unconfigured(), CannedTransport::new(201, "{}"));
        let mut submission = filled();

        let payload = submission.begin().unwrap();
        let result = block_on(client.create_entry(&payload));
        submission.complete(result, 0.0);

        assert_eq!(
            submission.notice(0.0).map(|n| &n.outcome),
            Some(&NoticeOutcome::MissingConfig)
        );
        assert_eq!(client.transport().requests.get(), 0);
        assert_eq!(submission.form.title, "Survey A", "form kept on failure");
    }

    #[test]
    fn service_message_is_shown_verbatim() {
        let client = DataClient::new(
            ApiConfig::with_base_url("https://api.openatlas.test"),
            CannedTransport::new(400, r#"{"message":"description too short"}"#),
        );
        let mut submission = filled();
        let payload = submission.begin().unwrap();
        submission.complete(block_on(client.create_entry(&payload)), 0.0);

        assert_eq!(
            submission.notice(0.0).map(|n| n.outcome.clone()),
            Some(NoticeOutcome::Failed("description too short".into()))
        );
    }

    #[test]
    fn busy_form_refuses_a_second_submission() {
        let mut submission = filled();
        assert!(submission.begin().is_some());
        assert!(submission.begin().is_none());
        submission.complete(Ok(()), 0.0);
        assert!(submission.begin().is_some());
    }

    #[test]
    fn new_attempt_clears_the_current_notice() {
        let mut submission = filled();
        submission.begin();
        submission.complete::<()>(Err(ApiError::Transport("offline".into())), 0.0);
        assert!(submission.notice(1.0).is_some());

        submission.begin();
        assert!(submission.notice(1.0).is_none());
    }

    #[test]
    fn stale_dismiss_leaves_newer_notice() {
        let mut submission = filled();
        submission.begin();
        let first = submission.complete::<()>(Err(ApiError::Status { status: 503 }), 0.0);
        submission.begin();
        let second = submission.complete(Ok(()), 2_000.0);

        assert!(!submission.dismiss(first));
        assert_eq!(submission.notice(2_000.0).map(|n| n.id), Some(second));
        assert!(submission.dismiss(second));
        assert!(submission.notice(2_000.0).is_none());
    }
}
