use api::DataClient;
use dioxus::prelude::*;

use crate::content::{self, SearchPage};
use crate::core::timing;
use crate::data::{NoticeOutcome, Submission, NOTICE_TTL_MS};
use crate::i18n::use_language;
use crate::t;

#[component]
pub fn SearchData() -> Element {
    let lang = use_language();
    let page = content::load::<SearchPage>(lang);
    let client = use_hook(DataClient::from_env);
    let mut submission = use_signal(Submission::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(payload) = submission.write().begin() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.create_entry(&payload).await;
            let notice = submission.write().complete(result, timing::now_ms());
            timing::sleep_ms(NOTICE_TTL_MS).await;
            submission.write().dismiss(notice);
        });
    };

    let state = submission.read();
    let busy = state.is_busy();
    let notice = state.notice(timing::now_ms()).cloned();

    rsx! {
        section { class: "page page-submit",
            h1 { "{page.add_data_title}" }

            if let Some(notice) = notice {
                div {
                    class: notice_class(notice.is_success()),
                    role: "status",
                    span {
                        {match &notice.outcome {
                            NoticeOutcome::Saved => t!(lang, "notice-saved"),
                            NoticeOutcome::MissingConfig => t!(lang, "notice-missing-config"),
                            NoticeOutcome::Failed(message) => message.clone(),
                        }}
                    }
                    button {
                        class: "notice__dismiss",
                        r#type: "button",
                        aria_label: t!(lang, "notice-dismiss"),
                        onclick: move |_| {
                            submission.write().dismiss(notice.id);
                        },
                        "×"
                    }
                }
            }

            form { class: "submit-form", onsubmit,
                label { class: "submit-form__field",
                    span { "{page.title_label}" }
                    input {
                        r#type: "text",
                        required: true,
                        value: "{state.form.title}",
                        oninput: move |evt: FormEvent| submission.write().form.title = evt.value(),
                    }
                }
                label { class: "submit-form__field",
                    span { "{page.description_label}" }
                    textarea {
                        required: true,
                        rows: "4",
                        value: "{state.form.description}",
                        oninput: move |evt: FormEvent| submission.write().form.description = evt.value(),
                    }
                }
                label { class: "submit-form__field",
                    span { "{page.tags_label}" }
                    input {
                        r#type: "text",
                        value: "{state.form.tags}",
                        oninput: move |evt: FormEvent| submission.write().form.tags = evt.value(),
                    }
                }
                button {
                    class: "button button--primary",
                    r#type: "submit",
                    disabled: busy,
                    if busy {
                        {t!(lang, "submit-saving")}
                    } else {
                        "{page.submit}"
                    }
                }
            }
        }
    }
}

fn notice_class(success: bool) -> &'static str {
    if success {
        "notice notice--success"
    } else {
        "notice notice--error"
    }
}
