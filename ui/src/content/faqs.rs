use serde::Deserialize;

use super::{text, Bundle};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FaqsPage {
    title: Option<String>,
    subtitle: Option<String>,
    faqs: Option<Vec<RawFaq>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFaq {
    id: Option<u32>,
    question: Option<String>,
    answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub id: u32,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqsContent {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Faq>,
}

impl Bundle for FaqsPage {
    const PAGE: &'static str = "faqs";
    type Content = FaqsContent;

    fn resolve(self) -> FaqsContent {
        FaqsContent {
            title: text(self.title, "{websiteName} FAQs"),
            subtitle: text(
                self.subtitle,
                "Your guide to our archaeological data platform",
            ),
            items: self
                .faqs
                .unwrap_or_default()
                .into_iter()
                .zip(1..)
                .map(|(faq, position)| Faq {
                    id: faq.id.unwrap_or(position),
                    question: text(faq.question, "Question"),
                    answer: text(faq.answer, "Answer"),
                })
                .collect(),
        }
    }
}
