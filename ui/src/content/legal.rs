//! Privacy policy and terms of service share one layout: titled,
//! collapsible sections under a hero.

use serde::Deserialize;

use super::{text, Bundle};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawLegal {
    title: Option<String>,
    subtitle: Option<String>,
    sections: Option<Vec<RawSection>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSection {
    id: Option<u32>,
    title: Option<String>,
    content: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegalSection {
    pub id: u32,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegalContent {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<LegalSection>,
}

impl RawLegal {
    fn resolve(self, title: &str, subtitle: &str) -> LegalContent {
        LegalContent {
            title: text(self.title, title),
            subtitle: text(self.subtitle, subtitle),
            sections: self
                .sections
                .unwrap_or_default()
                .into_iter()
                .zip(1..)
                .map(|(section, position)| LegalSection {
                    id: section.id.unwrap_or(position),
                    title: text(section.title, "Section"),
                    content: text(section.content, "Content"),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct PrivacyPage(RawLegal);

#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct TermsPage(RawLegal);

impl Bundle for PrivacyPage {
    const PAGE: &'static str = "privacy";
    type Content = LegalContent;

    fn resolve(self) -> LegalContent {
        self.0
            .resolve("Privacy Policy", "Our commitment to protecting your data")
    }
}

impl Bundle for TermsPage {
    const PAGE: &'static str = "terms";
    type Content = LegalContent;

    fn resolve(self) -> LegalContent {
        self.0
            .resolve("Terms of Service", "Our terms for using the platform")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_page_keeps_its_own_defaults() {
        assert_eq!(PrivacyPage::default().resolve().title, "Privacy Policy");
        assert_eq!(TermsPage::default().resolve().title, "Terms of Service");
    }

    #[test]
    fn section_ids_fall_back_to_position() {
        let raw: TermsPage = serde_json::from_str(
            r#"{"sections":[{"title":"Use"},{"id":9,"content":"{websiteName} rules"}]}"#,
        )
        .unwrap();
        let terms = raw.resolve();
        assert_eq!(terms.sections[0].id, 1);
        assert_eq!(terms.sections[0].content, "Content");
        assert_eq!(terms.sections[1].id, 9);
        assert_eq!(terms.sections[1].content, "OPENATLAS rules");
    }
}
