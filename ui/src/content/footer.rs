use serde::Deserialize;

use super::{site, text, Bundle};

/// Bundle value meaning "use the site's own profile link".
const SITE_DEFAULT_LINK: &str = "d";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterPage {
    brand: Option<RawBrand>,
    sections: Option<Vec<RawSection>>,
    social: Option<RawSocial>,
    copyright: Option<RawCopyright>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawBrand {
    name_alt: Option<String>,
    slogan: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSection {
    title: Option<String>,
    links: Option<Vec<RawLink>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawLink {
    path: Option<String>,
    label: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSocial {
    links: Option<Vec<RawSocialLink>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSocialLink {
    name: Option<String>,
    link: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCopyright {
    text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterLink {
    pub path: String,
    pub label: String,
}

impl FooterLink {
    pub fn is_external(&self) -> bool {
        !self.path.starts_with('/')
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterContent {
    pub logo_alt: String,
    pub slogan: String,
    pub sections: Vec<FooterSection>,
    pub social: Vec<SocialLink>,
    pub copyright: String,
}

impl Bundle for FooterPage {
    const PAGE: &'static str = "footer";
    type Content = FooterContent;

    fn resolve(self) -> FooterContent {
        let brand = self.brand.unwrap_or_default();
        let sections = self
            .sections
            .unwrap_or_default()
            .into_iter()
            .map(|section| FooterSection {
                title: text(section.title, ""),
                links: section
                    .links
                    .unwrap_or_default()
                    .into_iter()
                    .map(|link| FooterLink {
                        path: link.path.unwrap_or_else(|| "/".to_string()),
                        label: text(link.label, ""),
                    })
                    .collect(),
            })
            .collect();
        let social = self
            .social
            .and_then(|social| social.links)
            .unwrap_or_default()
            .into_iter()
            .map(|link| SocialLink {
                name: text(link.name, ""),
                href: match link.link.as_deref() {
                    None | Some("") | Some(SITE_DEFAULT_LINK) => "#".to_string(),
                    Some(href) => href.to_string(),
                },
            })
            .collect();

        FooterContent {
            logo_alt: text(brand.name_alt, "{websiteName} logo"),
            slogan: text(brand.slogan, site::SLOGAN),
            sections,
            social,
            copyright: text(
                self.copyright.and_then(|c| c.text),
                "© {websiteName}. All rights reserved.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_default_social_links_become_inert() {
        let raw: FooterPage = serde_json::from_str(
            r#"{"social":{"links":[{"name":"LinkedIn","link":"d"},{"name":"X","link":"https://x.com/openatlas"}]}}"#,
        )
        .unwrap();
        let footer = raw.resolve();
        assert_eq!(footer.social[0].href, "#");
        assert_eq!(footer.social[1].href, "https://x.com/openatlas");
    }

    #[test]
    fn internal_and_external_links_are_told_apart() {
        let internal = FooterLink {
            path: "/faqs".into(),
            label: "FAQs".into(),
        };
        let external = FooterLink {
            path: "https://example.org".into(),
            label: "Docs".into(),
        };
        assert!(!internal.is_external());
        assert!(external.is_external());
    }

    #[test]
    fn empty_footer_uses_site_identity() {
        let footer = FooterPage::default().resolve();
        assert_eq!(footer.slogan, site::SLOGAN);
        assert_eq!(footer.logo_alt, "OPENATLAS logo");
        assert!(footer.copyright.contains("OPENATLAS"));
    }
}
