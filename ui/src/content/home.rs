use serde::Deserialize;

use super::{text, Bundle};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HomePage {
    page1: Option<RawHero>,
    page2: Option<RawSection>,
    page3: Option<RawSection>,
    page4: Option<RawSection>,
    page5: Option<RawSection>,
    page6: Option<RawSection>,
    page7: Option<RawSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawHero {
    title: Option<String>,
    description: Option<String>,
    links: Option<Vec<RawLink>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSection {
    title: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawLink {
    text: Option<String>,
    to: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CtaLink {
    pub text: String,
    /// Site path such as `/about`; `#` when absent.
    pub to: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextSection {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeContent {
    pub hero: TextSection,
    pub hero_links: Vec<CtaLink>,
    /// Narrative sections shown between the hero and the partner grid:
    /// platform, data model, mission banner, schema, map.
    pub sections: [TextSection; 5],
    pub partners_title: String,
}

fn section(raw: Option<RawSection>) -> TextSection {
    let raw = raw.unwrap_or_default();
    TextSection {
        title: text(raw.title, ""),
        description: text(raw.description, ""),
    }
}

impl Bundle for HomePage {
    const PAGE: &'static str = "home";
    type Content = HomeContent;

    fn resolve(self) -> HomeContent {
        let hero = self.page1.unwrap_or_default();
        let hero_links = hero
            .links
            .unwrap_or_default()
            .into_iter()
            .map(|link| CtaLink {
                text: text(link.text, ""),
                to: link.to.unwrap_or_else(|| "#".to_string()),
            })
            .collect();

        HomeContent {
            hero: TextSection {
                title: text(hero.title, "{website.name}"),
                description: text(hero.description, ""),
            },
            hero_links,
            sections: [
                section(self.page2),
                section(self.page3),
                section(self.page4),
                section(self.page5),
                section(self.page6),
            ],
            partners_title: text(self.page7.and_then(|p| p.title), "Partners"),
        }
    }
}
