use serde::Deserialize;

use super::{text, Bundle};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AboutPage {
    title: Option<String>,
    subtitle: Option<String>,
    mission: Option<RawBlock>,
    features: Option<RawFeatures>,
    team: Option<RawBlock>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawBlock {
    title: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFeatures {
    title: Option<String>,
    items: Option<Vec<RawFeature>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFeature {
    id: Option<u32>,
    title: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutContent {
    pub title: String,
    pub subtitle: String,
    pub mission_title: String,
    pub mission_description: String,
    pub features_title: String,
    pub features: Vec<Feature>,
    pub team_title: String,
    pub team_description: String,
}

impl Bundle for AboutPage {
    const PAGE: &'static str = "about";
    type Content = AboutContent;

    fn resolve(self) -> AboutContent {
        let mission = self.mission.unwrap_or_default();
        let features = self.features.unwrap_or_default();
        let team = self.team.unwrap_or_default();

        AboutContent {
            title: text(self.title, "About {websiteName}"),
            subtitle: text(
                self.subtitle,
                "Discover our mission to revolutionize archaeological research",
            ),
            mission_title: text(mission.title, "Our Mission"),
            mission_description: text(
                mission.description,
                "Empowering global research with open data.",
            ),
            features_title: text(features.title, "Why Choose Us"),
            features: features
                .items
                .unwrap_or_default()
                .into_iter()
                .zip(1..)
                .map(|(item, position)| Feature {
                    id: item.id.unwrap_or(position),
                    title: text(item.title, "Feature"),
                    description: text(item.description, "Description"),
                })
                .collect(),
            team_title: text(team.title, "Our Team"),
            team_description: text(
                team.description,
                "A dedicated team of researchers and developers.",
            ),
        }
    }
}
