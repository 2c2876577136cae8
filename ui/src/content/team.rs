use serde::Deserialize;

use super::{text, Bundle};

/// Grey silhouette used when a member has no portrait.
const PLACEHOLDER_AVATAR: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 64 64'><rect width='64' height='64' fill='%23d9ded9'/><circle cx='32' cy='24' r='12' fill='%23f6f7f4'/><rect x='14' y='40' width='36' height='20' rx='10' fill='%23f6f7f4'/></svg>";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TeamPage {
    title: Option<String>,
    subtitle: Option<String>,
    introduction: Option<RawIntro>,
    members: Option<Vec<RawMember>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawIntro {
    title: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMember {
    id: Option<u32>,
    name: Option<String>,
    role: Option<String>,
    bio: Option<String>,
    image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamContent {
    pub title: String,
    pub subtitle: String,
    pub intro_title: String,
    pub intro_description: String,
    pub members: Vec<Member>,
}

impl Bundle for TeamPage {
    const PAGE: &'static str = "team";
    type Content = TeamContent;

    fn resolve(self) -> TeamContent {
        let intro = self.introduction.unwrap_or_default();
        TeamContent {
            title: text(self.title, "Meet Our Team"),
            subtitle: text(
                self.subtitle,
                "The minds behind our archaeological data platform",
            ),
            intro_title: text(intro.title, "Who We Are"),
            intro_description: text(
                intro.description,
                "A global team dedicated to open research.",
            ),
            members: self
                .members
                .unwrap_or_default()
                .into_iter()
                .zip(1..)
                .map(|(member, position)| Member {
                    id: member.id.unwrap_or(position),
                    name: text(member.name, "Team Member"),
                    role: text(member.role, "Role"),
                    bio: text(member.bio, "Bio"),
                    image: member
                        .image
                        .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string()),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_without_image_get_the_placeholder() {
        let raw: TeamPage =
            serde_json::from_str(r#"{"members":[{"name":"Ana"},{"id":7,"image":"/a.jpg"}]}"#)
                .unwrap();
        let team = raw.resolve();
        assert_eq!(team.members[0].image, PLACEHOLDER_AVATAR);
        assert_eq!(team.members[0].id, 1);
        assert_eq!(team.members[1].id, 7);
        assert_eq!(team.members[1].name, "Team Member");
    }
}
