use serde::Deserialize;

use super::{text, Bundle};

/// Posts revealed per "show more" step.
pub const BLOG_PAGE_SIZE: usize = 3;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BlogPage {
    title: Option<String>,
    subtitle: Option<String>,
    blogs: Option<Vec<RawPost>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPost {
    id: Option<u32>,
    title: Option<String>,
    excerpt: Option<String>,
    date: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogContent {
    pub title: String,
    pub subtitle: String,
    pub posts: Vec<BlogPost>,
}

impl Bundle for BlogPage {
    const PAGE: &'static str = "blogs";
    type Content = BlogContent;

    fn resolve(self) -> BlogContent {
        BlogContent {
            title: text(self.title, "Blog"),
            subtitle: text(
                self.subtitle,
                "Insights on archaeological data management",
            ),
            posts: self
                .blogs
                .unwrap_or_default()
                .into_iter()
                .zip(1..)
                .map(|(post, position)| BlogPost {
                    id: post.id.unwrap_or(position),
                    title: text(post.title, "Blog Post"),
                    excerpt: text(post.excerpt, "Excerpt"),
                    date: text(post.date, "Date"),
                    category: text(post.category, "Category"),
                })
                .collect(),
        }
    }
}

/// Posts whose title, excerpt or category contains `query`, ignoring case.
pub fn filter_posts<'a>(posts: &'a [BlogPost], query: &str) -> Vec<&'a BlogPost> {
    let needle = query.trim().to_lowercase();
    posts
        .iter()
        .filter(|post| {
            needle.is_empty()
                || [&post.title, &post.excerpt, &post.category]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u32, title: &str, category: &str) -> BlogPost {
        BlogPost {
            id,
            title: title.into(),
            excerpt: String::new(),
            date: "2024-01-01".into(),
            category: category.into(),
        }
    }

    #[test]
    fn search_covers_title_and_category() {
        let posts = vec![
            post(1, "Roman coins", "Numismatics"),
            post(2, "Field notes", "Excavation"),
            post(3, "Dating pottery", "excavation"),
        ];
        let ids = |q: &str| filter_posts(&posts, q).iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(""), vec![1, 2, 3]);
        assert_eq!(ids("COINS"), vec![1]);
        assert_eq!(ids("excavation"), vec![2, 3]);
        assert!(ids("bronze").is_empty());
    }

    #[test]
    fn missing_post_fields_are_labelled() {
        let raw: BlogPage = serde_json::from_str(r#"{"blogs":[{}]}"#).unwrap();
        let blog = raw.resolve();
        assert_eq!(blog.title, "Blog");
        assert_eq!(blog.posts[0].title, "Blog Post");
        assert_eq!(blog.posts[0].category, "Category");
    }
}
