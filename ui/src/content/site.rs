//! Fixed site identity shared by every page.

pub const NAME: &str = "OPENATLAS";
pub const SLOGAN: &str = "Your AI-Powered Global Tax & Royalty Data Command Center";
pub const MAIL: &str = "experts@gmail.com";

const PLACEHOLDERS: [&str; 2] = ["{websiteName}", "{website.name}"];

/// Replace every site-name placeholder in `text`.
pub fn fill(text: &str) -> String {
    PLACEHOLDERS
        .iter()
        .fold(text.to_string(), |acc, placeholder| acc.replace(placeholder, NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_placeholder_spellings_are_replaced() {
        assert_eq!(
            fill("Welcome to {website.name}, {websiteName}!"),
            "Welcome to OPENATLAS, OPENATLAS!"
        );
        assert_eq!(fill("plain"), "plain");
    }
}
