use headline_core::Article;

const EDITOR_PREAMBLE: &str = "You are a professional news editor. Summarize the following news \
articles into a natural, engaging, and structured News Digest.

CRITICAL INSTRUCTIONS:
1. Group the news into logical categories (e.g., Politics, Technology, Sports, Business, etc.).
2. Each paragraph MUST start with a bold heading for that category, like this: **Category Name**.
3. Focus on the substantive themes.
4. The digest should be about 3-4 paragraphs long.

Articles:
";

/// Builds the editor prompt: fixed instructions followed by a numbered
/// `TITLE` / `DESCRIPTION` entry per article, separated by blank lines.
#[must_use]
pub fn build_digest_prompt(articles: &[Article]) -> String {
    let mut prompt = String::from(EDITOR_PREAMBLE);
    for (i, article) in articles.iter().enumerate() {
        if i > 0 {
            prompt.push_str("\n\n");
        }
        prompt.push_str(&format!(
            "{}. TITLE: {}\n   DESCRIPTION: {}",
            i + 1,
            article.title,
            article.description.as_deref().unwrap_or_default()
        ));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn article(title: &str, description: Option<&str>) -> Article {
        Article {
            title: title.to_string(),
            description: description.map(str::to_string),
            url: format!("https://example.com/{title}"),
            published_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            source: None,
            content: None,
        }
    }

    #[test]
    fn lists_articles_in_order_with_one_based_numbers() {
        let prompt = build_digest_prompt(&[
            article("Rates hold", Some("Central bank pauses")),
            article("Chip launch", None),
        ]);

        assert!(prompt.starts_with("You are a professional news editor."));
        assert!(prompt.contains("**Category Name**"));
        assert!(prompt.ends_with(
            "1. TITLE: Rates hold\n   DESCRIPTION: Central bank pauses\n\n\
             2. TITLE: Chip launch\n   DESCRIPTION: "
        ));
    }
}
