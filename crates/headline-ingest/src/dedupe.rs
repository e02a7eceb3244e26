//! Collapses articles sharing a `url` before they reach the store.

use std::collections::HashMap;

use headline_core::Article;

/// Returns exactly one article per distinct `url`.
///
/// Field values come from the last occurrence; output order is the order in
/// which each `url` was first seen. A single upsert statement may not touch
/// the same key twice, so this runs before every batch write.
#[must_use]
pub fn dedupe_by_url(articles: Vec<Article>) -> Vec<Article> {
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(articles.len());
    let mut unique: Vec<Article> = Vec::with_capacity(articles.len());

    for article in articles {
        if let Some(&slot) = slots.get(&article.url) {
            unique[slot] = article;
        } else {
            slots.insert(article.url.clone(), unique.len());
            unique.push(article);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use std::collections::HashSet;

    fn article(url: &str, title: &str, published_at: &str) -> Article {
        Article {
            title: title.to_string(),
            description: None,
            url: url.to_string(),
            published_at: DateTime::parse_from_rfc3339(published_at)
                .unwrap()
                .with_timezone(&Utc),
            source: None,
            content: None,
        }
    }

    #[test]
    fn last_occurrence_wins() {
        let deduped = dedupe_by_url(vec![
            article("x", "T1", "2026-01-01T00:00:00Z"),
            article("x", "T2", "2026-01-01T01:00:00Z"),
        ]);

        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].title, "T2");
        assert_eq!(deduped[0].published_at.to_rfc3339(), "2026-01-01T01:00:00+00:00");
    }

    #[test]
    fn order_follows_first_sighting() {
        let deduped = dedupe_by_url(vec![
            article("a", "A1", "2026-01-01T00:00:00Z"),
            article("b", "B1", "2026-01-01T00:00:00Z"),
            article("a", "A2", "2026-01-01T00:00:00Z"),
            article("c", "C1", "2026-01-01T00:00:00Z"),
            article("b", "B2", "2026-01-01T00:00:00Z"),
        ]);

        let titles: Vec<&str> = deduped.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["A2", "B2", "C1"]);
    }

    #[test]
    fn output_urls_are_unique_and_complete() {
        let input: Vec<Article> = (0..50)
            .map(|i| {
                article(
                    &format!("https://example.com/{}", i % 7),
                    &format!("T{i}"),
                    "2026-01-01T00:00:00Z",
                )
            })
            .collect();
        let distinct: HashSet<String> = input.iter().map(|a| a.url.clone()).collect();

        let deduped = dedupe_by_url(input.clone());
        let urls: HashSet<&str> = deduped.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(urls.len(), deduped.len());
        assert_eq!(deduped.len(), distinct.len());

        for kept in &deduped {
            let last = input.iter().rev().find(|a| a.url == kept.url).unwrap();
            assert_eq!(kept, last);
        }
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(dedupe_by_url(Vec::new()).is_empty());
    }
}
