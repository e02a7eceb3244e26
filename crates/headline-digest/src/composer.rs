use async_trait::async_trait;
use headline_core::Article;
use serde::Serialize;

use crate::error::DigestError;
use crate::prompt::build_digest_prompt;

const FALLBACK_TITLE_COUNT: usize = 3;

/// A prompt-in, text-out generative model.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, DigestError>;
}

/// The composed digest, tagged with which path produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Digest {
    Generated { text: String },
    /// Model unavailable; `text` is the plain title briefing.
    Fallback { text: String, reason: String },
}

impl Digest {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Digest::Generated { text } | Digest::Fallback { text, .. } => text,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Digest::Fallback { .. })
    }
}

/// `Briefing: {t1}. {t2}. {t3}. (AI generation unavailable at the moment)`
/// over at most the first three titles.
#[must_use]
pub fn fallback_briefing(articles: &[Article]) -> String {
    let mut text = String::from("Briefing: ");
    for article in articles.iter().take(FALLBACK_TITLE_COUNT) {
        text.push_str(&article.title);
        text.push_str(". ");
    }
    text.push_str("(AI generation unavailable at the moment)");
    text
}

/// Compose a digest for `articles`.
///
/// Generator failure or a blank response never propagates; it yields
/// [`Digest::Fallback`] instead.
///
/// # Errors
///
/// Returns [`DigestError::NoArticles`] when `articles` is empty.
pub async fn compose_digest<G>(generator: &G, articles: &[Article]) -> Result<Digest, DigestError>
where
    G: TextGenerator + ?Sized,
{
    if articles.is_empty() {
        return Err(DigestError::NoArticles);
    }

    let prompt = build_digest_prompt(articles);
    let reason = match generator.generate(&prompt).await {
        Ok(text) if !text.trim().is_empty() => {
            tracing::info!(articles = articles.len(), "digest generated");
            return Ok(Digest::Generated { text });
        }
        Ok(_) => "generator returned empty text".to_string(),
        Err(e) => e.to_string(),
    };

    tracing::warn!(
        articles = articles.len(),
        reason = %reason,
        "digest generation failed, using fallback briefing"
    );
    Ok(Digest::Fallback {
        text: fallback_briefing(articles),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Scripted {
        reply: Result<&'static str, u16>,
        calls: AtomicUsize,
    }

    impl Scripted {
        fn new(reply: Result<&'static str, u16>) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for Scripted {
        async fn generate(&self, prompt: &str) -> Result<String, DigestError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert!(prompt.contains("TITLE:"));
            match self.reply {
                Ok(text) => Ok(text.to_string()),
                Err(status) => Err(DigestError::Status(status)),
            }
        }
    }

    fn articles(titles: &[&str]) -> Vec<Article> {
        titles
            .iter()
            .map(|t| Article {
                title: (*t).to_string(),
                description: Some(format!("about {t}")),
                url: format!("https://example.com/{t}"),
                published_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
                source: None,
                content: None,
            })
            .collect()
    }

    #[tokio::test]
    async fn successful_generation_is_primary() {
        let generator = Scripted::new(Ok("**Tech**\nThings happened."));
        let digest = compose_digest(&generator, &articles(&["A", "B"])).await.unwrap();

        assert_eq!(
            digest,
            Digest::Generated {
                text: "**Tech**\nThings happened.".to_string()
            }
        );
        assert!(!digest.is_fallback());
    }

    #[tokio::test]
    async fn generator_error_yields_fallback_naming_titles() {
        let generator = Scripted::new(Err(500));
        let digest = compose_digest(&generator, &articles(&["Alpha", "Beta", "Gamma"]))
            .await
            .unwrap();

        assert!(digest.is_fallback());
        assert_eq!(
            digest.text(),
            "Briefing: Alpha. Beta. Gamma. (AI generation unavailable at the moment)"
        );
        match digest {
            Digest::Fallback { reason, .. } => assert!(reason.contains("500")),
            Digest::Generated { .. } => unreachable!(),
        }
    }

    #[tokio::test]
    async fn blank_generation_yields_fallback() {
        let generator = Scripted::new(Ok("   \n"));
        let digest = compose_digest(&generator, &articles(&["Only"])).await.unwrap();
        assert_eq!(
            digest.text(),
            "Briefing: Only. (AI generation unavailable at the moment)"
        );
    }

    #[tokio::test]
    async fn empty_input_is_an_error_without_calling_generator() {
        let generator = Scripted::new(Ok("unused"));
        let err = compose_digest(&generator, &[]).await.unwrap_err();

        assert!(matches!(err, DigestError::NoArticles));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn fallback_uses_only_first_three_titles() {
        let text = fallback_briefing(&articles(&["1", "2", "3", "4", "5"]));
        assert_eq!(text, "Briefing: 1. 2. 3. (AI generation unavailable at the moment)");
    }
}
