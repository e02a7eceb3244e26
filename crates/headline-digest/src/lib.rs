//! Digest composition over stored articles.
//!
//! [`compose_digest`] asks a [`TextGenerator`] (normally [`GeminiClient`]) for
//! an editor-style briefing and degrades to a plain title list when the model
//! is unavailable. Only an empty article list is an error.

pub mod composer;
pub mod error;
pub mod gemini;
pub mod prompt;

pub use composer::{compose_digest, fallback_briefing, Digest, TextGenerator};
pub use error::DigestError;
pub use gemini::GeminiClient;
pub use prompt::build_digest_prompt;
