//! Concept provider: the generative-content boundary.
//!
//! [`ConceptProvider`] is the seam between the wizard and the remote service;
//! [`gemini::GeminiClient`] is the production implementation and tests swap in
//! scripted fakes.

pub mod gemini;
pub mod manager;
pub mod types;

use types::{ConceptResult, ProviderError};

#[async_trait::async_trait]
pub trait ConceptProvider: Send + Sync {
    /// Fetch one trending topic for the given time-range phrase
    /// (e.g. "the past 7 days").
    async fn fetch_trending_topic(&self, range_phrase: &str) -> Result<String, ProviderError>;

    /// Generate a full concept for a topic: the structured brief followed by
    /// its logo image.
    async fn fetch_concept(&self, topic: &str) -> Result<ConceptResult, ProviderError>;
}
