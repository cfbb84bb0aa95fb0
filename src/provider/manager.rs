//! Bridges provider calls onto the event loop.
//!
//! Each request runs in its own task and reports back through the app event
//! channel, tagged with the generation current when it was issued. The
//! controller drops results whose generation no longer matches, so a task
//! finishing late can never clobber newer state.

use crate::app::event::{AppEvent, Generation};
use crate::app::state::TimeRange;
use crate::provider::ConceptProvider;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

pub struct ProviderManager {
    event_tx: UnboundedSender<AppEvent>,
    client: Arc<dyn ConceptProvider>,
}

impl ProviderManager {
    pub fn new(event_tx: UnboundedSender<AppEvent>, client: Arc<dyn ConceptProvider>) -> Self {
        Self { event_tx, client }
    }

    pub fn fetch_topic(&self, generation: Generation, range: TimeRange) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match client.fetch_trending_topic(range.prompt_phrase()).await {
                Ok(topic) => {
                    tracing::info!(%generation, range = range.label(), %topic, "topic fetched");
                    AppEvent::TopicFetched { generation, topic }
                }
                Err(e) => {
                    tracing::warn!(%generation, "topic fetch failed: {e}");
                    AppEvent::TopicFailed { generation, error: e.to_string() }
                }
            };
            let _ = tx.send(event);
        });
    }

    pub fn generate_concept(&self, generation: Generation, topic: String) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match client.fetch_concept(&topic).await {
                Ok(concept) => {
                    tracing::info!(%generation, name = %concept.brief.name, "concept generated");
                    AppEvent::ConceptReady { generation, concept }
                }
                Err(e) => {
                    tracing::warn!(%generation, "concept generation failed: {e}");
                    AppEvent::ConceptFailed { generation, error: e.to_string() }
                }
            };
            let _ = tx.send(event);
        });
    }
}
