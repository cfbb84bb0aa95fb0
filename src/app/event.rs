use crate::provider::types::ConceptResult;
use crossterm::event::Event as CrosstermEvent;
use std::path::PathBuf;

/// Sequence marker for provider requests. The controller bumps it whenever a
/// new request starts (or the user navigates away), and results carrying an
/// older generation are discarded on arrival.
pub type Generation = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Topic fetch finished
    TopicFetched {
        generation: Generation,
        topic: String,
    },
    TopicFailed {
        generation: Generation,
        error: String,
    },

    /// Concept generation (brief + logo) finished
    ConceptReady {
        generation: Generation,
        concept: ConceptResult,
    },
    ConceptFailed {
        generation: Generation,
        error: String,
    },

    /// PDF export finished
    ExportComplete {
        path: PathBuf,
    },
    ExportFailed {
        error: String,
    },

    /// Tick for UI refresh
    Tick,
}
