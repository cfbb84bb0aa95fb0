use crate::app::event::Generation;
use crate::app::state::TimeRange;

/// Side effects requested by the handler, executed by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FetchTopic { generation: Generation, range: TimeRange },
    GenerateConcept { generation: Generation, topic: String },
    ExportBrief,
    Quit,
}
