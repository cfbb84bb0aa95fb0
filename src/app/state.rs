//! Wizard state and its transitions.
//!
//! `AppState` is the single owner of everything the wizard accumulates. All
//! changes go through the named transition methods below; the handler and the
//! main loop never poke fields directly. Provider results re-enter through the
//! `*_fetched` / `*_failed` methods, which drop anything from a superseded
//! generation.

use crate::app::event::Generation;
use crate::config::AppConfig;
use crate::provider::types::ConceptResult;
use std::path::PathBuf;

/// One phase of the linear wizard flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Welcome,
    SelectRange,
    ShowTrend,
    Generating,
    ShowBrief,
}

/// Enumerated trend-analysis windows. The selector offers exactly these; no
/// free-form range input exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    PastHour,
    PastWeek,
    PastMonth,
    PastYear,
    PastFiveYears,
}

impl TimeRange {
    pub const ALL: [TimeRange; 5] = [
        TimeRange::PastHour,
        TimeRange::PastWeek,
        TimeRange::PastMonth,
        TimeRange::PastYear,
        TimeRange::PastFiveYears,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::PastHour => "The Past Hour",
            TimeRange::PastWeek => "The Past 7 Days",
            TimeRange::PastMonth => "The Past Month",
            TimeRange::PastYear => "The Past Year",
            TimeRange::PastFiveYears => "The Past 5 Years",
        }
    }

    /// Phrase interpolated into the provider prompt.
    pub fn prompt_phrase(self) -> &'static str {
        match self {
            TimeRange::PastHour => "the past hour",
            TimeRange::PastWeek => "the past 7 days",
            TimeRange::PastMonth => "the past month",
            TimeRange::PastYear => "the past year",
            TimeRange::PastFiveYears => "the past 5 years",
        }
    }
}

/// Outcome of the most recent topic fetch. `is_loading` and a present `error`
/// are mutually exclusive; the topic is cleared whenever a new fetch starts.
#[derive(Debug, Default)]
pub struct TrendState {
    pub topic: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct ExportState {
    pub in_progress: bool,
    pub status: Option<String>,
}

pub struct AppState {
    pub config: AppConfig,
    pub step: Step,
    pub trend: TrendState,
    pub concept: Option<ConceptResult>,
    /// Cursor position in the range selector.
    pub selected_range: usize,
    pub export: ExportState,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
    /// Ticks spent on the generating screen, drives the phase messages.
    pub generating_ticks: u64,
    generation: Generation,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            step: Step::Welcome,
            trend: TrendState::default(),
            concept: None,
            selected_range: 0,
            export: ExportState::default(),
            should_quit: false,
            dirty: true,
            tick_count: 0,
            generating_ticks: 0,
            generation: 0,
        }
    }

    /// Current generation; requests issued with an older value are stale.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    fn next_generation(&mut self) -> Generation {
        self.generation += 1;
        self.generation
    }

    /// Welcome -> SelectRange.
    pub fn begin(&mut self) {
        if self.step == Step::Welcome {
            self.step = Step::SelectRange;
            self.dirty = true;
        }
    }

    pub fn select_prev_range(&mut self) {
        if self.selected_range > 0 {
            self.selected_range -= 1;
            self.dirty = true;
        }
    }

    pub fn select_next_range(&mut self) {
        if self.selected_range + 1 < TimeRange::ALL.len() {
            self.selected_range += 1;
            self.dirty = true;
        }
    }

    /// Confirm the selected range and start a topic fetch.
    ///
    /// Clears prior results, marks the trend as loading, moves to ShowTrend,
    /// and returns the generation the caller must attach to the fetch. `None`
    /// when called outside SelectRange.
    pub fn select_range(&mut self) -> Option<Generation> {
        if self.step != Step::SelectRange {
            return None;
        }
        self.trend.topic = None;
        self.trend.error = None;
        self.trend.is_loading = true;
        self.concept = None;
        self.export = ExportState::default();
        self.step = Step::ShowTrend;
        self.dirty = true;
        Some(self.next_generation())
    }

    /// Start concept generation from a displayed topic.
    ///
    /// Only valid on ShowTrend with a topic present, no fetch in flight, and
    /// no error showing. Returns the generation plus the topic to send.
    pub fn generate(&mut self) -> Option<(Generation, String)> {
        if self.step != Step::ShowTrend
            || self.trend.is_loading
            || self.trend.error.is_some()
        {
            return None;
        }
        let topic = self.trend.topic.clone()?;
        self.concept = None;
        self.step = Step::Generating;
        self.generating_ticks = 0;
        self.dirty = true;
        Some((self.next_generation(), topic))
    }

    /// Back to the range selector, discarding the topic and any error. Also
    /// the defensive fallback for a brief screen with no concept. Bumps the
    /// generation so an in-flight fetch lands stale.
    pub fn retry(&mut self) {
        self.trend.topic = None;
        self.trend.error = None;
        self.trend.is_loading = false;
        self.step = Step::SelectRange;
        self.next_generation();
        self.dirty = true;
    }

    /// Back to the welcome screen with everything cleared.
    pub fn reset(&mut self) {
        self.trend = TrendState::default();
        self.concept = None;
        self.export = ExportState::default();
        self.selected_range = 0;
        self.step = Step::Welcome;
        self.next_generation();
        self.dirty = true;
    }

    pub fn topic_fetched(&mut self, generation: Generation, topic: String) {
        if generation != self.generation {
            tracing::debug!(%generation, current = %self.generation, "dropping stale topic");
            return;
        }
        self.trend.is_loading = false;
        self.trend.error = None;
        self.trend.topic = Some(topic);
        self.dirty = true;
    }

    pub fn topic_failed(&mut self, generation: Generation, error: String) {
        if generation != self.generation {
            tracing::debug!(%generation, current = %self.generation, "dropping stale topic error");
            return;
        }
        self.trend.is_loading = false;
        self.trend.topic = None;
        self.trend.error = Some(error);
        self.dirty = true;
    }

    pub fn concept_ready(&mut self, generation: Generation, concept: ConceptResult) {
        if generation != self.generation {
            tracing::debug!(%generation, current = %self.generation, "dropping stale concept");
            return;
        }
        self.concept = Some(concept);
        self.step = Step::ShowBrief;
        self.dirty = true;
    }

    /// Generation failure is recoverable: the user stays on the trend screen
    /// with the error visible and can retry from there.
    pub fn concept_failed(&mut self, generation: Generation, error: String) {
        if generation != self.generation {
            tracing::debug!(%generation, current = %self.generation, "dropping stale concept error");
            return;
        }
        self.trend.error = Some(error);
        self.step = Step::ShowTrend;
        self.dirty = true;
    }

    /// A brief screen without a complete concept (brief + logo) is invalid;
    /// fall back to the selector instead of rendering it.
    pub fn ensure_brief_complete(&mut self) {
        if self.step == Step::ShowBrief
            && self.concept.as_ref().map_or(true, |c| c.logo_png.is_empty())
        {
            tracing::warn!("brief screen reached without a complete concept, retrying");
            self.retry();
        }
    }

    pub fn export_started(&mut self) {
        self.export.in_progress = true;
        self.export.status = Some("Writing PDF...".to_string());
        self.dirty = true;
    }

    /// Clears the in-progress flag on both outcomes.
    pub fn export_finished(&mut self, result: Result<PathBuf, String>) {
        self.export.in_progress = false;
        self.export.status = Some(match result {
            Ok(path) => format!("Saved {}", path.display()),
            Err(error) => format!("Export failed: {error}"),
        });
        self.dirty = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.step == Step::Generating {
            self.generating_ticks += 1;
        }
        // Animated screens need redraws even without input.
        if self.trend.is_loading || self.step == Step::Generating || self.export.in_progress {
            self.dirty = true;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::provider::types::{BrandIdentity, ConceptBrief, PaletteColor, Typography};

    pub(crate) fn sample_concept(name: &str) -> ConceptResult {
        ConceptResult {
            brief: ConceptBrief {
                name: name.to_string(),
                motive: "Money, understood.".to_string(),
                brand_identity: BrandIdentity {
                    style: "Minimalist and Modern".to_string(),
                    color_palette: vec![PaletteColor {
                        name: "Primary Blue".to_string(),
                        hex: "#1d4ed8".to_string(),
                    }],
                    typography: Typography {
                        font_family: "Inter".to_string(),
                        description: "Clean geometric sans-serif.".to_string(),
                    },
                },
                brief: "A personal finance tracker that explains itself.".to_string(),
            },
            logo_png: vec![0x89, b'P', b'N', b'G'],
        }
    }

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn state_at_trend(topic: &str) -> AppState {
        let mut s = state();
        s.begin();
        let generation = s.select_range().unwrap();
        s.topic_fetched(generation, topic.to_string());
        s
    }

    #[test]
    fn begin_moves_to_selector_only_from_welcome() {
        let mut s = state();
        s.begin();
        assert_eq!(s.step, Step::SelectRange);
        let generation = s.select_range().unwrap();
        s.begin();
        assert_eq!(s.step, Step::ShowTrend);
        let _ = generation;
    }

    #[test]
    fn select_range_clears_results_and_sets_loading() {
        let mut s = state_at_trend("old topic");
        s.concept = Some(sample_concept("Old"));
        s.retry();
        let generation = s.select_range().unwrap();
        assert_eq!(s.step, Step::ShowTrend);
        assert!(s.trend.is_loading);
        assert!(s.trend.topic.is_none());
        assert!(s.trend.error.is_none());
        assert!(s.concept.is_none());
        assert!(generation > 0);
    }

    #[test]
    fn select_range_rejected_outside_selector() {
        let mut s = state();
        assert!(s.select_range().is_none());
        assert_eq!(s.step, Step::Welcome);
    }

    #[test]
    fn successful_fetch_stores_topic_without_error() {
        let s = state_at_trend("AI-powered personal finance tracker");
        assert_eq!(s.step, Step::ShowTrend);
        assert_eq!(s.trend.topic.as_deref(), Some("AI-powered personal finance tracker"));
        assert!(!s.trend.is_loading);
        assert!(s.trend.error.is_none());
    }

    #[test]
    fn failed_fetch_stores_error_and_clears_loading() {
        let mut s = state();
        s.begin();
        let generation = s.select_range().unwrap();
        s.topic_failed(generation, "network timeout".to_string());
        assert_eq!(s.step, Step::ShowTrend);
        assert_eq!(s.trend.error.as_deref(), Some("network timeout"));
        assert!(!s.trend.is_loading);
        assert!(s.trend.topic.is_none());
    }

    #[test]
    fn loading_and_error_never_coexist() {
        let mut s = state();
        s.begin();
        let generation = s.select_range().unwrap();
        assert!(s.trend.is_loading && s.trend.error.is_none());
        s.topic_failed(generation, "boom".to_string());
        assert!(!s.trend.is_loading && s.trend.error.is_some());
        s.retry();
        let generation = s.select_range().unwrap();
        assert!(s.trend.is_loading && s.trend.error.is_none());
        s.topic_fetched(generation, "t".to_string());
        assert!(!s.trend.is_loading && s.trend.error.is_none());
    }

    #[test]
    fn stale_topic_is_discarded() {
        // Two overlapping fetches resolving out of order: the later-initiated
        // request wins regardless of arrival order.
        let mut s = state();
        s.begin();
        let first = s.select_range().unwrap();
        s.retry();
        let second = s.select_range().unwrap();
        assert_ne!(first, second);

        s.topic_fetched(second, "B".to_string());
        s.topic_fetched(first, "A".to_string());
        assert_eq!(s.trend.topic.as_deref(), Some("B"));

        // Same thing with the stale response arriving first.
        s.retry();
        let third = s.select_range().unwrap();
        s.topic_fetched(second, "B".to_string());
        assert!(s.trend.topic.is_none());
        assert!(s.trend.is_loading);
        s.topic_fetched(third, "C".to_string());
        assert_eq!(s.trend.topic.as_deref(), Some("C"));
    }

    #[test]
    fn stale_error_is_discarded() {
        let mut s = state();
        s.begin();
        let first = s.select_range().unwrap();
        s.retry();
        let second = s.select_range().unwrap();
        s.topic_failed(first, "late failure".to_string());
        assert!(s.trend.error.is_none());
        assert!(s.trend.is_loading);
        s.topic_fetched(second, "fresh".to_string());
        assert_eq!(s.trend.topic.as_deref(), Some("fresh"));
    }

    #[test]
    fn generate_requires_topic_idle_and_no_error() {
        let mut s = state();
        s.begin();
        let generation = s.select_range().unwrap();
        assert!(s.generate().is_none(), "loading");
        s.topic_failed(generation, "err".to_string());
        assert!(s.generate().is_none(), "error showing");
        s.retry();
        let generation = s.select_range().unwrap();
        s.topic_fetched(generation, "topic".to_string());
        let (_, topic) = s.generate().unwrap();
        assert_eq!(topic, "topic");
        assert_eq!(s.step, Step::Generating);
    }

    #[test]
    fn generate_success_reaches_brief() {
        let mut s = state_at_trend("AI-powered personal finance tracker");
        let (generation, _) = s.generate().unwrap();
        s.concept_ready(generation, sample_concept("Fintra"));
        assert_eq!(s.step, Step::ShowBrief);
        assert_eq!(s.concept.as_ref().unwrap().brief.name, "Fintra");
    }

    #[test]
    fn generate_failure_returns_to_trend_with_error() {
        let mut s = state_at_trend("topic");
        let (generation, _) = s.generate().unwrap();
        s.concept_failed(generation, "Failed to generate SaaS concept".to_string());
        assert_eq!(s.step, Step::ShowTrend);
        assert!(s.trend.error.as_deref().unwrap().contains("Failed"));
        assert!(s.concept.is_none());
        // Topic is retained, so the user can retry generation after Backspace
        // or see what failed.
        assert_eq!(s.trend.topic.as_deref(), Some("topic"));
    }

    #[test]
    fn stale_concept_is_discarded() {
        let mut s = state_at_trend("topic");
        let (generation, _) = s.generate().unwrap();
        s.retry();
        s.concept_ready(generation, sample_concept("Stale"));
        assert_eq!(s.step, Step::SelectRange);
        assert!(s.concept.is_none());
    }

    #[test]
    fn retry_clears_topic_and_error() {
        let mut s = state_at_trend("topic");
        s.trend.error = Some("network timeout".to_string());
        s.retry();
        assert_eq!(s.step, Step::SelectRange);
        assert!(s.trend.topic.is_none());
        assert!(s.trend.error.is_none());
        assert!(!s.trend.is_loading);
    }

    #[test]
    fn reset_returns_to_welcome_fully_cleared() {
        let mut s = state_at_trend("topic");
        let (generation, _) = s.generate().unwrap();
        s.concept_ready(generation, sample_concept("Fintra"));
        s.export_started();
        s.reset();
        assert_eq!(s.step, Step::Welcome);
        assert!(s.trend.topic.is_none());
        assert!(s.trend.error.is_none());
        assert!(!s.trend.is_loading);
        assert!(s.concept.is_none());
        assert!(!s.export.in_progress);
        assert!(s.export.status.is_none());
    }

    #[test]
    fn brief_without_concept_falls_back_to_selector() {
        let mut s = state();
        s.step = Step::ShowBrief;
        s.ensure_brief_complete();
        assert_eq!(s.step, Step::SelectRange);

        // A concept with an empty logo is just as invalid.
        let mut s = state();
        let mut concept = sample_concept("Fintra");
        concept.logo_png.clear();
        s.concept = Some(concept);
        s.step = Step::ShowBrief;
        s.ensure_brief_complete();
        assert_eq!(s.step, Step::SelectRange);
    }

    #[test]
    fn brief_with_complete_concept_stays() {
        let mut s = state();
        s.concept = Some(sample_concept("Fintra"));
        s.step = Step::ShowBrief;
        s.ensure_brief_complete();
        assert_eq!(s.step, Step::ShowBrief);
    }

    #[test]
    fn export_flag_cleared_on_both_outcomes() {
        let mut s = state();
        s.export_started();
        assert!(s.export.in_progress);
        s.export_finished(Ok(PathBuf::from("/tmp/Fintra_SaaS_Brief.pdf")));
        assert!(!s.export.in_progress);
        assert!(s.export.status.as_deref().unwrap().starts_with("Saved"));

        s.export_started();
        s.export_finished(Err("disk full".to_string()));
        assert!(!s.export.in_progress);
        assert!(s.export.status.as_deref().unwrap().contains("disk full"));
    }
}
