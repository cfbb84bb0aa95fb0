//! Event handling: terminal input and provider results become state
//! transitions plus actions for the main loop to execute.

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::{AppState, Step, TimeRange};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    // A brief screen without a complete concept falls back to the selector
    // before anything renders or reacts to it.
    state.ensure_brief_complete();

    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::TopicFetched { generation, topic } => {
            state.topic_fetched(generation, topic);
            vec![]
        }
        AppEvent::TopicFailed { generation, error } => {
            state.topic_failed(generation, error);
            vec![]
        }
        AppEvent::ConceptReady { generation, concept } => {
            state.concept_ready(generation, concept);
            vec![]
        }
        AppEvent::ConceptFailed { generation, error } => {
            state.concept_failed(generation, error);
            vec![]
        }
        AppEvent::ExportComplete { path } => {
            state.export_finished(Ok(path));
            vec![]
        }
        AppEvent::ExportFailed { error } => {
            state.export_finished(Err(error));
            vec![]
        }
        AppEvent::Tick => {
            state.tick();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match state.step {
        Step::Welcome => handle_welcome_key(state, key),
        Step::SelectRange => handle_selector_key(state, key),
        Step::ShowTrend => handle_trend_key(state, key),
        // No interaction while the concept is being generated.
        Step::Generating => vec![],
        Step::ShowBrief => handle_brief_key(state, key),
    }
}

fn handle_welcome_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            state.begin();
            vec![]
        }
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_selector_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => {
            state.select_prev_range();
            vec![]
        }
        KeyCode::Down => {
            state.select_next_range();
            vec![]
        }
        KeyCode::Char(c @ '1'..='5') => {
            state.selected_range = c as usize - '1' as usize;
            state.dirty = true;
            confirm_range(state)
        }
        KeyCode::Enter => confirm_range(state),
        _ => vec![],
    }
}

fn confirm_range(state: &mut AppState) -> Vec<Action> {
    let range = TimeRange::ALL[state.selected_range];
    match state.select_range() {
        Some(generation) => vec![Action::FetchTopic { generation, range }],
        None => vec![],
    }
}

fn handle_trend_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // In the error sub-state only Backspace does anything; otherwise Enter
    // continues and Backspace retries, both ignored while the fetch runs.
    if state.trend.error.is_some() {
        if key.code == KeyCode::Backspace {
            state.retry();
        }
        return vec![];
    }
    if state.trend.is_loading || state.trend.topic.is_none() {
        return vec![];
    }
    match key.code {
        KeyCode::Enter => match state.generate() {
            Some((generation, topic)) => vec![Action::GenerateConcept { generation, topic }],
            None => vec![],
        },
        KeyCode::Backspace => {
            state.retry();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_brief_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('d') if !state.export.in_progress => {
            state.export_started();
            vec![Action::ExportBrief]
        }
        KeyCode::Enter | KeyCode::Char('r') => {
            state.reset();
            vec![]
        }
        _ => vec![],
    }
}
