//! View routing: a pure mapping from the current step to a screen.
//!
//! Nothing in here mutates state or talks to the network; rendering reads the
//! controller's state and nothing else.

mod brief;
mod generating;
mod range_select;
mod status_bar;
mod theme;
mod trend;
mod welcome;

use crate::app::state::{AppState, Step};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(frame.area());

    match state.step {
        Step::Welcome => welcome::render(frame, chunks[0]),
        Step::SelectRange => range_select::render(frame, chunks[0], state),
        Step::ShowTrend => trend::render(frame, chunks[0], state),
        Step::Generating => generating::render(frame, chunks[0], state),
        // The controller guarantees a complete concept before this renders;
        // an incomplete one was already redirected to the selector.
        Step::ShowBrief => brief::render(frame, chunks[0], state),
    }

    status_bar::render(frame, chunks[1], state);
}

/// A centered rect of at most `width` x `height` inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Spinner glyph cycled by the tick counter.
fn spinner(tick_count: u64) -> char {
    const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
    FRAMES[(tick_count / 3) as usize % FRAMES.len()]
}
