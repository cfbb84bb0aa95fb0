use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Phase messages shown in order while the concept call runs, advancing every
/// ~1.5s and holding on the last.
const PHASES: [&str; 5] = [
    "Analyzing market trends...",
    "Ideating a unique concept...",
    "Defining brand identity...",
    "Designing a modern logo...",
    "Finalizing your brief...",
];

const TICKS_PER_PHASE: u64 = 30;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let phase = ((state.generating_ticks / TICKS_PER_PHASE) as usize).min(PHASES.len() - 1);
    let lines = vec![
        Line::styled(format!("{}", super::spinner(state.tick_count)), Theme::loading()).centered(),
        Line::raw(""),
        Line::styled(PHASES[phase], Theme::dim()).centered(),
    ];
    let target = super::centered(area, 50, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines), target);
}
