use crate::app::state::{AppState, Step};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let step_name = match state.step {
        Step::Welcome => "WELCOME",
        Step::SelectRange => "SELECT RANGE",
        Step::ShowTrend => "TREND",
        Step::Generating => "GENERATING",
        Step::ShowBrief => "BRIEF",
    };

    let mut parts = vec![Span::styled(format!(" [{step_name}] "), Theme::status_bar())];

    if state.export.in_progress {
        parts.push(Span::styled(
            format!(" {} exporting... ", super::spinner(state.tick_count)),
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        ));
    } else if let Some(status) = state.export.status.as_deref() {
        parts.push(Span::styled(format!(" {status} "), Theme::status_bar()));
    }

    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let hint = " Ctrl+C quit ";
    let remaining = (area.width as usize).saturating_sub(used + hint.len());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(hint, Style::default().fg(Color::Cyan).bg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
