use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines = if state.trend.is_loading {
        vec![
            Line::from(vec![
                Span::styled(format!("{} ", super::spinner(state.tick_count)), Theme::loading()),
                Span::styled("Finding a trending topic...", Theme::dim()),
            ])
            .centered(),
        ]
    } else if let Some(error) = state.trend.error.as_deref() {
        vec![
            Line::styled("An Error Occurred", Theme::error()).centered(),
            Line::raw(""),
            Line::styled(error.to_string(), Theme::dim()).centered(),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Press ", Theme::hint()),
                Span::styled(" Backspace ", Theme::key()),
                Span::styled(" to try again.", Theme::hint()),
            ])
            .centered(),
        ]
    } else if let Some(topic) = state.trend.topic.as_deref() {
        vec![
            Line::styled("Here is a trending topic:", Theme::dim()).centered(),
            Line::raw(""),
            Line::styled(format!("\"{topic}\""), Theme::topic()).centered(),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Press ", Theme::hint()),
                Span::styled(" Enter ", Theme::key()),
                Span::styled(" to continue, or ", Theme::hint()),
                Span::styled(" Backspace ", Theme::key()),
                Span::styled(" to retry.", Theme::hint()),
            ])
            .centered(),
        ]
    } else {
        // Topic absent with no error and no fetch running: nothing to show.
        vec![]
    };

    let target = super::centered(area, 76, lines.len().max(1) as u16 + 2);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), target);
}
