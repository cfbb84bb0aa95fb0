use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled("SaaS Idea Generator", Theme::title()).centered(),
        Line::raw(""),
        Line::styled("Discover your next venture, powered by AI.", Theme::dim()).centered(),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Press ", Theme::hint()),
            Span::styled(" Enter ", Theme::key()),
            Span::styled(" to begin, ", Theme::hint()),
            Span::styled(" q ", Theme::key()),
            Span::styled(" to quit.", Theme::hint()),
        ])
        .centered(),
    ];
    let target = super::centered(area, 60, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines), target);
}
