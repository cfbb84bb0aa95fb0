use crate::app::state::{AppState, TimeRange};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let height = TimeRange::ALL.len() as u16 + 6;
    let target = super::centered(area, 46, height);

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(TimeRange::ALL.len() as u16 + 2),
        Constraint::Length(1),
    ])
    .split(target);

    frame.render_widget(
        Paragraph::new(Line::styled("Select a time frame for trend analysis.", Theme::title()).centered()),
        chunks[0],
    );

    let items: Vec<ListItem> = TimeRange::ALL
        .iter()
        .enumerate()
        .map(|(i, range)| {
            let style = if i == state.selected_range {
                Theme::item_selected()
            } else {
                Theme::item_normal()
            };
            let marker = if i == state.selected_range { ">" } else { " " };
            ListItem::new(Line::styled(format!(" {} {}. {}", marker, i + 1, range.label()), style))
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).border_style(Theme::border()));
    frame.render_widget(list, chunks[1]);

    frame.render_widget(
        Paragraph::new(
            Line::styled("Up/Down or 1-5 to choose, Enter to confirm.", Theme::hint()).centered(),
        ),
        chunks[2],
    );
}
