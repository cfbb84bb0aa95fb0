use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn topic() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD | Modifier::ITALIC)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn key() -> Style {
        Style::default().fg(Color::Black).bg(Color::Gray).add_modifier(Modifier::BOLD)
    }

    pub fn dim() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn loading() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn heading() -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
    }

    pub fn item_normal() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn item_selected() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
