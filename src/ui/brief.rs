use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    // The controller redirects an incomplete brief before rendering; this
    // guard only skips the single frame in between.
    let Some(concept) = state.concept.as_ref() else {
        return;
    };
    let brief = &concept.brief;
    let identity = &brief.brand_identity;

    let mut lines = vec![
        Line::styled(brief.name.clone(), Theme::title()).centered(),
        Line::styled(format!("\"{}\"", brief.motive), Theme::dim()).centered(),
        Line::raw(""),
        Line::styled("EXECUTIVE BRIEF", Theme::heading()),
    ];
    for paragraph in brief.brief.lines() {
        lines.push(Line::styled(paragraph.to_string(), Theme::item_normal()));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled("BRAND IDENTITY", Theme::heading()));
    lines.push(Line::from(vec![
        Span::styled("Style: ", Theme::dim()),
        Span::styled(identity.style.clone(), Theme::item_normal()),
    ]));

    let mut palette = vec![Span::styled("Palette: ", Theme::dim())];
    for color in &identity.color_palette {
        let style = match parse_hex(&color.hex) {
            Some((r, g, b)) => Style::default().fg(Color::Rgb(r, g, b)),
            None => Theme::item_normal(),
        };
        palette.push(Span::styled("\u{2588}\u{2588} ", style));
        palette.push(Span::styled(format!("{} {}  ", color.name, color.hex), Theme::hint()));
    }
    lines.push(Line::from(palette));

    lines.push(Line::from(vec![
        Span::styled("Typography: ", Theme::dim()),
        Span::styled(identity.typography.font_family.clone(), Theme::item_normal()),
        Span::styled(format!(" ({})", identity.typography.description), Theme::hint()),
    ]));

    lines.push(Line::raw(""));
    lines.push(
        Line::from(vec![
            Span::styled("Press ", Theme::hint()),
            Span::styled(" d ", Theme::key()),
            Span::styled(" to download the PDF (with logo), ", Theme::hint()),
            Span::styled(" r ", Theme::key()),
            Span::styled(" to start over.", Theme::hint()),
        ])
        .centered(),
    );

    let block = Block::default()
        .title(" SaaS Brief ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let target = super::centered(area, 90, (lines.len() as u16 + 4).min(area.height));
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), target);
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}
