use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::theme::Theme;

/// Full-screen intro shown above the panel track
pub struct IntroWidget;

impl IntroWidget {
    pub fn render(buf: &mut Buffer, area: Rect, theme: &Theme) {
        Block::default()
            .style(Style::default().bg(theme.bg0))
            .render(area, buf);

        let [_, title, subtitle, _, hint] = Layout::vertical([
            Constraint::Percentage(35),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(Line::from(Span::styled(
            "s l i d e t r a c k",
            Style::default()
                .fg(theme.yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(title, buf);

        Paragraph::new(Line::from(Span::styled(
            "scroll-driven panels and an endless card ring",
            Style::default().fg(theme.grey2),
        )))
        .alignment(Alignment::Center)
        .render(subtitle, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("↓ ", Style::default().fg(theme.aqua)),
            Span::styled(
                "wheel or j/k to scroll · n next · gg top · Tab focus · m motion · q quit",
                Style::default().fg(theme.grey1),
            ),
        ]))
        .alignment(Alignment::Center)
        .render(hint, buf);
    }
}
