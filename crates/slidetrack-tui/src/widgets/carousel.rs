use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use slidetrack_core::Carousel;

use super::{blit, px_to_cells};
use crate::surface::{CardStrip, CarouselLayout};
use crate::theme::Theme;

pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(
        buf: &mut Buffer,
        layout: CarouselLayout,
        carousel: &Carousel<String>,
        strip: &CardStrip,
        theme: &Theme,
        focused: bool,
    ) {
        let view = carousel.view();
        let shift = px_to_cells(view.translate_x, strip.scale());
        let card_height = layout.strip.height;
        let card_width = strip.card_width();
        let total = carousel.ring().original_len();

        for (position, title) in carousel.ring().display_items().iter().enumerate() {
            let left = layout.strip.x as i32 + strip.card_left(position) + shift;
            let right = left + card_width as i32;
            if right <= layout.strip.x as i32 || left >= layout.strip.right() as i32 {
                continue;
            }

            let real = carousel.ring().real_index(position);
            let active = position == view.active_position;
            let mut card = Buffer::empty(Rect::new(0, 0, card_width, card_height));
            render_card(&mut card, title, real, total, active, theme);
            blit(&card, buf, left, layout.strip.y as i32, layout.strip);
        }

        let button_style = if focused {
            Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.grey1)
        };
        render_button(buf, layout.prev, "‹", button_style);
        render_button(buf, layout.next, "›", button_style);
    }
}

fn render_card(buf: &mut Buffer, title: &str, index: usize, total: usize, active: bool, theme: &Theme) {
    let area = buf.area;
    let (border, text) = if active {
        (
            Style::default().fg(theme.active_card),
            Style::default().fg(theme.fg1).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(theme.clone_card),
            Style::default().fg(theme.grey2),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(Style::default().bg(theme.bg1));
    let inner = block.inner(area);
    block.render(area, buf);

    let middle = inner.height / 2;
    let lines: Vec<Line> = (0..inner.height)
        .map(|row| {
            if row + 1 == middle {
                Line::from(Span::styled(title.to_string(), text))
            } else if row == middle + 1 {
                Line::from(Span::styled(
                    format!("{} / {}", index + 1, total),
                    Style::default().fg(theme.grey0),
                ))
            } else {
                Line::default()
            }
        })
        .collect();

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(inner, buf);
}

fn render_button(buf: &mut Buffer, area: Rect, label: &str, style: Style) {
    if area.is_empty() {
        return;
    }
    let mut lines = vec![Line::default(); (area.height / 2) as usize];
    lines.push(Line::from(Span::styled(label.to_string(), style)));
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}
