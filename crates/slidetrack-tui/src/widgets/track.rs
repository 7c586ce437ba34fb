use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::{blit, CarouselWidget};
use crate::app::{App, HitAreas};
use crate::surface::{carousel_layout, CARD_HEIGHT};

/// The panel track: side by side and translated on wide terminals, stacked on narrow ones
pub struct TrackWidget;

impl TrackWidget {
    /// Draw every panel that intersects `page`.
    ///
    /// `origins` yields the screen position of each panel's top-left corner.
    /// Carousel hit areas are recorded only when its panel sits fully in view.
    pub fn render(
        buf: &mut Buffer,
        page: Rect,
        origins: impl Iterator<Item = (i32, i32)>,
        app: &App,
        hit: &mut HitAreas,
    ) {
        let size = Rect::new(0, 0, page.width, page.height);

        for (index, (x, y)) in origins.enumerate() {
            let visible = x + (page.width as i32) > page.x as i32
                && x < page.right() as i32
                && y + (page.height as i32) > page.y as i32
                && y < page.bottom() as i32;
            if !visible {
                continue;
            }

            let mut panel = Buffer::empty(size);
            render_panel(&mut panel, index, app);
            blit(&panel, buf, x, y, page);

            if index == app.config.ui.carousel_panel
                && app.carousel.is_some()
                && x == page.x as i32
                && y == page.y as i32
            {
                let layout = carousel_layout(page, CARD_HEIGHT);
                hit.carousel_prev = Some(layout.prev);
                hit.carousel_next = Some(layout.next);
                hit.carousel_strip = Some(layout.strip);
            }
        }
    }
}

fn render_panel(buf: &mut Buffer, index: usize, app: &App) {
    let area = buf.area;
    let theme = &app.theme;
    let count = app.panel_count();
    let title = app
        .config
        .ui
        .panels
        .get(index)
        .map(String::as_str)
        .unwrap_or("");
    let accent = theme.panel_accent(index);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            format!(" {:02} ", index + 1),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.bg0));
    let inner = block.inner(area);
    block.render(area, buf);

    let hint = if index + 1 < count {
        "scroll, Space or n for the next panel"
    } else {
        "gg or the top button returns to the intro"
    };
    Paragraph::new(vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(theme.fg1).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("panel {} of {}", index + 1, count),
            Style::default().fg(theme.grey1),
        )),
        Line::from(Span::styled(hint, Style::default().fg(theme.grey0))),
    ])
    .render(Rect { height: inner.height.min(3), ..inner }, buf);

    if index == app.config.ui.carousel_panel {
        if let Some(carousel) = app.carousel.as_ref() {
            let focused = app.focus == slidetrack_core::FocusTarget::Carousel;
            CarouselWidget::render(
                buf,
                carousel_layout(area, CARD_HEIGHT),
                carousel,
                &app.strip,
                theme,
                focused,
            );
        }
    }
}
