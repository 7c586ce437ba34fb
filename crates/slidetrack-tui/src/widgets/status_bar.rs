use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use slidetrack_core::FocusTarget;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, HitAreas};

const NEXT_LABEL: &str = " next › ";
const TOP_LABEL: &str = " ↑ top ";

pub struct StatusBarWidget;

impl StatusBarWidget {
    /// Render the bar and record the indicator buttons in `hit`
    pub fn render(buf: &mut Buffer, area: Rect, app: &App, hit: &mut HitAreas) {
        let theme = &app.theme;
        let bar = Style::default().fg(theme.fg0).bg(theme.bg2);

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            let layout = if app.is_narrow() { "NARROW" } else { "PAGER" };
            let focus = match app.focus {
                FocusTarget::Carousel => "Cards",
                _ => "Page",
            };
            let card = app
                .carousel
                .as_ref()
                .and_then(|c| c.active_item())
                .map(String::as_str)
                .unwrap_or("-");
            format!(
                " {} {}/{} | Focus: {} | Card: {}",
                layout,
                app.current_panel() + 1,
                app.panel_count(),
                focus,
                card
            )
        };

        let mut flags = Vec::new();
        if app.pager.as_ref().is_some_and(|p| p.is_locked()) {
            flags.push(Span::styled(" LOCK ", Style::default().fg(theme.locked).bg(theme.bg2)));
        }
        if app.carousel.as_ref().is_some_and(|c| c.view().loop_fixing) {
            flags.push(Span::styled(" LOOP ", Style::default().fg(theme.purple).bg(theme.bg2)));
        }
        if app.is_reduced_motion() {
            flags.push(Span::styled(" REDUCED ", Style::default().fg(theme.grey2).bg(theme.bg2)));
        }

        let indicators = app.indicators();
        let button = Style::default()
            .fg(theme.bg0)
            .bg(theme.indicator)
            .add_modifier(Modifier::BOLD);

        // Indicator buttons sit flush right, one cell apart
        let shown: Vec<(&str, bool)> = [
            (NEXT_LABEL, indicators.next_visible, true),
            (TOP_LABEL, indicators.return_top_visible, false),
        ]
        .into_iter()
        .filter(|(_, visible, _)| *visible)
        .map(|(label, _, is_next)| (label, is_next))
        .collect();
        let buttons_width: usize = shown.iter().map(|(label, _)| label.width()).sum::<usize>()
            + shown.len().saturating_sub(1);

        hit.next_indicator = None;
        hit.return_indicator = None;
        let mut x = area.right().saturating_sub(buttons_width as u16);
        let mut buttons = Vec::new();
        for (i, (label, is_next)) in shown.into_iter().enumerate() {
            if i > 0 {
                buttons.push(Span::styled(" ", bar));
                x += 1;
            }
            let width = label.width() as u16;
            let rect = Some(Rect::new(x, area.y, width, 1));
            if is_next {
                hit.next_indicator = rect;
            } else {
                hit.return_indicator = rect;
            }
            buttons.push(Span::styled(label, button));
            x += width;
        }

        let used = status_text.width()
            + flags.iter().map(|s| s.width()).sum::<usize>()
            + buttons_width;
        let padding = (area.width as usize).saturating_sub(used);

        let mut spans = vec![Span::styled(status_text, bar)];
        spans.extend(flags);
        spans.push(Span::styled(" ".repeat(padding), bar));
        spans.extend(buttons);

        Paragraph::new(Line::from(spans))
            .style(bar)
            .render(area, buf);
    }
}
