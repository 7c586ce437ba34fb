use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    Frame,
};
use slidetrack_core::PagerHost;

use crate::app::{App, HitAreas};
use crate::widgets::{blit, px_to_cells, IntroWidget, StatusBarWidget, TrackWidget};

/// Draw one frame and refresh the mouse hit areas
pub fn draw(frame: &mut Frame, app: &mut App) {
    let [page, status] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
    let mut hit = HitAreas::default();
    let buf = frame.buffer_mut();

    render_page(buf, page, app, &mut hit);
    StatusBarWidget::render(buf, status, app, &mut hit);

    app.hit = hit;
}

fn render_page(buf: &mut Buffer, page: Rect, app: &App, hit: &mut HitAreas) {
    let scale = app.config.ui.cell_scale;
    let scroll = px_to_cells(app.surface.scroll_y(), scale);
    let intro_rows = page.height as i32;
    let top = page.y as i32;
    let width = page.width as i32;
    let height = page.height as i32;

    if scroll < intro_rows {
        let area = Rect::new(0, 0, page.width, page.height);
        let mut intro = Buffer::empty(area);
        IntroWidget::render(&mut intro, area, &app.theme);
        blit(&intro, buf, page.x as i32, top - scroll, page);
    }

    let count = app.panel_count();
    match app.pager.as_ref().filter(|_| !app.is_narrow()) {
        Some(pager) => {
            // Sticky stage: pinned once the intro has scrolled away
            let shift = px_to_cells(pager.translate_x(), scale);
            let y = top + (intro_rows - scroll).max(0);
            let origins = (0..count).map(move |i| (page.x as i32 + i as i32 * width + shift, y));
            TrackWidget::render(buf, page, origins, app, hit);
        }
        None => {
            let origins =
                (0..count).map(move |i| (page.x as i32, top + intro_rows + i as i32 * height - scroll));
            TrackWidget::render(buf, page, origins, app, hit);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::{backend::TestBackend, Terminal};
    use slidetrack_core::AppConfig;

    use super::*;
    use crate::theme::Theme;

    fn render(app: &mut App, cols: u16, rows: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    fn enter_track(app: &mut App) {
        app.surface.scroll_to(400.0);
        if let Some(pager) = app.pager.as_mut() {
            pager.on_scroll(&mut app.surface);
        }
        app.tick(Duration::ZERO);
    }

    #[test]
    fn test_intro_has_no_carousel_hits() {
        let mut app = App::new(AppConfig::default(), Theme::default(), 140, 41);
        render(&mut app, 140, 41);
        assert!(app.hit.carousel_strip.is_none());
        assert!(app.hit.next_indicator.is_none());
        assert!(app.hit.return_indicator.is_none());
    }

    #[test]
    fn test_track_records_indicator_hits() {
        let mut app = App::new(AppConfig::default(), Theme::default(), 140, 41);
        enter_track(&mut app);
        let buf = render(&mut app, 140, 41);

        let next = app.hit.next_indicator.expect("next button shown on the first panel");
        assert_eq!(next.y, 40);
        assert!(row_text(&buf, 40).contains("next"));
        assert!(row_text(&buf, 0).contains("01"));
    }

    #[test]
    fn test_carousel_panel_records_strip() {
        let mut config = AppConfig::default();
        config.ui.carousel_panel = 0;
        let mut app = App::new(config, Theme::default(), 140, 41);
        enter_track(&mut app);
        render(&mut app, 140, 41);

        let strip = app.hit.carousel_strip.expect("carousel in view");
        assert!(app.hit.carousel_prev.is_some_and(|r| r.right() <= strip.x));
        assert!(app.hit.carousel_next.is_some_and(|r| r.x >= strip.right()));
    }

    #[test]
    fn test_narrow_layout_stacks_panels() {
        let mut app = App::new(AppConfig::default(), Theme::default(), 90, 41);
        app.surface.scroll_to(400.0 + 400.0);
        let buf = render(&mut app, 90, 41);
        assert!(row_text(&buf, 0).contains("02"));
    }
}
