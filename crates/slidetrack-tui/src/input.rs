use crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use slidetrack_core::Key;

use crate::app::App;
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// One wheel notch down
    WheelDown,
    /// One wheel notch up
    WheelUp,
    /// Page navigation key
    Nav { key: Key, shift: bool },
    /// "Next panel" button
    NextPanel,
    /// "Return to top" button
    ReturnTop,
    PendingG, // First 'g' press, waiting for second 'g'
    CarouselPrev,
    CarouselNext,
    ToggleFocus,
    ToggleMotion,
    /// Press on the carousel strip at a column
    PointerDown(u16),
    PointerMove(u16),
    PointerUp(u16),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Terminals disagree on whether Shift is reported for uppercase letters
    let modifiers = key.modifiers & (KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    let binding = KeyBinding::new(key.code, modifiers);

    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap.get_pending_g_action().copied().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    keymap.get(&binding).copied().unwrap_or(Action::None)
}

/// Handle a mouse event and return the corresponding action
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    let at = Position::new(mouse.column, mouse.row);
    let hit = |rect: Option<Rect>| rect.is_some_and(|r| r.contains(at));

    match mouse.kind {
        MouseEventKind::ScrollDown => Action::WheelDown,
        MouseEventKind::ScrollUp => Action::WheelUp,
        MouseEventKind::Down(MouseButton::Left) => {
            if hit(app.hit.next_indicator) {
                Action::NextPanel
            } else if hit(app.hit.return_indicator) {
                Action::ReturnTop
            } else if hit(app.hit.carousel_prev) {
                Action::CarouselPrev
            } else if hit(app.hit.carousel_next) {
                Action::CarouselNext
            } else if let Some(strip) = app.hit.carousel_strip.filter(|r| r.contains(at)) {
                Action::PointerDown(mouse.column - strip.x)
            } else {
                Action::None
            }
        }
        MouseEventKind::Drag(MouseButton::Left) if app.is_dragging() => {
            Action::PointerMove(strip_column(mouse.column, app))
        }
        MouseEventKind::Up(MouseButton::Left) if app.is_dragging() => {
            Action::PointerUp(strip_column(mouse.column, app))
        }
        _ => Action::None,
    }
}

/// Column relative to the strip; the pointer may have left it mid-drag
fn strip_column(column: u16, app: &App) -> u16 {
    let origin = app.hit.carousel_strip.map_or(0, |r| r.x);
    column.saturating_sub(origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState};
    use slidetrack_core::AppConfig;

    use crate::theme::Theme;

    fn app() -> App {
        App::new(AppConfig::default(), Theme::default(), 140, 41)
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_gg_sequence() {
        let keymap = Keymap::default();
        let mut app = app();
        let g = key(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(g, &app, &keymap), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(g, &app, &keymap), Action::ReturnTop);
    }

    #[test]
    fn test_shift_space_is_previous() {
        let keymap = Keymap::default();
        let app = app();
        assert_eq!(
            handle_key_event(key(KeyCode::Char(' '), KeyModifiers::SHIFT), &app, &keymap),
            Action::Nav {
                key: Key::Space,
                shift: true
            }
        );
    }

    #[test]
    fn test_unbound_key() {
        let keymap = Keymap::default();
        let app = app();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('z'), KeyModifiers::NONE), &app, &keymap),
            Action::None
        );
    }

    #[test]
    fn test_wheel_events() {
        let app = app();
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollDown, 3, 3), &app),
            Action::WheelDown
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollUp, 3, 3), &app),
            Action::WheelUp
        );
    }

    #[test]
    fn test_clicks_hit_recorded_areas() {
        let mut app = app();
        app.hit.next_indicator = Some(Rect::new(100, 40, 10, 1));
        app.hit.carousel_strip = Some(Rect::new(4, 10, 120, 7));
        let down = MouseEventKind::Down(MouseButton::Left);

        assert_eq!(handle_mouse_event(mouse(down, 105, 40), &app), Action::NextPanel);
        assert_eq!(
            handle_mouse_event(mouse(down, 14, 12), &app),
            Action::PointerDown(10)
        );
        assert_eq!(handle_mouse_event(mouse(down, 0, 0), &app), Action::None);
    }

    #[test]
    fn test_drag_ignored_without_press() {
        let app = app();
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 12), &app),
            Action::None
        );
    }
}
