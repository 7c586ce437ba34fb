use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event handler for terminal events
pub struct EventHandler {
    /// Poll timeout while idle
    tick_rate: Duration,
    /// Poll timeout while an animation is in flight
    animation_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self::with_animation_fps(tick_rate_ms, 60)
    }

    /// Create a handler that switches to `animation_fps` while frames are needed
    pub fn with_animation_fps(tick_rate_ms: u64, animation_fps: u32) -> Self {
        let fps = animation_fps.max(1) as u64;
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_rate: Duration::from_millis((1000 / fps).max(1)),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub fn animation_rate(&self) -> Duration {
        self.animation_rate
    }

    /// Poll for the next event at the idle rate
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll for the next event at the animation frame rate
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_rate)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Wheel, click or drag
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_rate_from_fps() {
        let handler = EventHandler::with_animation_fps(100, 60);
        assert_eq!(handler.tick_rate(), Duration::from_millis(100));
        assert_eq!(handler.animation_rate(), Duration::from_millis(16));
    }

    #[test]
    fn test_zero_fps_does_not_spin() {
        let handler = EventHandler::with_animation_fps(100, 0);
        assert_eq!(handler.animation_rate(), Duration::from_millis(1000));
    }
}
