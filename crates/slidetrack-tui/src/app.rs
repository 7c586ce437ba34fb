use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use slidetrack_core::motion::{Debounce, ScrollAnimation, TweenStep};
use slidetrack_core::pager::TrackGeometry;
use slidetrack_core::{
    AppConfig, Carousel, EasingType, FocusTarget, Indicators, Key, KeyPress,
    MotionConfig, PagerHost, PanelPager, PointerTarget, Viewport,
};
use tracing::{debug, info, trace};

use crate::input::Action;
use crate::surface::{carousel_layout, CardStrip, PageSurface, CARD_HEIGHT};
use crate::theme::Theme;

/// Screen regions recorded at draw time for mouse hit-testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub next_indicator: Option<Rect>,
    pub return_indicator: Option<Rect>,
    pub carousel_prev: Option<Rect>,
    pub carousel_next: Option<Rect>,
    pub carousel_strip: Option<Rect>,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    pub theme: Theme,
    /// Page document hosting the pager
    pub surface: PageSurface,
    /// Card strip hosting the carousel
    pub strip: CardStrip,
    /// Absent when setup declined (no panels, or narrow at startup)
    pub pager: Option<PanelPager>,
    /// Absent when setup declined (fewer than two cards)
    pub carousel: Option<Carousel<String>>,
    /// Where keyboard input goes first
    pub focus: FocusTarget,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Clickable regions from the last frame
    pub hit: HitAreas,
    reduced_motion: bool,
    resize_debounce: Debounce,
    /// Return-to-top scroll used by the narrow layout when no pager exists
    narrow_return: Option<ScrollAnimation>,
    epoch: Instant,
}

impl App {
    /// Build the page for a terminal of `cols` x `rows` cells
    pub fn new(config: AppConfig, theme: Theme, cols: u16, rows: u16) -> Self {
        let reduced_motion = config.motion.reduced_motion;
        let viewport = page_viewport(cols, rows, config.ui.cell_scale);
        let content_height = document_height(&config, viewport);

        let mut surface = PageSurface::new(viewport, content_height, reduced_motion);
        let mut strip = CardStrip::new(
            strip_width(cols, rows),
            config.ui.card_width,
            config.ui.card_gap,
            config.ui.cards.len(),
            config.ui.cell_scale,
        );
        strip.set_reduced_motion(reduced_motion);

        let pager = setup_pager(&config, &mut surface);
        let carousel = match Carousel::new(
            config.ui.cards.clone(),
            config.carousel.clone(),
            false,
            &strip,
        ) {
            Ok(carousel) => Some(carousel),
            Err(e) => {
                info!("Carousel inactive: {}", e);
                None
            }
        };

        let resize_debounce = Debounce::new(config.carousel.resize_debounce());

        Self {
            config,
            theme,
            surface,
            strip,
            pager,
            carousel,
            focus: FocusTarget::Page,
            pending_key: None,
            should_quit: false,
            status_message: None,
            hit: HitAreas::default(),
            reduced_motion,
            resize_debounce,
            narrow_return: None,
            epoch: Instant::now(),
        }
    }

    /// Monotonic timestamp handed to the engines
    pub fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    pub fn panel_count(&self) -> usize {
        self.config.ui.panels.len()
    }

    pub fn is_narrow(&self) -> bool {
        self.config.motion.is_narrow(self.surface.viewport().width)
    }

    pub fn is_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn is_dragging(&self) -> bool {
        self.carousel.as_ref().is_some_and(|c| c.is_dragging())
    }

    /// The pager, when the wide layout is in effect
    fn active_pager(&self) -> Option<&PanelPager> {
        self.pager.as_ref().filter(|_| !self.is_narrow())
    }

    /// Panel nearest the viewport
    pub fn current_panel(&self) -> usize {
        if let Some(pager) = self.active_pager() {
            return pager.current_index();
        }
        let vh = self.surface.viewport().height;
        if vh <= 0.0 {
            return 0;
        }
        let into_track = (self.surface.scroll_y() - self.surface.track_top()).max(0.0);
        ((into_track / vh).round() as usize).min(self.panel_count().saturating_sub(1))
    }

    pub fn indicators(&self) -> Indicators {
        if let Some(pager) = self.active_pager() {
            return pager.indicators();
        }
        let reached = self.surface.scroll_y()
            >= self.surface.track_top() - self.config.pager.zone_tolerance;
        Indicators {
            next_visible: false,
            return_top_visible: reached,
        }
    }

    /// Whether the runner should poll at the animation frame rate
    pub fn needs_frame(&self) -> bool {
        self.pager.as_ref().is_some_and(|p| p.needs_frame())
            || self.carousel.as_ref().is_some_and(|c| c.needs_frame())
            || self.narrow_return.is_some()
            || self.resize_debounce.is_pending()
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Clear the pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    /// Feed one action into the engines
    pub fn apply(&mut self, action: Action, now: Duration) {
        if action == Action::PendingG {
            self.pending_key = Some('g');
            return;
        }
        self.clear_pending_key();

        match action {
            Action::Quit => self.should_quit = true,
            Action::WheelDown => self.wheel(self.config.ui.wheel_step, now),
            Action::WheelUp => self.wheel(-self.config.ui.wheel_step, now),
            Action::Nav { key, shift } => self.nav_key(key, shift, now),
            Action::NextPanel => self.next_panel(now),
            Action::ReturnTop => self.return_top(now),
            Action::CarouselPrev => {
                if let Some(carousel) = self.carousel.as_mut() {
                    let outcome = carousel.on_prev_click(&self.strip, now);
                    trace!(?outcome, "Carousel prev");
                }
            }
            Action::CarouselNext => {
                if let Some(carousel) = self.carousel.as_mut() {
                    let outcome = carousel.on_next_click(&self.strip, now);
                    trace!(?outcome, "Carousel next");
                }
            }
            Action::ToggleFocus => self.toggle_focus(),
            Action::ToggleMotion => self.toggle_motion(),
            Action::PointerDown(column) => {
                let x = self.column_to_px(column);
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.on_pointer_down(x, PointerTarget::Surface, now);
                }
            }
            Action::PointerMove(column) => {
                let x = self.column_to_px(column);
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.on_pointer_move(x);
                }
            }
            Action::PointerUp(column) => {
                let x = self.column_to_px(column);
                if let Some(carousel) = self.carousel.as_mut() {
                    let outcome = carousel.on_pointer_up(x, &self.strip, now);
                    trace!(?outcome, "Carousel drag released");
                }
            }
            Action::PendingG | Action::None => {}
        }
    }

    fn column_to_px(&self, column: u16) -> f64 {
        column as f64 * self.config.ui.cell_scale
    }

    /// Wheel notch; the page scrolls normally when the pager passes on it
    pub fn wheel(&mut self, delta: f64, now: Duration) {
        let narrow = self.is_narrow();
        if let Some(pager) = self.pager.as_mut().filter(|_| !narrow) {
            let outcome = pager.on_wheel(delta, &mut self.surface, now);
            trace!(delta, ?outcome, "Wheel");
            if outcome.is_handled() {
                return;
            }
        }
        self.default_scroll(delta);
    }

    /// Arrow, page and space keys
    pub fn nav_key(&mut self, key: Key, shift: bool, now: Duration) {
        let press = KeyPress {
            key,
            shift,
            focus: self.focus,
        };

        if let Some(carousel) = self.carousel.as_mut() {
            if carousel.on_key(press, &self.strip, now).is_handled() {
                return;
            }
        }

        let narrow = self.is_narrow();
        if let Some(pager) = self.pager.as_mut().filter(|_| !narrow) {
            let outcome = pager.on_key(press, &mut self.surface, now);
            trace!(?key, shift, ?outcome, "Navigation key");
            if outcome.is_handled() {
                return;
            }
        }

        let page = self.surface.viewport().height;
        let step = self.config.ui.wheel_step;
        let delta = match (key, shift) {
            (Key::ArrowDown, _) => step,
            (Key::ArrowUp, _) => -step,
            (Key::PageDown, _) | (Key::Space, false) => page,
            (Key::PageUp, _) | (Key::Space, true) => -page,
            _ => return,
        };
        self.default_scroll(delta);
    }

    fn default_scroll(&mut self, delta: f64) {
        self.narrow_return = None;
        self.surface.scroll_by(delta);
        if !self.is_narrow() {
            if let Some(pager) = self.pager.as_mut() {
                pager.on_scroll(&mut self.surface);
            }
        }
    }

    pub fn next_panel(&mut self, now: Duration) {
        let narrow = self.is_narrow();
        if let Some(pager) = self.pager.as_mut().filter(|_| !narrow) {
            let outcome = pager.on_next_click(&mut self.surface, now);
            trace!(?outcome, "Next panel");
        }
    }

    pub fn return_top(&mut self, now: Duration) {
        if let Some(pager) = self.pager.as_mut() {
            let outcome = pager.on_return_click(&mut self.surface, now);
            trace!(?outcome, "Return to top");
            return;
        }

        // Narrow layout without a pager: plain eased scroll
        if self.reduced_motion {
            self.surface.scroll_to(0.0);
        } else {
            self.narrow_return = Some(ScrollAnimation::new(
                self.surface.scroll_y(),
                0.0,
                now,
                self.config.pager.narrow_return_duration(),
                EasingType::CubicOut,
            ));
        }
    }

    pub fn toggle_focus(&mut self) {
        if self.carousel.is_none() {
            return;
        }
        self.focus = match self.focus {
            FocusTarget::Carousel => FocusTarget::Page,
            _ => FocusTarget::Carousel,
        };
    }

    pub fn toggle_motion(&mut self) {
        self.reduced_motion = !self.reduced_motion;
        self.surface.set_reduced_motion(self.reduced_motion);
        self.strip.set_reduced_motion(self.reduced_motion);
        let state = if self.reduced_motion { "reduced" } else { "full" };
        debug!(reduced = self.reduced_motion, "Motion preference toggled");
        self.set_status(format!("Motion: {}", state));
    }

    /// Terminal resized to `cols` x `rows`
    pub fn resize(&mut self, cols: u16, rows: u16, now: Duration) {
        let viewport = page_viewport(cols, rows, self.config.ui.cell_scale);
        self.surface
            .resize(viewport, document_height(&self.config, viewport));
        self.strip.set_width(strip_width(cols, rows));

        if !self.is_narrow() {
            match self.pager.as_mut() {
                Some(pager) => pager.on_resize(&mut self.surface, now),
                None => self.pager = setup_pager(&self.config, &mut self.surface),
            }
        }

        // Carousel realignment waits for the burst to end
        self.resize_debounce.trigger(now);
    }

    /// Advance every animation by one frame. Returns whether another frame is needed.
    pub fn tick(&mut self, now: Duration) -> bool {
        if let Some(pager) = self.pager.as_mut() {
            pager.tick(&mut self.surface, now);
        }

        if let Some(animation) = self.narrow_return.as_mut() {
            match animation.advance(now) {
                Some(TweenStep::Running(y)) => self.surface.scroll_to(y),
                Some(TweenStep::Finished(y)) => {
                    self.surface.scroll_to(y);
                    self.narrow_return = None;
                }
                None => self.narrow_return = None,
            }
        }

        if let Some(carousel) = self.carousel.as_mut() {
            carousel.tick(&self.strip, now);
        }

        if self.resize_debounce.poll(now) {
            if let Some(carousel) = self.carousel.as_mut() {
                carousel.on_resize(&self.strip, now);
                debug!(width = self.strip.width(), "Carousel realigned after resize");
            }
        }

        self.needs_frame()
    }
}

/// Page viewport in virtual pixels; the bottom row belongs to the status bar
fn page_viewport(cols: u16, rows: u16, scale: f64) -> Viewport {
    Viewport::new(cols as f64 * scale, rows.saturating_sub(1) as f64 * scale)
}

/// Width of the card strip for a terminal size
fn strip_width(cols: u16, rows: u16) -> u16 {
    carousel_layout(Rect::new(0, 0, cols, rows.saturating_sub(1)), CARD_HEIGHT)
        .strip
        .width
}

/// Intro screen plus the track (wide) or the stacked panels (narrow)
fn document_height(config: &AppConfig, viewport: Viewport) -> f64 {
    let panels = config.ui.panels.len();
    let track = if config.motion.is_narrow(viewport.width) {
        panels as f64 * viewport.height
    } else {
        TrackGeometry::new(panels, viewport, viewport.height).track_height()
    };
    viewport.height + track
}

fn setup_pager(config: &AppConfig, surface: &mut PageSurface) -> Option<PanelPager> {
    // Runtime preference travels through the host so it can be toggled
    let motion = MotionConfig {
        reduced_motion: false,
        ..config.motion.clone()
    };
    match PanelPager::new(config.ui.panels.len(), config.pager.clone(), motion, surface) {
        Ok(pager) => Some(pager),
        Err(e) => {
            info!("Pager inactive: {}", e);
            None
        }
    }
}
