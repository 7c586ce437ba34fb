use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub pager: PagerConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Easing curve applied to a time-based animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump to the end value on the final frame
    None,
    Linear,
    /// 1 - (1-t)³
    CubicOut,
    /// Cubic in-out, symmetric around t = 0.5
    CubicInOut,
    /// 1 - (1-t)⁵
    QuinticOut,
    /// 1 - 2^(-10t)
    ExpoOut,
    /// CSS `ease`, cubic-bezier(0.25, 0.1, 0.25, 1)
    Ease,
}

/// Motion preferences shared by both engines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Force instantaneous state application (no interpolation)
    #[serde(default)]
    pub reduced_motion: bool,
    /// Viewports at or below this width use the narrow layout and disable the pager
    #[serde(default = "default_narrow_breakpoint")]
    pub narrow_breakpoint: f64,
    /// Frame rate used while an animation is in flight
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            narrow_breakpoint: default_narrow_breakpoint(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl MotionConfig {
    pub fn is_narrow(&self, viewport_width: f64) -> bool {
        viewport_width <= self.narrow_breakpoint
    }

    /// Tick duration while animating
    pub fn frame_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }
}

/// Tunables for the panel navigation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Accumulated wheel delta that commits one panel step
    #[serde(default = "default_wheel_threshold")]
    pub wheel_threshold: f64,
    /// Upward accumulated delta at panel 0 that returns to the intro
    #[serde(default = "default_wheel_threshold")]
    pub intro_threshold: f64,
    #[serde(default = "default_step_duration")]
    pub step_duration_ms: u64,
    /// Safety timeout after which a step unlocks even without a completion frame
    #[serde(default = "default_step_lock")]
    pub step_lock_ms: u64,
    #[serde(default = "default_step_easing")]
    pub step_easing: EasingType,
    #[serde(default = "default_intro_duration")]
    pub intro_duration_ms: u64,
    #[serde(default = "default_intro_lock")]
    pub intro_lock_ms: u64,
    #[serde(default = "default_cubic_out")]
    pub intro_easing: EasingType,
    /// Return-to-top scroll used by the narrow layout
    #[serde(default = "default_narrow_return_duration")]
    pub narrow_return_duration_ms: u64,
    /// Per-frame blend toward the scroll-driven offset target
    #[serde(default = "default_smoothing_factor")]
    pub smoothing_factor: f64,
    /// Residual below which the smoothed offset snaps to its target
    #[serde(default = "default_smoothing_epsilon")]
    pub smoothing_epsilon: f64,
    /// Slack when deciding whether scroll has reached the track
    #[serde(default = "default_zone_tolerance")]
    pub zone_tolerance: f64,
    /// How much of the second-to-last panel must be visible before "next" hides
    #[serde(default = "default_reveal_ratio")]
    pub reveal_ratio: f64,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            wheel_threshold: default_wheel_threshold(),
            intro_threshold: default_wheel_threshold(),
            step_duration_ms: default_step_duration(),
            step_lock_ms: default_step_lock(),
            step_easing: default_step_easing(),
            intro_duration_ms: default_intro_duration(),
            intro_lock_ms: default_intro_lock(),
            intro_easing: default_cubic_out(),
            narrow_return_duration_ms: default_narrow_return_duration(),
            smoothing_factor: default_smoothing_factor(),
            smoothing_epsilon: default_smoothing_epsilon(),
            zone_tolerance: default_zone_tolerance(),
            reveal_ratio: default_reveal_ratio(),
        }
    }
}

impl PagerConfig {
    pub fn step_duration(&self) -> Duration {
        Duration::from_millis(self.step_duration_ms)
    }

    pub fn step_lock(&self) -> Duration {
        Duration::from_millis(self.step_lock_ms)
    }

    pub fn intro_duration(&self) -> Duration {
        Duration::from_millis(self.intro_duration_ms)
    }

    pub fn intro_lock(&self) -> Duration {
        Duration::from_millis(self.intro_lock_ms)
    }

    pub fn narrow_return_duration(&self) -> Duration {
        Duration::from_millis(self.narrow_return_duration_ms)
    }
}

/// Tunables for the circular carousel engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default = "default_carousel_transition")]
    pub transition_ms: u64,
    /// Extra wait past the transition before the completion path is forced
    #[serde(default = "default_carousel_timeout_margin")]
    pub timeout_margin_ms: u64,
    #[serde(default = "default_carousel_easing")]
    pub easing: EasingType,
    #[serde(default = "default_drag_threshold_px")]
    pub drag_threshold_px: f64,
    /// Fraction of the active item's width that also counts as a swipe
    #[serde(default = "default_drag_threshold_ratio")]
    pub drag_threshold_ratio: f64,
    /// Item width assumed when the active item cannot be measured
    #[serde(default = "default_fallback_item_width")]
    pub fallback_item_width: f64,
    #[serde(default = "default_resize_debounce")]
    pub resize_debounce_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_carousel_transition(),
            timeout_margin_ms: default_carousel_timeout_margin(),
            easing: default_carousel_easing(),
            drag_threshold_px: default_drag_threshold_px(),
            drag_threshold_ratio: default_drag_threshold_ratio(),
            fallback_item_width: default_fallback_item_width(),
            resize_debounce_ms: default_resize_debounce(),
        }
    }
}

impl CarouselConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn completion_timeout(&self) -> Duration {
        Duration::from_millis(self.transition_ms + self.timeout_margin_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Swipe distance for an item of the given width
    pub fn drag_threshold(&self, item_width: f64) -> f64 {
        self.drag_threshold_px
            .min(item_width * self.drag_threshold_ratio)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Panel titles, in track order
    #[serde(default = "default_panels")]
    pub panels: Vec<String>,
    /// Index of the panel that hosts the carousel
    #[serde(default = "default_carousel_panel")]
    pub carousel_panel: usize,
    /// Carousel card titles
    #[serde(default = "default_cards")]
    pub cards: Vec<String>,
    /// Card width in terminal columns
    #[serde(default = "default_card_width")]
    pub card_width: u16,
    #[serde(default = "default_card_gap")]
    pub card_gap: u16,
    /// Horizontal units per terminal column (so wheel and drag thresholds keep their scale)
    #[serde(default = "default_cell_scale")]
    pub cell_scale: f64,
    /// Wheel delta emitted per mouse scroll notch
    #[serde(default = "default_wheel_step")]
    pub wheel_step: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            panels: default_panels(),
            carousel_panel: default_carousel_panel(),
            cards: default_cards(),
            card_width: default_card_width(),
            card_gap: default_card_gap(),
            cell_scale: default_cell_scale(),
            wheel_step: default_wheel_step(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>", "<Tab>", "<Space>"
///
/// Arrow keys, PageUp/PageDown and Space are always forwarded to the engines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Emit one wheel notch downward
    #[serde(default = "default_key_wheel_down")]
    pub wheel_down: String,
    /// Emit one wheel notch upward
    #[serde(default = "default_key_wheel_up")]
    pub wheel_up: String,
    /// Press the "next panel" button
    #[serde(default = "default_key_next_panel")]
    pub next_panel: String,
    /// Press the "return to top" button
    #[serde(default = "default_key_return_top")]
    pub return_top: String,
    /// Press the carousel's previous button
    #[serde(default = "default_key_carousel_prev")]
    pub carousel_prev: String,
    /// Press the carousel's next button
    #[serde(default = "default_key_carousel_next")]
    pub carousel_next: String,
    /// Move keyboard focus between the page and the carousel
    #[serde(default = "default_key_toggle_focus")]
    pub toggle_focus: String,
    /// Toggle the reduced-motion preference
    #[serde(default = "default_key_toggle_motion")]
    pub toggle_motion: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            wheel_down: default_key_wheel_down(),
            wheel_up: default_key_wheel_up(),
            next_panel: default_key_next_panel(),
            return_top: default_key_return_top(),
            carousel_prev: default_key_carousel_prev(),
            carousel_next: default_key_carousel_next(),
            toggle_focus: default_key_toggle_focus(),
            toggle_motion: default_key_toggle_motion(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_wheel_down() -> String { "j".to_string() }
fn default_key_wheel_up() -> String { "k".to_string() }
fn default_key_next_panel() -> String { "n".to_string() }
fn default_key_return_top() -> String { "gg".to_string() }
fn default_key_carousel_prev() -> String { "h".to_string() }
fn default_key_carousel_next() -> String { "l".to_string() }
fn default_key_toggle_focus() -> String { "<Tab>".to_string() }
fn default_key_toggle_motion() -> String { "m".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("slidetrack")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_narrow_breakpoint() -> f64 {
    1024.0
}

fn default_animation_fps() -> u32 {
    60
}

fn default_wheel_threshold() -> f64 {
    140.0
}

fn default_step_duration() -> u64 {
    560
}

fn default_step_lock() -> u64 {
    640
}

fn default_step_easing() -> EasingType {
    EasingType::CubicInOut
}

fn default_intro_duration() -> u64 {
    260
}

fn default_intro_lock() -> u64 {
    340
}

fn default_cubic_out() -> EasingType {
    EasingType::CubicOut
}

fn default_narrow_return_duration() -> u64 {
    320
}

fn default_smoothing_factor() -> f64 {
    0.1
}

fn default_smoothing_epsilon() -> f64 {
    0.5
}

fn default_zone_tolerance() -> f64 {
    2.0
}

fn default_reveal_ratio() -> f64 {
    0.99
}

fn default_carousel_transition() -> u64 {
    260
}

fn default_carousel_timeout_margin() -> u64 {
    40
}

fn default_carousel_easing() -> EasingType {
    EasingType::Ease
}

fn default_drag_threshold_px() -> f64 {
    90.0
}

fn default_drag_threshold_ratio() -> f64 {
    0.25
}

fn default_fallback_item_width() -> f64 {
    320.0
}

fn default_resize_debounce() -> u64 {
    120
}

fn default_tick_rate() -> u64 {
    100
}

fn default_panels() -> Vec<String> {
    ["About", "Skills", "Projects", "Works", "Contact"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_carousel_panel() -> usize {
    2
}

fn default_cards() -> Vec<String> {
    ["Atlas", "Beacon", "Cinder", "Drift", "Ember"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_card_width() -> u16 {
    24
}

fn default_card_gap() -> u16 {
    2
}

fn default_cell_scale() -> f64 {
    10.0
}

fn default_wheel_step() -> f64 {
    100.0
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Reject tunables that would make an engine unreachable or unstable
    pub fn validate(&self) -> crate::Result<()> {
        let pager = &self.pager;
        if pager.wheel_threshold <= 0.0 || pager.intro_threshold <= 0.0 {
            return Err(crate::Error::Config(
                "pager wheel thresholds must be positive".to_string(),
            ));
        }
        if !(pager.smoothing_factor > 0.0 && pager.smoothing_factor <= 1.0) {
            return Err(crate::Error::Config(format!(
                "pager.smoothing_factor must be in (0, 1], got {}",
                pager.smoothing_factor
            )));
        }
        if pager.smoothing_epsilon <= 0.0 {
            return Err(crate::Error::Config(
                "pager.smoothing_epsilon must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&pager.reveal_ratio) {
            return Err(crate::Error::Config(format!(
                "pager.reveal_ratio must be in [0, 1], got {}",
                pager.reveal_ratio
            )));
        }
        if self.carousel.drag_threshold_px <= 0.0 || self.carousel.drag_threshold_ratio <= 0.0 {
            return Err(crate::Error::Config(
                "carousel drag thresholds must be positive".to_string(),
            ));
        }
        if self.ui.cell_scale <= 0.0 {
            return Err(crate::Error::Config(
                "ui.cell_scale must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/slidetrack/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("slidetrack")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("slidetrack.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tunables() {
        let config = AppConfig::default();
        assert_eq!(config.pager.wheel_threshold, 140.0);
        assert_eq!(config.pager.step_lock_ms, 640);
        assert_eq!(config.pager.step_easing, EasingType::CubicInOut);
        assert_eq!(config.carousel.transition_ms, 260);
        assert_eq!(config.carousel.completion_timeout(), Duration::from_millis(300));
        assert_eq!(config.carousel.easing, EasingType::Ease);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [pager]
            wheel_threshold = 200.0
            step_easing = "linear"

            [motion]
            reduced_motion = true
            "#,
        )
        .unwrap();
        assert_eq!(config.pager.wheel_threshold, 200.0);
        assert_eq!(config.pager.intro_threshold, 140.0);
        assert_eq!(config.pager.step_easing, EasingType::Linear);
        assert!(config.motion.reduced_motion);
        assert_eq!(config.ui.panels.len(), 5);
    }

    #[test]
    fn test_invalid_smoothing_rejected() {
        let err = AppConfig::from_toml("[pager]\nsmoothing_factor = 0.0\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_drag_threshold_uses_lesser_value() {
        let config = CarouselConfig::default();
        assert_eq!(config.drag_threshold(400.0), 90.0);
        assert_eq!(config.drag_threshold(200.0), 50.0);
    }

    #[test]
    fn test_narrow_breakpoint_inclusive() {
        let motion = MotionConfig::default();
        assert!(motion.is_narrow(1024.0));
        assert!(!motion.is_narrow(1025.0));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.keymap.quit, "q");
        assert_eq!(parsed.carousel.drag_threshold_px, 90.0);
    }
}
