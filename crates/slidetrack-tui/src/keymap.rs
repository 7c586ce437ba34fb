use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use slidetrack_core::config::KeymapConfig;
use slidetrack_core::Key;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Runtime keymap for key-to-action lookup
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
    /// Action bound to the "gg" sequence, if any
    pending_g_action: Option<Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();
        let mut pending_g_action = None;

        let mut add_binding = |key_str: &str, action: Action| {
            if key_str == "gg" {
                pending_g_action = Some(action);
                return;
            }

            if let Some(binding) = parse_key_binding(key_str) {
                if let Some(existing) = bindings.get(&binding) {
                    warn!(
                        "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                        key_str, existing, action
                    );
                } else {
                    bindings.insert(binding, action);
                }
            } else {
                warn!("Invalid key binding: '{}', ignoring", key_str);
            }
        };

        add_binding(&config.quit, Action::Quit);
        add_binding(&config.wheel_down, Action::WheelDown);
        add_binding(&config.wheel_up, Action::WheelUp);
        add_binding(&config.next_panel, Action::NextPanel);
        add_binding(&config.return_top, Action::ReturnTop);
        add_binding(&config.carousel_prev, Action::CarouselPrev);
        add_binding(&config.carousel_next, Action::CarouselNext);
        add_binding(&config.toggle_focus, Action::ToggleFocus);
        add_binding(&config.toggle_motion, Action::ToggleMotion);

        // Ctrl+C always quits
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);

        // Page navigation keys are fixed
        let nav = [
            (KeyBinding::simple(KeyCode::Down), Key::ArrowDown, false),
            (KeyBinding::simple(KeyCode::Up), Key::ArrowUp, false),
            (KeyBinding::simple(KeyCode::Left), Key::ArrowLeft, false),
            (KeyBinding::simple(KeyCode::Right), Key::ArrowRight, false),
            (KeyBinding::simple(KeyCode::PageDown), Key::PageDown, false),
            (KeyBinding::simple(KeyCode::PageUp), Key::PageUp, false),
            (KeyBinding::simple(KeyCode::Char(' ')), Key::Space, false),
            (KeyBinding::shift(KeyCode::Char(' ')), Key::Space, true),
        ];
        for (binding, key, shift) in nav {
            bindings.entry(binding).or_insert(Action::Nav { key, shift });
        }

        Self {
            bindings,
            pending_g_action,
        }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    /// Check if "gg" sequence is configured
    pub fn has_pending_g(&self) -> bool {
        self.pending_g_action.is_some()
    }

    /// Get the action for completed "gg" sequence
    pub fn get_pending_g_action(&self) -> Option<&Action> {
        self.pending_g_action.as_ref()
    }

    /// Check if a single 'g' press should start a pending sequence
    pub fn is_g_prefix(&self, binding: &KeyBinding) -> bool {
        self.pending_g_action.is_some()
            && binding.code == KeyCode::Char('g')
            && binding.modifiers == KeyModifiers::NONE
    }
}

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "j", "k", "h", "l", "q", etc.
/// - Uppercase (Shift): "G", "N", etc.
/// - Ctrl: "<C-j>", "<C-k>", etc.
/// - Shift: "<S-Tab>", "<S-Space>", etc.
/// - Special keys: "<CR>", "<Esc>", "<Tab>", "<Space>", "<Left>", "<Right>", "<Up>", "<Down>"
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if s.starts_with('<') && s.ends_with('>') && s.len() > 2 {
        let inner = &s[1..s.len() - 1];
        return parse_special_key(inner);
    }

    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        // Multi-key sequences other than "gg" are not supported
        return None;
    }
    if c.is_ascii_uppercase() {
        return Some(KeyBinding::shift(KeyCode::Char(c)));
    }
    Some(KeyBinding::simple(KeyCode::Char(c)))
}

/// Parse special key notation (content inside <...>)
fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::ctrl(key));
    }

    if let Some(rest) = inner.strip_prefix("S-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::shift(key));
    }

    parse_key_name(inner).map(KeyBinding::simple)
}

/// Parse a key name (without modifiers)
fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c.to_ascii_lowercase())),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_keys() {
        assert_eq!(
            parse_key_binding("j"),
            Some(KeyBinding::simple(KeyCode::Char('j')))
        );
        assert_eq!(
            parse_key_binding("n"),
            Some(KeyBinding::simple(KeyCode::Char('n')))
        );
        assert_eq!(parse_key_binding("jk"), None);
        assert_eq!(parse_key_binding(""), None);
    }

    #[test]
    fn test_parse_uppercase_keys() {
        assert_eq!(
            parse_key_binding("G"),
            Some(KeyBinding::shift(KeyCode::Char('G')))
        );
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(
            parse_key_binding("<Tab>"),
            Some(KeyBinding::simple(KeyCode::Tab))
        );
        assert_eq!(
            parse_key_binding("<Space>"),
            Some(KeyBinding::simple(KeyCode::Char(' ')))
        );
        assert_eq!(
            parse_key_binding("<S-Tab>"),
            Some(KeyBinding::shift(KeyCode::Tab))
        );
        assert_eq!(
            parse_key_binding("<C-n>"),
            Some(KeyBinding::ctrl(KeyCode::Char('n')))
        );
        assert_eq!(parse_key_binding("<Nope>"), None);
    }

    #[test]
    fn test_keymap_from_config() {
        let keymap = Keymap::from_config(&KeymapConfig::default());

        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(&Action::Quit)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('j'))),
            Some(&Action::WheelDown)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Tab)),
            Some(&Action::ToggleFocus)
        );
        assert_eq!(
            keymap.get(&KeyBinding::shift(KeyCode::Char(' '))),
            Some(&Action::Nav {
                key: Key::Space,
                shift: true
            })
        );

        assert!(keymap.has_pending_g());
        assert_eq!(keymap.get_pending_g_action(), Some(&Action::ReturnTop));
    }

    #[test]
    fn test_conflicting_binding_keeps_first() {
        let config = KeymapConfig {
            next_panel: "q".to_string(),
            ..KeymapConfig::default()
        };
        let keymap = Keymap::from_config(&config);
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(&Action::Quit)
        );
    }

    #[test]
    fn test_configured_key_shadows_navigation() {
        let config = KeymapConfig {
            carousel_next: "<Right>".to_string(),
            ..KeymapConfig::default()
        };
        let keymap = Keymap::from_config(&config);
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Right)),
            Some(&Action::CarouselNext)
        );
    }
}
