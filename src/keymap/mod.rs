//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, emacs)
//! and user overrides loaded from the config file.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset
    /// Note: If an action is overridden, preset bindings for that action are ignored
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Get all bindings (overrides + preset) for display in help
    /// Overrides shadow preset bindings for the same action
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|preset| !self.overrides.iter().any(|o| o.action == preset.action)),
        );
        bindings
    }

    /// Get the display string for a specific action (e.g., Action::Confirm -> "Enter")
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map(KeyBinding::display)
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Footer text for the sign-in form
    pub fn footer_sign_in(&self) -> String {
        format!(
            "Sign in: {} | Next field: {} | Show password: {} | Quit: {}",
            self.get_key_display_for_action(Action::Confirm),
            self.get_key_display_for_action(Action::NextTab),
            self.get_key_display_for_action(Action::TogglePasswordVisibility),
            self.get_key_display_for_action(Action::Cancel),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert!(keymap.overrides.is_empty());
    }

    #[test]
    fn test_get_action_from_preset() {
        let keymap = Keymap::default();
        let action = keymap.get_action(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(action, Some(Action::Confirm));
        let action = keymap.get_action(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(action, Some(Action::TogglePasswordVisibility));
    }

    #[test]
    fn test_override_takes_precedence() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("f2", Action::TogglePasswordVisibility)],
        };
        let action = keymap.get_action(KeyCode::F(2), KeyModifiers::NONE);
        assert_eq!(action, Some(Action::TogglePasswordVisibility));
        // The preset binding for the same action is shadowed
        let action = keymap.get_action(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(action, None);
    }

    #[test]
    fn test_footer_reflects_overrides() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("f2", Action::TogglePasswordVisibility)],
        };
        assert!(keymap.footer_sign_in().contains("Show password: F2"));
    }
}
