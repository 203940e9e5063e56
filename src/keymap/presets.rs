//! Preset keymaps: Standard, Emacs
//!
//! Each preset provides a complete set of key bindings for all actions.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Standard keyboard navigation (arrows, Enter, Esc)
    #[default]
    Standard,
    /// Emacs-style line editing (Ctrl+A/E/B/F)
    Emacs,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

/// Standard keyboard bindings (arrows, Enter, Esc)
fn standard_bindings() -> Vec<KeyBinding> {
    vec![
        // Cursor
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        // Form
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("ctrl+r", Action::TogglePasswordVisibility),
        KeyBinding::new("ctrl+u", Action::ClearField),
        // Global
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("f1", Action::Help),
        // Text editing
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
        // Field navigation
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("backtab", Action::PrevTab),
        KeyBinding::new("shift+backtab", Action::PrevTab),
        KeyBinding::new("down", Action::NextTab),
        KeyBinding::new("up", Action::PrevTab),
    ]
}

/// Emacs-style bindings
fn emacs_bindings() -> Vec<KeyBinding> {
    vec![
        // Cursor - emacs style + arrows
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("ctrl+a", Action::Home),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("ctrl+e", Action::End),
        KeyBinding::new("end", Action::End),
        // Form
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("ctrl+g", Action::Cancel), // C-g is cancel in emacs
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("ctrl+r", Action::TogglePasswordVisibility),
        KeyBinding::new("ctrl+k", Action::ClearField),
        // Global
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("f1", Action::Help),
        // Text editing
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("ctrl+h", Action::Backspace),
        KeyBinding::new("ctrl+d", Action::DeleteChar),
        KeyBinding::new("delete", Action::DeleteChar),
        // Field navigation
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("ctrl+n", Action::NextTab),
        KeyBinding::new("backtab", Action::PrevTab),
        KeyBinding::new("shift+backtab", Action::PrevTab),
        KeyBinding::new("ctrl+p", Action::PrevTab),
    ]
}
