//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions on the sign-in form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Cursor movement ============
    /// Move the cursor left inside the focused input
    MoveLeft,
    /// Move the cursor right inside the focused input
    MoveRight,
    /// Jump to start of input
    Home,
    /// Jump to end of input
    End,

    // ============ Form ============
    /// Submit the form (Enter)
    Confirm,
    /// Leave the form (Esc)
    Cancel,
    /// Show or hide the password
    TogglePasswordVisibility,
    /// Clear the focused input
    ClearField,

    // ============ Global ============
    /// Quit the application
    Quit,
    /// Show help overlay
    Help,

    // ============ Text editing ============
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,

    // ============ Field navigation ============
    /// Move to next field
    NextTab,
    /// Move to previous field
    PrevTab,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::Home => "Home",
            Action::End => "End",
            Action::Confirm => "Sign in",
            Action::Cancel => "Cancel / Quit",
            Action::TogglePasswordVisibility => "Show / hide password",
            Action::ClearField => "Clear field",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
            Action::NextTab => "Next field",
            Action::PrevTab => "Previous field",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveLeft | Action::MoveRight | Action::Home | Action::End => "Navigation",

            Action::Confirm
            | Action::Cancel
            | Action::TogglePasswordVisibility
            | Action::ClearField => "Form",

            Action::Quit | Action::Help => "Global",

            Action::Backspace | Action::DeleteChar => "Text Editing",

            Action::NextTab | Action::PrevTab => "Field Navigation",
        }
    }

    /// Whether this action should still fire while a text field has focus.
    ///
    /// Actions bound to printable keys (like `q` or `?`) return false so the
    /// key is typed into the field instead.
    pub fn allowed_while_typing(&self) -> bool {
        !matches!(self, Action::Quit | Action::Help)
    }
}
