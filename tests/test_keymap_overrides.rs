use crossterm::event::{KeyCode, KeyModifiers};
use signin::config::Config;
use signin::keymap::{Action, KeyBinding, Keymap, KeymapPreset};
use tempfile::TempDir;

#[test]
fn test_keymap_override_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    // Create a config with keymap overrides
    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Emacs;

    // Submit with ctrl+s instead of enter
    config
        .keymap
        .overrides
        .push(KeyBinding::new("ctrl+s", Action::Confirm));
    // Toggle password visibility with f2 instead of ctrl+r
    config
        .keymap
        .overrides
        .push(KeyBinding::new("f2", Action::TogglePasswordVisibility));

    config.save(&config_path).unwrap();
    let loaded = Config::load_or_create(&config_path).unwrap();

    assert_eq!(loaded.keymap.preset, KeymapPreset::Emacs);
    assert_eq!(loaded.keymap.overrides.len(), 2);

    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('s'), KeyModifiers::CONTROL),
        Some(Action::Confirm)
    );
    assert_eq!(
        loaded.keymap.get_action(KeyCode::F(2), KeyModifiers::NONE),
        Some(Action::TogglePasswordVisibility)
    );

    // Preset bindings for overridden actions are shadowed
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Enter, KeyModifiers::NONE),
        None
    );
    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('r'), KeyModifiers::CONTROL),
        None
    );

    // Untouched emacs bindings still work
    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('n'), KeyModifiers::CONTROL),
        Some(Action::NextTab)
    );
}

#[test]
fn test_footer_reflects_overrides() {
    let keymap = Keymap {
        preset: KeymapPreset::Standard,
        overrides: vec![
            KeyBinding::new("ctrl+s", Action::Confirm),
            KeyBinding::new("ctrl+q", Action::Cancel),
        ],
    };

    let footer = keymap.footer_sign_in();
    assert!(
        footer.contains("Sign in: Ctrl+S"),
        "footer should show the override, got: '{}'",
        footer
    );
    assert!(
        footer.contains("Quit: Ctrl+Q"),
        "footer should show the override, got: '{}'",
        footer
    );
    assert!(!footer.contains("Enter"), "enter is shadowed, got: '{}'", footer);
}

#[test]
fn test_invalid_override_is_ignored() {
    let keymap = Keymap {
        preset: KeymapPreset::Standard,
        overrides: vec![KeyBinding::new("hyper+x", Action::Confirm)],
    };

    // The bad override never matches but still shadows the preset binding
    assert_eq!(keymap.get_action(KeyCode::Enter, KeyModifiers::NONE), None);
    assert_eq!(
        keymap.get_action(KeyCode::Tab, KeyModifiers::NONE),
        Some(Action::NextTab)
    );
}
