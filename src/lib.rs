//! signin - email/password sign-in form for the terminal
//!
//! This library provides the sign-in screen controller, the authentication
//! provider seam and its Identity Toolkit implementation, and the terminal
//! shell that hosts them.

// Core modules
pub mod app;
pub mod auth;
pub mod cli;
pub mod components;
pub mod config;
pub mod i18n;
pub mod keymap;
pub mod notify;
pub mod screens;
pub mod services;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use auth::{AuthError, AuthProvider, AuthUser, IdentityToolkitProvider};
pub use config::Config;
pub use i18n::Locale;
pub use notify::{Notification, Notifier, Severity};
pub use screens::{SignInError, SignInScreen};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
