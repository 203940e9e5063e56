//! Screen trait and associated types.
//!
//! Screens own their state, draw themselves and turn input events into a
//! [`ScreenAction`] for the application shell. Shared resources reach them
//! through read-only context objects.

use crate::auth::AuthUser;
use crate::config::Config;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

/// Context provided for handling events.
///
/// Gives access to configuration (keymap, locale) during event handling.
pub struct ScreenContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
}

impl<'a> ScreenContext<'a> {
    /// Create a new screen context.
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// State changed and the screen should be redrawn.
    Refresh,
    /// The provider accepted the credentials.
    SignedIn(AuthUser),
    /// Request to quit the application.
    Quit,
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// struct MyScreen {
///     state: MyState,
/// }
///
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         match event {
///             Event::Key(_) => Ok(ScreenAction::Refresh),
///             _ => Ok(ScreenAction::None),
///         }
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen within `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event and report what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Check if a text input is currently focused.
    ///
    /// When true, printable keybindings are typed instead of triggering actions.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Whether background work is pending and [`Screen::tick`] should be called.
    fn needs_tick(&self) -> bool {
        false
    }

    /// Advance background work (poll in-flight requests, expire timers).
    fn tick(&mut self) -> ScreenAction {
        ScreenAction::None
    }

    /// Called when the screen is entered.
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Called when the screen is exited.
    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
