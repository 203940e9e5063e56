//! Screen controllers for the application.
//!
//! Each screen controller implements the `Screen` trait, owns its state and
//! handles both rendering and events.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                      App                        │
//! │   event loop ─► screen.handle_event(..)         │
//! │   tick       ─► screen.tick()                   │
//! │   draw       ─► header / screen.render / footer │
//! └────────────────────────┬────────────────────────┘
//!                          │ ScreenAction
//!                          ▼
//! ┌─────────────────────────────────────────────────┐
//! │                  SignInScreen                   │
//! │   form state ─ submit ─► SignInService (tokio)  │
//! │   rejections ─► Notifier ─► App toasts          │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod screen_trait;
pub mod sign_in;

pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use sign_in::{FormField, SignInError, SignInFocus, SignInScreen, SignInState};
