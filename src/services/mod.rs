//! Application services layer.
//!
//! Services run work that must not block the UI loop and hand results back
//! through pollable handles.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  UI Layer (App, Screens)     │
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │  Services (SignInService)    │
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │  Infrastructure (AuthProvider│
//! │  implementations, Config)    │
//! └──────────────────────────────┘
//! ```

pub mod sign_in_service;

pub use sign_in_service::{SignInHandle, SignInService};
