//! Shared test utilities for the sign-in flow tests.
//!
//! Provides `StubProvider`, an in-memory `AuthProvider` with a scripted
//! outcome, and `RecordingNotifier`, which keeps every notification it is
//! handed so tests can assert on them.

#![allow(dead_code)]

use async_trait::async_trait;
use signin::auth::{AuthError, AuthProvider, AuthUser};
use signin::notify::{Notification, Notifier};
use signin::screens::{Screen, ScreenAction, SignInScreen};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

/// What the stub answers to every sign-in attempt
#[derive(Debug, Clone)]
pub enum Outcome {
    Accept,
    Reject(AuthError),
}

/// Scripted `AuthProvider` that records what it was asked
pub struct StubProvider {
    outcome: Outcome,
    calls: AtomicUsize,
    last_credentials: Mutex<Option<(String, String)>>,
    gate: Option<Arc<Notify>>,
}

impl StubProvider {
    pub fn accepting() -> Self {
        Self::with_outcome(Outcome::Accept)
    }

    pub fn rejecting() -> Self {
        Self::with_outcome(Outcome::Reject(AuthError::Rejected {
            code: "INVALID_PASSWORD".to_string(),
        }))
    }

    pub fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_credentials: Mutex::new(None),
            gate: None,
        }
    }

    /// Hold every call until `gate.notify_one()` is called
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_credentials(&self) -> Option<(String, String)> {
        self.last_credentials.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthProvider for StubProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_credentials.lock().unwrap() = Some((email.to_string(), password.to_string()));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.outcome {
            Outcome::Accept => Ok(AuthUser {
                id: "uid-42".to_string(),
                email: email.to_string(),
            }),
            Outcome::Reject(err) => Err(err.clone()),
        }
    }
}

/// Notifier that keeps everything it receives
#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

/// A screen wired to the given provider plus the notifier it reports to
pub fn sign_in_screen(
    provider: Arc<StubProvider>,
    delay: Duration,
) -> (SignInScreen, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let screen = SignInScreen::new(
        provider,
        notifier.clone(),
        tokio::runtime::Handle::current(),
    )
    .with_submit_delay(delay);
    (screen, notifier)
}

/// Tick the screen until it stops loading, collecting non-trivial actions
pub async fn settle(screen: &mut SignInScreen) -> Vec<ScreenAction> {
    let mut actions = Vec::new();
    for _ in 0..400 {
        if !screen.is_loading() {
            return actions;
        }
        match screen.tick() {
            ScreenAction::None | ScreenAction::Refresh => {}
            action => actions.push(action),
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("sign-in did not settle");
}

/// Tick until the provider call has settled (success or entering cool-down)
pub async fn wait_for_response(screen: &mut SignInScreen) -> ScreenAction {
    for _ in 0..400 {
        let action = screen.tick();
        if action != ScreenAction::None {
            return action;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("provider call never settled");
}
