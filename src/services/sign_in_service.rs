//! Sign-in request runner.
//!
//! The provider call runs as a task on the shell's tokio runtime and reports
//! back through a oneshot channel, so the UI loop never blocks on the network.
//! The screen polls the returned handle on each tick.

use crate::auth::{AuthError, AuthProvider, AuthUser};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

/// Handle for polling an in-flight sign-in
#[derive(Debug)]
pub struct SignInHandle {
    receiver: oneshot::Receiver<Result<AuthUser, AuthError>>,
}

impl SignInHandle {
    /// Try to receive the result without blocking
    pub fn try_recv(&mut self) -> Option<Result<AuthUser, AuthError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(AuthError::Transport(
                "sign-in task ended without a result".to_string(),
            ))),
        }
    }
}

/// Service that starts provider calls off the UI thread
pub struct SignInService;

impl SignInService {
    /// Spawn `provider.sign_in(email, password)` on `runtime`.
    ///
    /// Returns a `SignInHandle` that can be polled for the result.
    pub fn start(
        runtime: &Handle,
        provider: Arc<dyn AuthProvider>,
        email: String,
        password: String,
    ) -> SignInHandle {
        let (sender, receiver) = oneshot::channel();

        debug!("Starting sign-in for {}", email);
        runtime.spawn(async move {
            let result = provider.sign_in(&email, &password).await;
            match &result {
                Ok(user) => info!("Sign-in succeeded for user id {}", user.id),
                Err(e) => warn!("Sign-in failed: {}", e),
            }
            let _ = sender.send(result);
        });

        SignInHandle { receiver }
    }
}
