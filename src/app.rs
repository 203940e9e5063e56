use crate::auth::{AuthProvider, AuthUser};
use crate::components::{Footer, Header};
use crate::config::Config;
use crate::notify::{self, NotificationReceiver};
use crate::screens::sign_in::FormField;
use crate::screens::{RenderContext, Screen, ScreenAction, ScreenContext, SignInScreen};
use crate::tui::Tui;
use crate::utils::create_standard_layout;
use crate::widgets::ToastManager;
use anyhow::{Context, Result};
use crossterm::event::Event;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{debug, info};

/// Poll interval while nothing is in flight
const IDLE_POLL: Duration = Duration::from_millis(250);
/// Poll interval while a request, cool-down or toast is pending
const BUSY_POLL: Duration = Duration::from_millis(50);

/// Main application state
pub struct App {
    config: Config,
    tui: Tui,
    screen: SignInScreen,
    /// Worker threads for the screen's sign-in calls
    #[allow(dead_code)]
    runtime: Runtime,
    toasts: ToastManager,
    notifications: NotificationReceiver,
    session: Option<AuthUser>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, provider: Arc<dyn AuthProvider>, email: Option<String>) -> Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let (notifier, notifications) = notify::channel();

        let mut screen = SignInScreen::new(provider, Arc::new(notifier), runtime.handle().clone())
            .with_locale(config.locale)
            .with_submit_delay(config.submit_delay());
        if let Some(email) = email {
            screen.set_field(FormField::Email, &email);
        }

        let tui = Tui::new()?;

        Ok(Self {
            config,
            tui,
            screen,
            runtime,
            toasts: ToastManager::new(),
            notifications,
            session: None,
            should_quit: false,
        })
    }

    /// Run the event loop until the user quits or signs in.
    ///
    /// Returns the signed-in user, if any.
    pub fn run(&mut self) -> Result<Option<AuthUser>> {
        self.tui.enter()?;
        self.screen.on_enter(&ScreenContext::new(&self.config))?;
        info!("Sign-in form opened");

        let result = self.event_loop();

        self.screen.on_exit(&ScreenContext::new(&self.config))?;
        self.tui.exit()?;
        result.map(|_| self.session.take())
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            for notification in self.notifications.drain() {
                self.toasts.apply(notification);
            }
            self.toasts.tick();

            self.draw()?;

            if self.should_quit {
                return Ok(());
            }

            let timeout = if self.screen.needs_tick() || self.toasts.has_toast() {
                BUSY_POLL
            } else {
                IDLE_POLL
            };

            if let Some(event) = self.tui.poll_event(timeout)? {
                self.handle_event(event)?;
            }

            if self.screen.needs_tick() {
                let action = self.screen.tick();
                self.apply_action(action);
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let description = if self.screen.is_loading() {
            "Signing in..."
        } else {
            "Sign in with your email and password"
        };
        let footer_text = self.config.keymap.footer_sign_in();
        let config = &self.config;
        let screen = &mut self.screen;
        let toasts = &self.toasts;

        let mut render_result = Ok(());
        self.tui.terminal_mut().draw(|frame| {
            let area = frame.area();
            let [header_area, content_area, footer_area] = create_standard_layout(area, 3, 2);

            render_result = Header::render(frame, header_area, " signin ", description)
                .and_then(|_| screen.render(frame, content_area, &RenderContext::new(config)))
                .and_then(|_| Footer::render(frame, footer_area, &footer_text).map(|_| ()));

            toasts.render(frame, area);
        })?;
        render_result
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Resize(width, height) = event {
            debug!("Terminal resized to {}x{}", width, height);
            return Ok(());
        }
        let action = self
            .screen
            .handle_event(event, &ScreenContext::new(&self.config))?;
        self.apply_action(action);
        Ok(())
    }

    fn apply_action(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None | ScreenAction::Refresh => {}
            ScreenAction::SignedIn(user) => {
                self.session = Some(user);
                self.should_quit = true;
            }
            ScreenAction::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }
}
