//! Sign-in screen controller.
//!
//! Collects an email and password, hands them to the configured
//! [`AuthProvider`] and reports the outcome. Rejections surface through the
//! injected [`Notifier`], after which the form stays locked for a short
//! cool-down before another attempt is accepted.

use crate::auth::{AuthError, AuthProvider};
use crate::components::HelpOverlay;
use crate::i18n::Locale;
use crate::keymap::Action;
use crate::notify::{Notification, Notifier};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::services::{SignInHandle, SignInService};
use crate::styles::theme;
use crate::utils::{center_fixed, contains, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

/// Cool-down after a rejected or empty submit
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

const FORM_WIDTH: u16 = 44;
const FORM_HEIGHT: u16 = 13;

/// Editable fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Password,
}

/// Which element of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignInFocus {
    #[default]
    Email,
    Password,
    Submit,
}

impl SignInFocus {
    fn next(self) -> Self {
        match self {
            SignInFocus::Email => SignInFocus::Password,
            SignInFocus::Password => SignInFocus::Submit,
            SignInFocus::Submit => SignInFocus::Email,
        }
    }

    fn prev(self) -> Self {
        match self {
            SignInFocus::Email => SignInFocus::Submit,
            SignInFocus::Password => SignInFocus::Email,
            SignInFocus::Submit => SignInFocus::Password,
        }
    }
}

/// Form contents owned by the screen
#[derive(Debug, Clone, Default)]
pub struct SignInState {
    pub email: TextInput,
    pub password: TextInput,
    /// Password shown in clear text instead of masked
    pub password_visible: bool,
    pub focus: SignInFocus,
}

impl SignInState {
    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            SignInFocus::Email => Some(&mut self.email),
            SignInFocus::Password => Some(&mut self.password),
            SignInFocus::Submit => None,
        }
    }
}

/// Why a submit did not sign the user in
#[derive(Debug, Error)]
pub enum SignInError {
    #[error("email or password is empty")]
    EmptyFields,
    #[error("authentication failed: {0}")]
    AuthenticationFailed(#[from] AuthError),
}

impl SignInError {
    /// Text shown to the user; provider details are never exposed
    pub fn message(&self, locale: Locale) -> &'static str {
        match self {
            SignInError::EmptyFields => locale.empty_fields(),
            SignInError::AuthenticationFailed(_) => locale.authentication_failed(),
        }
    }
}

#[derive(Debug)]
enum Phase {
    Idle,
    Submitting(SignInHandle),
    CoolingDown { until: Instant },
}

/// Screen regions recorded at render time for mouse hit testing
#[derive(Debug, Clone, Copy, Default)]
struct ClickAreas {
    email: Rect,
    password: Rect,
    visibility: Option<Rect>,
    button: Rect,
}

/// Sign-in screen controller.
pub struct SignInScreen {
    state: SignInState,
    phase: Phase,
    provider: Arc<dyn AuthProvider>,
    notifier: Arc<dyn Notifier>,
    runtime: Handle,
    locale: Locale,
    submit_delay: Duration,
    show_help: bool,
    areas: ClickAreas,
}

impl SignInScreen {
    /// Create a screen that signs in through `provider` and reports problems
    /// through `notifier`. Provider calls are spawned on `runtime`.
    pub fn new(provider: Arc<dyn AuthProvider>, notifier: Arc<dyn Notifier>, runtime: Handle) -> Self {
        Self {
            state: SignInState::default(),
            phase: Phase::Idle,
            provider,
            notifier,
            runtime,
            locale: Locale::default(),
            submit_delay: DEFAULT_SUBMIT_DELAY,
            show_help: false,
            areas: ClickAreas::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn state(&self) -> &SignInState {
        &self.state
    }

    /// Replace the contents of a field. No validation happens here.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Email => self.state.email.set_text(value),
            FormField::Password => self.state.password.set_text(value),
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.state.password_visible = !self.state.password_visible;
    }

    /// True from an accepted submit until the attempt has fully settled
    pub fn is_loading(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Submit the form.
    ///
    /// Ignored while a previous attempt is loading. Empty fields are rejected
    /// locally; otherwise the provider call is started in the background and
    /// its outcome is picked up by [`Screen::tick`].
    pub fn submit(&mut self) {
        if self.is_loading() {
            debug!("Submit ignored: previous attempt still in progress");
            return;
        }

        let email = self.state.email.text_trimmed().to_string();
        let password = self.state.password.text().to_string();
        if email.is_empty() || password.is_empty() {
            self.reject(SignInError::EmptyFields);
            return;
        }

        info!("Submitting sign-in form");
        let handle = SignInService::start(&self.runtime, Arc::clone(&self.provider), email, password);
        self.phase = Phase::Submitting(handle);
    }

    fn reject(&mut self, error: SignInError) {
        warn!("Sign-in not completed: {}", error);
        self.notifier
            .notify(Notification::info(error.message(self.locale)));
        self.phase = Phase::CoolingDown {
            until: Instant::now() + self.submit_delay,
        };
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        if self.show_help {
            self.show_help = false;
            return ScreenAction::Refresh;
        }

        let typing = self.is_input_focused();
        let action = ctx
            .config
            .keymap
            .get_action(key.code, key.modifiers)
            .filter(|action| !(typing && !action.allowed_while_typing() && is_text_key(&key)));

        if let Some(action) = action {
            match action {
                Action::Confirm => {
                    self.submit();
                    return ScreenAction::Refresh;
                }
                Action::Cancel | Action::Quit => return ScreenAction::Quit,
                Action::TogglePasswordVisibility => {
                    self.toggle_password_visibility();
                    return ScreenAction::Refresh;
                }
                Action::Help => {
                    self.show_help = true;
                    return ScreenAction::Refresh;
                }
                Action::NextTab => {
                    self.state.focus = self.state.focus.next();
                    return ScreenAction::Refresh;
                }
                Action::PrevTab => {
                    self.state.focus = self.state.focus.prev();
                    return ScreenAction::Refresh;
                }
                other => {
                    if let Some(input) = self.state.focused_input_mut() {
                        if input.handle_action(other) {
                            return ScreenAction::Refresh;
                        }
                    }
                }
            }
        }

        if !is_text_key(&key) {
            return ScreenAction::None;
        }

        match self.state.focused_input_mut() {
            Some(input) => {
                if input.handle_key(key.code) {
                    ScreenAction::Refresh
                } else {
                    ScreenAction::None
                }
            }
            None if key.code == KeyCode::Char(' ') => {
                self.submit();
                ScreenAction::Refresh
            }
            None => ScreenAction::None,
        }
    }

    fn email_widget(&self) -> TextInputWidget<'_> {
        TextInputWidget::new(&self.state.email)
            .title("Email")
            .placeholder("you@example.com")
    }

    fn password_widget(&self) -> TextInputWidget<'_> {
        let eye = if self.state.password_visible {
            " hide "
        } else {
            " show "
        };
        TextInputWidget::new(&self.state.password)
            .title("Password")
            .masked(!self.state.password_visible)
            .suffix(Span::styled(eye, theme().muted_style()))
    }

    /// Move the cursor to the clicked cell without shifting the visible text
    fn click_field(&mut self, field: FormField, column: u16) {
        let (scroll, cursor) = {
            let (widget, area) = match field {
                FormField::Email => (self.email_widget(), self.areas.email),
                FormField::Password => (self.password_widget(), self.areas.password),
            };
            (
                widget.scroll_offset(area),
                widget.cursor_at_column(area, column),
            )
        };
        let input = match field {
            FormField::Email => &mut self.state.email,
            FormField::Password => &mut self.state.password,
        };
        input.set_scroll(scroll);
        input.set_cursor(cursor);
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> ScreenAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || self.show_help {
            return ScreenAction::None;
        }
        let (column, row) = (mouse.column, mouse.row);

        // The eye indicator sits inside the password box, so test it first
        if self
            .areas
            .visibility
            .is_some_and(|area| contains(area, column, row))
        {
            self.toggle_password_visibility();
            return ScreenAction::Refresh;
        }

        if contains(self.areas.email, column, row) {
            self.state.focus = SignInFocus::Email;
            self.click_field(FormField::Email, column);
            return ScreenAction::Refresh;
        }

        if contains(self.areas.password, column, row) {
            self.state.focus = SignInFocus::Password;
            self.click_field(FormField::Password, column);
            return ScreenAction::Refresh;
        }

        if contains(self.areas.button, column, row) {
            self.state.focus = SignInFocus::Submit;
            self.submit();
            return ScreenAction::Refresh;
        }

        ScreenAction::None
    }
}

/// Printable key without Ctrl/Alt, i.e. something that would be typed
fn is_text_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(_))
        && !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

impl Screen for SignInScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let loading = self.is_loading();
        let focus = self.state.focus;

        let form_area = center_fixed(area, FORM_WIDTH, FORM_HEIGHT);
        let form_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .title(" Login ")
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::new(2, 2, 1, 0));
        let inner = form_block.inner(form_area);
        frame.render_widget(form_block, form_area);

        let [email_area, password_area, _, button_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(inner);

        let email = self
            .email_widget()
            .focused(focus == SignInFocus::Email && !self.show_help);
        let email_scroll = email.scroll_offset(email_area);
        frame.render_text_input_widget(email, email_area);
        self.state.email.set_scroll(email_scroll);

        let password = self
            .password_widget()
            .focused(focus == SignInFocus::Password && !self.show_help);
        let visibility = password.suffix_area(password_area);
        let password_scroll = password.scroll_offset(password_area);
        frame.render_text_input_widget(password, password_area);
        self.state.password.set_scroll(password_scroll);

        let label = if loading { "Loading..." } else { "Login" };
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(Block::default().padding(Padding::top(1)))
            .style(t.button_style(focus == SignInFocus::Submit, loading));
        frame.render_widget(button, button_area);

        self.areas = ClickAreas {
            email: email_area,
            password: password_area,
            visibility,
            button: button_area,
        };

        if self.show_help {
            HelpOverlay::render(frame, area, &ctx.config.keymap)?;
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let action = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, ctx),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => match self.state.focused_input_mut() {
                Some(input) => {
                    text.chars().for_each(|c| input.insert_char(c));
                    ScreenAction::Refresh
                }
                None => ScreenAction::None,
            },
            _ => ScreenAction::None,
        };
        Ok(action)
    }

    fn is_input_focused(&self) -> bool {
        self.state.focus != SignInFocus::Submit && !self.show_help
    }

    fn needs_tick(&self) -> bool {
        self.is_loading()
    }

    fn tick(&mut self) -> ScreenAction {
        let settled = match &mut self.phase {
            Phase::Idle => return ScreenAction::None,
            Phase::CoolingDown { until } => {
                if Instant::now() < *until {
                    return ScreenAction::None;
                }
                debug!("Sign-in cool-down finished");
                self.phase = Phase::Idle;
                return ScreenAction::Refresh;
            }
            Phase::Submitting(handle) => match handle.try_recv() {
                Some(result) => result,
                None => return ScreenAction::None,
            },
        };

        match settled {
            Ok(user) => {
                info!("Signed in as user id {}", user.id);
                self.phase = Phase::Idle;
                ScreenAction::SignedIn(user)
            }
            Err(e) => {
                self.reject(SignInError::AuthenticationFailed(e));
                ScreenAction::Refresh
            }
        }
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.state.focus = SignInFocus::Email;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthUser;
    use crate::config::Config;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RejectingProvider;

    #[async_trait]
    impl AuthProvider for RejectingProvider {
        async fn sign_in(&self, _email: &str, _password: &str) -> Result<AuthUser, AuthError> {
            Err(AuthError::Rejected {
                code: "EMAIL_NOT_FOUND".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct Collect(Mutex<Vec<Notification>>);

    impl Notifier for Collect {
        fn notify(&self, notification: Notification) {
            self.0.lock().unwrap().push(notification);
        }
    }

    fn screen(runtime: &tokio::runtime::Runtime) -> (SignInScreen, Arc<Collect>) {
        let notifier = Arc::new(Collect::default());
        let screen = SignInScreen::new(
            Arc::new(RejectingProvider),
            notifier.clone(),
            runtime.handle().clone(),
        );
        (screen, notifier)
    }

    fn press(screen: &mut SignInScreen, config: &Config, code: KeyCode, modifiers: KeyModifiers) -> ScreenAction {
        let ctx = ScreenContext::new(config);
        screen
            .handle_event(Event::Key(KeyEvent::new(code, modifiers)), &ctx)
            .unwrap()
    }

    #[test]
    fn test_focus_cycles_through_form() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (mut screen, _) = screen(&runtime);
        let config = Config::default();

        assert_eq!(screen.state().focus, SignInFocus::Email);
        press(&mut screen, &config, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(screen.state().focus, SignInFocus::Password);
        press(&mut screen, &config, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(screen.state().focus, SignInFocus::Submit);
        assert!(!screen.is_input_focused());
        press(&mut screen, &config, KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(screen.state().focus, SignInFocus::Password);
    }

    #[test]
    fn test_q_is_typed_into_fields() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (mut screen, _) = screen(&runtime);
        let config = Config::default();

        let action = press(&mut screen, &config, KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(action, ScreenAction::Refresh);
        assert_eq!(screen.state().email.text(), "q");
    }

    #[test]
    fn test_ctrl_c_quits_while_typing() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (mut screen, _) = screen(&runtime);
        let config = Config::default();

        let action = press(&mut screen, &config, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action, ScreenAction::Quit);
        assert!(screen.state().email.text().is_empty());
    }

    #[test]
    fn test_toggle_binding() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (mut screen, _) = screen(&runtime);
        let config = Config::default();

        press(&mut screen, &config, KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert!(screen.state().password_visible);
    }

    #[test]
    fn test_empty_submit_notifies_and_cools_down() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (screen, notifier) = screen(&runtime);
        let mut screen = screen.with_submit_delay(Duration::from_secs(60));

        screen.set_field(FormField::Email, "   ");
        screen.set_field(FormField::Password, "secret");
        screen.submit();

        assert!(screen.is_loading());
        assert_eq!(screen.tick(), ScreenAction::None);
        let seen = notifier.0.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], Notification::info(Locale::En.empty_fields()));
    }

    #[test]
    fn test_rejection_message_is_localized() {
        let err = SignInError::from(AuthError::Transport("offline".to_string()));
        assert_eq!(err.message(Locale::Ru), Locale::Ru.authentication_failed());
        assert_eq!(SignInError::EmptyFields.message(Locale::En), Locale::En.empty_fields());
    }

    #[test]
    fn test_mouse_click_on_eye_toggles() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (mut screen, _) = screen(&runtime);
        let config = Config::default();
        screen.areas = ClickAreas {
            email: Rect::new(0, 0, 20, 3),
            password: Rect::new(0, 3, 20, 3),
            visibility: Some(Rect::new(13, 4, 6, 1)),
            button: Rect::new(0, 7, 20, 3),
        };

        let click = |column, row| {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })
        };
        let ctx = ScreenContext::new(&config);

        screen.handle_event(click(15, 4), &ctx).unwrap();
        assert!(screen.state().password_visible);
        assert_eq!(screen.state().focus, SignInFocus::Email);

        screen.handle_event(click(2, 4), &ctx).unwrap();
        assert_eq!(screen.state().focus, SignInFocus::Password);

        screen.handle_event(click(5, 8), &ctx).unwrap();
        assert_eq!(screen.state().focus, SignInFocus::Submit);
        assert!(screen.is_loading());
    }

    #[test]
    fn test_click_in_scrolled_email_places_cursor_on_visible_char() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (mut screen, _) = screen(&runtime);
        let config = Config::default();
        screen.areas = ClickAreas {
            email: Rect::new(0, 0, 20, 3),
            password: Rect::new(0, 3, 20, 3),
            visibility: None,
            button: Rect::new(0, 7, 20, 3),
        };
        // 26 chars in 18 cells: the window starts at 'j'
        screen.set_field(FormField::Email, "abcdefghijklmnopqrstuvwxyz");

        let ctx = ScreenContext::new(&config);
        let click = |column| {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row: 1,
                modifiers: KeyModifiers::NONE,
            })
        };

        screen.handle_event(click(1), &ctx).unwrap();
        assert_eq!(screen.state().email.cursor(), 9);
        screen.handle_event(click(3), &ctx).unwrap();
        assert_eq!(screen.state().email.cursor(), 11);
    }

    #[test]
    fn test_help_overlay_closes_on_any_key() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (mut screen, _) = screen(&runtime);
        let config = Config::default();

        press(&mut screen, &config, KeyCode::F(1), KeyModifiers::NONE);
        assert!(screen.show_help);
        assert!(!screen.is_input_focused());
        press(&mut screen, &config, KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(!screen.show_help);
        assert!(screen.state().email.text().is_empty());
    }
}
