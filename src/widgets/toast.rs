//! Toast notification widget.
//!
//! A non-blocking notification that appears in the corner of the screen
//! and auto-closes after a configurable duration. Does not shift UI elements
//! or block user interactions.

use crate::notify::{Notification, Severity};
use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};
use std::time::{Duration, Instant};

/// Default time a toast stays visible
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

/// Icon shown in front of the message
pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "\u{2714}", // ✔
        Severity::Info => "\u{2139}",    // ℹ
        Severity::Warning => "\u{26A0}", // ⚠
        Severity::Error => "\u{2718}",   // ✘
    }
}

/// Border color for a severity
pub fn severity_color(severity: Severity) -> Color {
    let t = theme();
    match severity {
        Severity::Success => t.success,
        Severity::Info => t.primary,
        Severity::Warning => t.warning,
        Severity::Error => t.error,
    }
}

/// Toast notification data
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    /// Create a new toast notification
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            created_at: Instant::now(),
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Set a custom duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Check if the toast has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Toast widget for rendering a toast notification
///
/// Renders in the bottom-right corner of the given area.
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    /// Calculate the toast area (bottom-right corner, above the footer)
    fn calculate_area(&self, area: Rect) -> Rect {
        let toast_width = 48u16.min(area.width.saturating_sub(4));
        // Long localized messages wrap onto a second line
        let text_width = toast_width.saturating_sub(4).max(1) as usize;
        let lines = (self.toast.message.chars().count() + 3).div_ceil(text_width) as u16;
        let toast_height = (lines + 2).clamp(3, 5);

        let x = area.x + area.width.saturating_sub(toast_width + 2);
        let y = area.y + area.height.saturating_sub(toast_height + 3);

        Rect::new(x, y, toast_width, toast_height)
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toast_area = self.calculate_area(area);
        let t = theme();

        Widget::render(Clear, toast_area, buf);

        let message = format!(
            " {} {} ",
            severity_icon(self.toast.severity),
            self.toast.message
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(severity_color(self.toast.severity)))
            .style(t.background_style());

        let paragraph = Paragraph::new(message)
            .block(block)
            .style(t.text_style().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });

        Widget::render(paragraph, toast_area, buf);
    }
}

/// Toast manager: the owner of the notification channel's output
#[derive(Debug)]
pub struct ToastManager {
    /// Current active toast (only one at a time)
    current: Option<Toast>,
    duration: Duration,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    pub fn new() -> Self {
        Self::with_duration(DEFAULT_TOAST_DURATION)
    }

    /// Manager whose toasts stay up for `duration`
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// Add a toast, replacing any existing toast
    pub fn push(&mut self, toast: Toast) {
        self.current = Some(toast);
    }

    /// Show or hide a toast according to a notification
    pub fn apply(&mut self, notification: Notification) {
        if notification.show {
            self.push(Toast::new(notification.message, notification.severity).with_duration(self.duration));
        } else {
            self.clear();
        }
    }

    /// Remove expired toasts and return whether any are still active
    pub fn tick(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Toast::is_expired) {
            self.current = None;
        }
        self.current.is_some()
    }

    /// Get the current toast to display (if any)
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Check if there are any active toasts
    pub fn has_toast(&self) -> bool {
        self.current.is_some()
    }

    /// Render the current toast (if any) using Frame
    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        if let Some(toast) = self.current() {
            frame.render_widget(ToastWidget::new(toast), area);
        }
    }

    /// Clear all toasts
    pub fn clear(&mut self) {
        self.current = None;
    }
}
