use std::fmt;

/// Severity level for notices shown alongside the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

impl NotificationLevel {
    /// Short tag printed in front of the notice body.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }
}

/// A one-line notice for the user, separate from model replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub body: String,
}

impl Notification {
    pub fn info(body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            body: body.into(),
        }
    }

    pub fn warning(body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            body: body.into(),
        }
    }

    pub fn error(body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            body: body.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.tag(), self.body)
    }
}
