//! Toast notifications

use std::time::Duration;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn title(&self) -> &'static str {
        match self {
            ToastKind::Success => "Succès",
            ToastKind::Error => "Erreur",
            ToastKind::Warning => "Attention",
            ToastKind::Info => "Information",
        }
    }

    /// Font Awesome icon name
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "check-circle",
            ToastKind::Error => "exclamation-circle",
            ToastKind::Warning => "exclamation-triangle",
            ToastKind::Info => "info-circle",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ToastKind::Success => "#28a745",
            ToastKind::Error => "#dc3545",
            ToastKind::Warning => "#ffc107",
            ToastKind::Info => "#17a2b8",
        }
    }

    /// Unknown names fall back to info
    pub fn parse(s: &str) -> Self {
        match s {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub duration: Duration,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}
