use serde::{Deserialize, Serialize};

use crate::value_objects::enums::flash_severities::FlashSeverity;

/// Symbolic redirect destinations. The web layer maps them to concrete paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Login,
    Dashboard,
    SubscriptionPending,
    SubscriptionRenewal,
    Route(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashMessage {
    pub severity: FlashSeverity,
    pub message: String,
}

impl FlashMessage {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: FlashSeverity::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: FlashSeverity::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: FlashSeverity::Warning,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Forward {
        warning: Option<FlashMessage>,
    },
    Redirect {
        destination: Destination,
        flash: Option<FlashMessage>,
    },
}

impl AccessDecision {
    pub fn forward() -> Self {
        AccessDecision::Forward { warning: None }
    }

    pub fn forward_with_warning(message: impl Into<String>) -> Self {
        AccessDecision::Forward {
            warning: Some(FlashMessage::warning(message)),
        }
    }

    pub fn redirect(destination: Destination, flash: FlashMessage) -> Self {
        AccessDecision::Redirect {
            destination,
            flash: Some(flash),
        }
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, AccessDecision::Forward { .. })
    }
}
