use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlashSeverity {
    Error,
    Info,
    Warning,
}

impl Display for FlashSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = match self {
            FlashSeverity::Error => "error",
            FlashSeverity::Info => "info",
            FlashSeverity::Warning => "warning",
        };
        write!(f, "{}", severity)
    }
}
