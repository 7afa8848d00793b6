use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateConfigError {
    #[error("grace period must be a non-negative number of days, got {0:?}")]
    InvalidGracePeriod(String),
    #[error("redirect target must be an absolute path, got {0:?}")]
    InvalidRedirectTarget(String),
}

/// Per-route settings for the subscription gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateOptions {
    /// Days of continued access after the subscription end date.
    pub grace_period_days: Option<u32>,
    /// Replaces the renewal page once an expired subscription has no grace left.
    pub redirect_target: Option<String>,
}

impl GateOptions {
    pub fn with_grace_period(mut self, days: u32) -> Self {
        self.grace_period_days = Some(days);
        self
    }

    pub fn with_redirect_target(mut self, target: impl Into<String>) -> Self {
        self.redirect_target = Some(target.into());
        self
    }

    /// Builds options from raw route parameters. Blank values count as absent.
    pub fn from_route_params(
        grace_period_days: Option<&str>,
        redirect_target: Option<&str>,
    ) -> Result<Self, GateConfigError> {
        let grace_period_days = match grace_period_days.map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<u32>()
                    .map_err(|_| GateConfigError::InvalidGracePeriod(raw.to_string()))?,
            ),
        };

        let redirect_target = match redirect_target.map(str::trim) {
            None | Some("") => None,
            Some(raw) if raw.starts_with('/') => Some(raw.to_string()),
            Some(raw) => return Err(GateConfigError::InvalidRedirectTarget(raw.to_string())),
        };

        Ok(Self {
            grace_period_days,
            redirect_target,
        })
    }
}
