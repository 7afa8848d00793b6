use std::fmt::Display;

/// Subscription status as stored on the designer profile.
///
/// `Pending`, `Active` and `Expired` are the states the gate understands.
/// `Rejected` is written by the approval workflow and any other stored value
/// is kept verbatim in `Other` so it can be written back unchanged.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionStatus {
    #[default]
    Pending,
    Active,
    Expired,
    Rejected,
    Other(String),
}

impl Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            SubscriptionStatus::Pending => "pending",
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Expired => "expired",
            SubscriptionStatus::Rejected => "rejected",
            SubscriptionStatus::Other(value) => value.as_str(),
        };
        write!(f, "{}", status)
    }
}

impl SubscriptionStatus {
    pub fn from_str(value: &str) -> Self {
        match value {
            "pending" => SubscriptionStatus::Pending,
            "active" => SubscriptionStatus::Active,
            "expired" => SubscriptionStatus::Expired,
            "rejected" => SubscriptionStatus::Rejected,
            other => SubscriptionStatus::Other(other.to_string()),
        }
    }
}
