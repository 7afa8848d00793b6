use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    entities::{app_users::AppUserEntity, designers::DesignerEntity},
    value_objects::enums::{subscription_statuses::SubscriptionStatus, user_roles::UserRole},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRecord {
    pub designer_id: Uuid,
    pub status: SubscriptionStatus,
    pub end_date: Option<DateTime<Utc>>,
}

impl From<DesignerEntity> for SubscriptionRecord {
    fn from(entity: DesignerEntity) -> Self {
        Self {
            designer_id: entity.id,
            status: SubscriptionStatus::from_str(&entity.subscription_status),
            end_date: entity.subscription_end_date,
        }
    }
}

/// The requester as seen by the subscription gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscriber {
    pub user_id: Uuid,
    pub role: UserRole,
    pub subscription: Option<SubscriptionRecord>,
}

impl Subscriber {
    pub fn from_entities(user: AppUserEntity, designer: Option<DesignerEntity>) -> Self {
        Self {
            user_id: user.id,
            role: UserRole::from_str(&user.role),
            subscription: designer.map(SubscriptionRecord::from),
        }
    }
}
