use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::designers;

/// Designer store profile. The subscription state lives on the profile row.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = designers)]
pub struct DesignerEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub store_name: String,
    pub subscription_status: String,
    pub subscription_end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = designers)]
pub struct UpdateDesignerSubscriptionEntity {
    pub subscription_status: String,
    pub updated_at: DateTime<Utc>,
}
