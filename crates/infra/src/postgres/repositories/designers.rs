use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{prelude::*, update};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::postgres::postgres_connection::PgPoolSquad;
use domain::{
    entities::designers::{DesignerEntity, UpdateDesignerSubscriptionEntity},
    repositories::designers::DesignerRepository,
    schema::designers,
    value_objects::enums::subscription_statuses::SubscriptionStatus,
};

pub struct DesignerPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl DesignerPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl DesignerRepository for DesignerPostgres {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<DesignerEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let designer = designers::table
            .filter(designers::user_id.eq(user_id))
            .select(DesignerEntity::as_select())
            .first::<DesignerEntity>(&mut conn)
            .optional()?;

        Ok(designer)
    }

    async fn update_subscription_status(
        &self,
        designer_id: Uuid,
        status: SubscriptionStatus,
    ) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let changes = UpdateDesignerSubscriptionEntity {
            subscription_status: status.to_string(),
            updated_at: Utc::now(),
        };

        let affected = update(designers::table)
            .filter(designers::id.eq(designer_id))
            .set(&changes)
            .execute(&mut conn)?;

        if affected == 0 {
            warn!(%designer_id, status = %status, "designers: status update matched no rows");
        }

        Ok(())
    }
}
