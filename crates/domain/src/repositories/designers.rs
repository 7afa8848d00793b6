use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    entities::designers::DesignerEntity,
    value_objects::enums::subscription_statuses::SubscriptionStatus,
};

#[automock]
#[async_trait]
pub trait DesignerRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<DesignerEntity>>;

    async fn update_subscription_status(
        &self,
        designer_id: Uuid,
        status: SubscriptionStatus,
    ) -> Result<()>;
}
