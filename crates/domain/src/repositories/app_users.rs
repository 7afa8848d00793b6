use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::entities::app_users::AppUserEntity;

#[automock]
#[async_trait]
pub trait AppUserRepository {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<AppUserEntity>>;
}
