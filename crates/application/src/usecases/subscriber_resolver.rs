use std::sync::Arc;

use anyhow::Result;
use domain::{
    repositories::{app_users::AppUserRepository, designers::DesignerRepository},
    value_objects::{enums::user_roles::UserRole, subscribers::Subscriber},
};
use tracing::{debug, error, warn};
use uuid::Uuid;

/// Loads the subscriber for an authenticated user id: the user row and, for
/// designers, the designer profile holding the subscription.
pub struct SubscriberResolver<U, D>
where
    U: AppUserRepository + Send + Sync + 'static,
    D: DesignerRepository + Send + Sync + 'static,
{
    user_repo: Arc<U>,
    designer_repo: Arc<D>,
}

impl<U, D> SubscriberResolver<U, D>
where
    U: AppUserRepository + Send + Sync + 'static,
    D: DesignerRepository + Send + Sync + 'static,
{
    pub fn new(user_repo: Arc<U>, designer_repo: Arc<D>) -> Self {
        Self {
            user_repo,
            designer_repo,
        }
    }

    pub async fn resolve(&self, user_id: Option<Uuid>) -> Result<Option<Subscriber>> {
        let Some(user_id) = user_id else {
            return Ok(None);
        };

        let user = match self.user_repo.find_by_id(user_id).await.map_err(|err| {
            error!(%user_id, db_error = ?err, "subscriber_resolver: failed to load user");
            err
        })? {
            Some(user) => user,
            None => {
                warn!(%user_id, "subscriber_resolver: token refers to unknown user");
                return Ok(None);
            }
        };

        let designer = if UserRole::from_str(&user.role) == UserRole::Designer {
            self.designer_repo
                .find_by_user_id(user_id)
                .await
                .map_err(|err| {
                    error!(
                        %user_id,
                        db_error = ?err,
                        "subscriber_resolver: failed to load designer profile"
                    );
                    err
                })?
        } else {
            None
        };

        debug!(
            %user_id,
            role = %user.role,
            has_profile = designer.is_some(),
            "subscriber_resolver: subscriber loaded"
        );

        Ok(Some(Subscriber::from_entities(user, designer)))
    }
}
