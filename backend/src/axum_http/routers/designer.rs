use std::sync::Arc;

use anyhow::Result;
use application::{
    interfaces::clock::{Clock, SystemClock},
    usecases::{subscriber_resolver::SubscriberResolver, subscription_gate::SubscriptionGate},
};
use axum::{Extension, Json, Router, middleware, response::IntoResponse, routing::get};
use domain::{
    repositories::{app_users::AppUserRepository, designers::DesignerRepository},
    value_objects::{access_decisions::FlashMessage, gate_options::GateOptions},
};
use infra::postgres::{
    postgres_connection::PgPoolSquad,
    repositories::{app_users::AppUserPostgres, designers::DesignerPostgres},
};
use serde::Serialize;
use tracing::info;

use crate::{
    axum_http::middleware::subscription_gate::{
        SubscriptionGateState, require_designer_subscription,
    },
    config::config_model::DotEnvyConfig,
};

#[derive(Debug, Serialize)]
pub struct DesignerPage {
    pub page: &'static str,
    pub warning: Option<FlashMessage>,
}

pub fn routes(db_pool: Arc<PgPoolSquad>, config: &DotEnvyConfig) -> Result<Router> {
    let user_repository = AppUserPostgres::new(Arc::clone(&db_pool));
    let designer_repository = DesignerPostgres::new(Arc::clone(&db_pool));

    build_routes(
        Arc::new(user_repository),
        Arc::new(designer_repository),
        Arc::new(SystemClock),
        config,
    )
}

/// Designer pages behind the subscription gate. The store page gets no grace;
/// the pattern pages use the configured grace period and expiry redirect.
pub fn build_routes<U, D>(
    user_repo: Arc<U>,
    designer_repo: Arc<D>,
    clock: Arc<dyn Clock>,
    config: &DotEnvyConfig,
) -> Result<Router>
where
    U: AppUserRepository + Send + Sync + 'static,
    D: DesignerRepository + Send + Sync + 'static,
{
    let resolver = Arc::new(SubscriberResolver::new(user_repo, Arc::clone(&designer_repo)));
    let gate = Arc::new(SubscriptionGate::new(designer_repo));

    let gate_state = |options: GateOptions| {
        Arc::new(SubscriptionGateState {
            resolver: Arc::clone(&resolver),
            gate: Arc::clone(&gate),
            clock: Arc::clone(&clock),
            auth: config.auth.clone(),
            route_targets: config.route_targets.clone(),
            options,
        })
    };

    let pattern_options = GateOptions::from_route_params(
        config.designer_access.grace_period_days.as_deref(),
        config.designer_access.expired_redirect.as_deref(),
    )?;
    info!(
        grace_period_days = ?pattern_options.grace_period_days,
        expired_redirect = ?pattern_options.redirect_target,
        "designer router: gate options loaded"
    );

    let store = Router::new()
        .route(
            "/store",
            get(|warning: Option<Extension<FlashMessage>>| designer_page("designer.store", warning)),
        )
        .route_layer(middleware::from_fn_with_state(
            gate_state(GateOptions::default()),
            require_designer_subscription::<U, D>,
        ));

    let patterns = Router::new()
        .route(
            "/patterns",
            get(|warning: Option<Extension<FlashMessage>>| {
                designer_page("designer.patterns", warning)
            }),
        )
        .route_layer(middleware::from_fn_with_state(
            gate_state(pattern_options),
            require_designer_subscription::<U, D>,
        ));

    Ok(store.merge(patterns))
}

async fn designer_page(
    page: &'static str,
    warning: Option<Extension<FlashMessage>>,
) -> impl IntoResponse {
    Json(DesignerPage {
        page,
        warning: warning.map(|Extension(warning)| warning),
    })
}
