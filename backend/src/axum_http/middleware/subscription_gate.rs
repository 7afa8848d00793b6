use std::sync::Arc;

use application::{
    interfaces::clock::Clock,
    usecases::{subscriber_resolver::SubscriberResolver, subscription_gate::SubscriptionGate},
};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use domain::{
    repositories::{app_users::AppUserRepository, designers::DesignerRepository},
    value_objects::{access_decisions::AccessDecision, gate_options::GateOptions},
};
use tracing::info;

use crate::{
    auth,
    axum_http::{error_responses::AppError, flash},
    config::config_model::{Auth, RouteTargets},
};

/// Everything one gated route group needs: the collaborators shared across
/// groups plus that group's own options.
pub struct SubscriptionGateState<U, D>
where
    U: AppUserRepository + Send + Sync + 'static,
    D: DesignerRepository + Send + Sync + 'static,
{
    pub resolver: Arc<SubscriberResolver<U, D>>,
    pub gate: Arc<SubscriptionGate<D>>,
    pub clock: Arc<dyn Clock>,
    pub auth: Auth,
    pub route_targets: RouteTargets,
    pub options: GateOptions,
}

pub async fn require_designer_subscription<U, D>(
    State(state): State<Arc<SubscriptionGateState<U, D>>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError>
where
    U: AppUserRepository + Send + Sync + 'static,
    D: DesignerRepository + Send + Sync + 'static,
{
    let user_id = auth::authenticated_user_id(request.headers(), &jar, &state.auth);
    let mut subscriber = state.resolver.resolve(user_id).await?;

    let decision = state
        .gate
        .evaluate(subscriber.as_mut(), state.clock.now(), &state.options)
        .await;

    match decision {
        AccessDecision::Forward { warning: None } => Ok(next.run(request).await),
        AccessDecision::Forward {
            warning: Some(warning),
        } => {
            request.extensions_mut().insert(warning.clone());
            let response = next.run(request).await;
            let jar = flash::with_flash(jar, &warning)?;
            Ok((jar, response).into_response())
        }
        AccessDecision::Redirect {
            destination,
            flash: message,
        } => {
            let location = state.route_targets.resolve(&destination);
            info!(
                user_id = ?user_id,
                location,
                path = %request.uri().path(),
                "subscription_gate: redirecting request"
            );

            let jar = match message {
                Some(message) => flash::with_flash(jar, &message)?,
                None => jar,
            };
            Ok((jar, Redirect::to(location)).into_response())
        }
    }
}
