use anyhow::{Context, Result};

use super::config_model::{
    Auth, BackendServer, Database, DesignerAccess, DotEnvyConfig, RouteTargets,
};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let backend_server = BackendServer {
        port: required("SERVER_PORT_BACKEND")?
            .parse()
            .context("SERVER_PORT_BACKEND is invalid")?,
        body_limit: required("SERVER_BODY_LIMIT")?
            .parse()
            .context("SERVER_BODY_LIMIT is invalid")?,
        timeout: required("SERVER_TIMEOUT")?
            .parse()
            .context("SERVER_TIMEOUT is invalid")?,
    };

    let database = Database {
        url: required("DATABASE_URL")?,
    };

    let auth = Auth {
        jwt_secret: required("AUTH_JWT_SECRET")?,
        session_cookie: optional("AUTH_SESSION_COOKIE")
            .unwrap_or_else(|| "rashmati_session".to_string()),
    };

    let route_targets = RouteTargets {
        login: optional("ROUTE_LOGIN").unwrap_or_else(|| "/login".to_string()),
        dashboard: optional("ROUTE_DASHBOARD").unwrap_or_else(|| "/dashboard".to_string()),
        subscription_pending: optional("ROUTE_SUBSCRIPTION_PENDING")
            .unwrap_or_else(|| "/designer/subscription/pending".to_string()),
        subscription_renewal: optional("ROUTE_SUBSCRIPTION_RENEWAL")
            .unwrap_or_else(|| "/designer/subscription/plans".to_string()),
    };

    let designer_access = DesignerAccess {
        grace_period_days: optional("DESIGNER_GRACE_PERIOD_DAYS"),
        expired_redirect: optional("DESIGNER_EXPIRED_REDIRECT"),
    };

    Ok(DotEnvyConfig {
        backend_server,
        database,
        auth,
        route_targets,
        designer_access,
    })
}

fn required(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("{key} is invalid"))
}

fn optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
