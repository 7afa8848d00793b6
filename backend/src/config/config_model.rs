use domain::value_objects::access_decisions::Destination;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub backend_server: BackendServer,
    pub database: Database,
    pub auth: Auth,
    pub route_targets: RouteTargets,
    pub designer_access: DesignerAccess,
}

#[derive(Debug, Clone)]
pub struct BackendServer {
    pub port: u16,
    pub body_limit: u64,
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct Auth {
    pub jwt_secret: String,
    pub session_cookie: String,
}

/// Paths behind the symbolic gate destinations.
#[derive(Debug, Clone)]
pub struct RouteTargets {
    pub login: String,
    pub dashboard: String,
    pub subscription_pending: String,
    pub subscription_renewal: String,
}

impl RouteTargets {
    pub fn resolve<'a>(&'a self, destination: &'a Destination) -> &'a str {
        match destination {
            Destination::Login => &self.login,
            Destination::Dashboard => &self.dashboard,
            Destination::SubscriptionPending => &self.subscription_pending,
            Destination::SubscriptionRenewal => &self.subscription_renewal,
            Destination::Route(path) => path,
        }
    }
}

/// Raw gate parameters for the grace-enabled designer pages.
#[derive(Debug, Clone, Default)]
pub struct DesignerAccess {
    pub grace_period_days: Option<String>,
    pub expired_redirect: Option<String>,
}
