pub mod flash_severities;
pub mod subscription_statuses;
pub mod user_roles;
