pub mod app_users;
pub mod designers;
