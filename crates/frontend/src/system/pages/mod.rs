pub mod dashboard_home;
pub mod login;
pub mod not_found;
