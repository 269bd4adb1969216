pub mod account_service;
pub mod avatar_service;
pub mod favorites_service;
pub mod google_auth_service;
pub mod plan_editor;
pub mod plan_error;
pub mod plan_service;
pub mod quick_planner;
