pub mod auth;
pub mod favorites;
pub mod google_auth;
pub mod profile;
