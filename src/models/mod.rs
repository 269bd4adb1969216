pub mod attraction;
pub mod google_auth;
pub mod plan;
pub mod user;
pub mod venue;
