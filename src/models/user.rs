use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::attraction::{Attraction, AttractionCategory, Coordinates};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    #[default]
    Password,
    Google,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    /// bcrypt hash; absent for accounts created through Google sign-in
    pub password: Option<String>,
    pub name: String,
    pub home_city: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub provider: AuthProvider,
    #[serde(default)]
    pub favorites: Vec<Favorite>,
    pub last_signin: Option<DateTime<Utc>>,
    pub failed_signins: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub home_city: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub provider: AuthProvider,
    pub favorite_count: usize,
    pub has_password: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: user.email,
            name: user.name,
            home_city: user.home_city,
            bio: user.bio,
            avatar_url: user.avatar_url,
            provider: user.provider,
            favorite_count: user.favorites.len(),
            has_password: user.password.is_some(),
            created_at: user.created_at,
        }
    }
}

/// A user's saved copy of a catalog attraction.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Favorite {
    pub attraction_id: String,
    pub name: String,
    pub city: String,
    pub category: AttractionCategory,
    pub rating: f32,
    pub coordinates: Coordinates,
    pub image_url: Option<String>,
    pub saved_at: DateTime<Utc>,
}

impl Favorite {
    pub fn from_attraction(attraction: &Attraction, saved_at: DateTime<Utc>) -> Self {
        Self {
            attraction_id: attraction.id.to_string(),
            name: attraction.name.to_string(),
            city: attraction.city.to_string(),
            category: attraction.category,
            rating: attraction.rating,
            coordinates: attraction.coordinates,
            image_url: attraction.image_url.map(str::to_string),
            saved_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub auth_token: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub home_city: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PasswordChange {
    pub current_password: Option<String>,
    pub new_password: String,
}
