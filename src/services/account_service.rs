use std::sync::OnceLock;

use chrono::Utc;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::ReturnDocument;
use regex::Regex;

use crate::catalog;
use crate::config::Settings;
use crate::db::Db;
use crate::error::ApiError;
use crate::middleware::auth::issue_token;
use crate::models::google_auth::GoogleUserInfo;
use crate::models::user::{
    AuthProvider, LoginRequest, PasswordChange, ProfileUpdate, SignupRequest, TokenResponse, User,
    UserProfile,
};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_BIO_LENGTH: usize = 500;

pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| {
            Regex::new(
                r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
            )
            .ok()
        })
        .as_ref()
        .map_or(false, |re| re.is_match(email))
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

pub fn validate_signup(input: &SignupRequest) -> Result<(), ApiError> {
    if !is_valid_email(input.email.trim()) {
        return Err(ApiError::Validation("Invalid email address".to_string()));
    }
    validate_password(&input.password)?;
    if input.name.trim().is_empty() {
        return Err(ApiError::Validation("Name must not be empty".to_string()));
    }
    Ok(())
}

/// `$set` document for a profile update; only provided fields are touched.
pub fn profile_update_document(update: &ProfileUpdate) -> Result<Document, ApiError> {
    let mut set = Document::new();

    if let Some(name) = &update.name {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::Validation("Name must not be empty".to_string()));
        }
        set.insert("name", name);
    }

    if let Some(home_city) = &update.home_city {
        let home_city = home_city.trim();
        if home_city.is_empty() {
            set.insert("home_city", mongodb::bson::Bson::Null);
        } else {
            let guide = catalog::city(home_city)
                .ok_or_else(|| ApiError::Validation(format!("Unknown city: {}", home_city)))?;
            set.insert("home_city", guide.slug);
        }
    }

    if let Some(bio) = &update.bio {
        if bio.chars().count() > MAX_BIO_LENGTH {
            return Err(ApiError::Validation(format!(
                "Bio must be at most {} characters",
                MAX_BIO_LENGTH
            )));
        }
        set.insert("bio", bio.trim());
    }

    if set.is_empty() {
        return Err(ApiError::Validation("Nothing to update".to_string()));
    }

    set.insert("updated_at", now_string());
    Ok(set)
}

pub(crate) fn now_string() -> String {
    Utc::now().to_rfc3339()
}

fn token_for(settings: &Settings, user: &User, user_id: ObjectId) -> Result<TokenResponse, ApiError> {
    let auth_token = issue_token(
        &settings.jwt_secret,
        settings.token_ttl_hours,
        &user.email,
        user_id,
    )?;
    Ok(TokenResponse { auth_token })
}

pub async fn signup(db: &Db, settings: &Settings, input: SignupRequest) -> Result<TokenResponse, ApiError> {
    validate_signup(&input)?;

    let now = Utc::now();
    let mut user = User {
        id: None,
        email: normalize_email(&input.email),
        password: Some(bcrypt::hash(&input.password, bcrypt::DEFAULT_COST)?),
        name: input.name.trim().to_string(),
        home_city: None,
        bio: None,
        avatar_url: None,
        provider: AuthProvider::Password,
        favorites: Vec::new(),
        last_signin: Some(now),
        failed_signins: Some(0),
        created_at: Some(now),
        updated_at: Some(now),
    };

    let result = db.users().insert_one(&user).await.map_err(|err| {
        if crate::error::is_duplicate_key(&err) {
            ApiError::Conflict("User already exists".to_string())
        } else {
            err.into()
        }
    })?;

    let user_id = result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| ApiError::Internal("Inserted user has no ObjectId".to_string()))?;
    user.id = Some(user_id);

    log::info!("Created account {}", user_id);
    token_for(settings, &user, user_id)
}

pub async fn login(db: &Db, settings: &Settings, input: LoginRequest) -> Result<TokenResponse, ApiError> {
    let email = normalize_email(&input.email);
    let users = db.users();

    let Some(user) = users.find_one(doc! { "email": &email }).await? else {
        return Err(ApiError::InvalidCredentials);
    };
    let user_id = user
        .id
        .ok_or_else(|| ApiError::Internal("Stored user has no _id".to_string()))?;

    let Some(hash) = user.password.as_deref() else {
        log::info!("Password login attempted for Google-only account {}", user_id);
        return Err(ApiError::Unauthorized(
            "This account signs in with Google".to_string(),
        ));
    };

    if !bcrypt::verify(&input.password, hash).unwrap_or(false) {
        let failed_signins = user.failed_signins.unwrap_or(0) + 1;
        users
            .update_one(
                doc! { "_id": user_id },
                doc! { "$set": { "failed_signins": failed_signins } },
            )
            .await?;
        log::warn!("Failed sign-in #{} for {}", failed_signins, user_id);
        return Err(ApiError::InvalidCredentials);
    }

    users
        .update_one(
            doc! { "_id": user_id },
            doc! { "$set": { "last_signin": now_string(), "failed_signins": 0 } },
        )
        .await?;

    token_for(settings, &user, user_id)
}

pub async fn find_user(db: &Db, user_id: ObjectId) -> Result<User, ApiError> {
    db.users()
        .find_one(doc! { "_id": user_id })
        .await?
        .ok_or_else(|| ApiError::NotFound("User".to_string()))
}

pub async fn profile(db: &Db, user_id: ObjectId) -> Result<UserProfile, ApiError> {
    find_user(db, user_id).await.map(UserProfile::from)
}

pub async fn update_profile(
    db: &Db,
    user_id: ObjectId,
    update: ProfileUpdate,
) -> Result<UserProfile, ApiError> {
    let set = profile_update_document(&update)?;

    db.users()
        .find_one_and_update(doc! { "_id": user_id }, doc! { "$set": set })
        .return_document(ReturnDocument::After)
        .await?
        .map(UserProfile::from)
        .ok_or_else(|| ApiError::NotFound("User".to_string()))
}

pub async fn change_password(db: &Db, user_id: ObjectId, change: PasswordChange) -> Result<(), ApiError> {
    validate_password(&change.new_password)?;
    let user = find_user(db, user_id).await?;

    if let Some(hash) = user.password.as_deref() {
        let current = change.current_password.as_deref().unwrap_or_default();
        if !bcrypt::verify(current, hash).unwrap_or(false) {
            return Err(ApiError::InvalidCredentials);
        }
    }

    let hash = bcrypt::hash(&change.new_password, bcrypt::DEFAULT_COST)?;
    db.users()
        .update_one(
            doc! { "_id": user_id },
            doc! { "$set": { "password": hash, "updated_at": now_string() } },
        )
        .await?;

    log::info!("Password changed for {}", user_id);
    Ok(())
}

pub async fn set_avatar_url(db: &Db, user_id: ObjectId, url: &str) -> Result<UserProfile, ApiError> {
    db.users()
        .find_one_and_update(
            doc! { "_id": user_id },
            doc! { "$set": { "avatar_url": url, "updated_at": now_string() } },
        )
        .return_document(ReturnDocument::After)
        .await?
        .map(UserProfile::from)
        .ok_or_else(|| ApiError::NotFound("User".to_string()))
}

/// Finds the account for a Google identity, creating it on first sign-in.
pub async fn sign_in_with_google(
    db: &Db,
    settings: &Settings,
    info: GoogleUserInfo,
) -> Result<TokenResponse, ApiError> {
    if !info.verified_email {
        return Err(ApiError::Forbidden(
            "Google account email is not verified".to_string(),
        ));
    }

    let email = normalize_email(&info.email);
    let users = db.users();

    if let Some(existing) = users.find_one(doc! { "email": &email }).await? {
        let user_id = existing
            .id
            .ok_or_else(|| ApiError::Internal("Stored user has no _id".to_string()))?;

        let mut set = doc! { "last_signin": now_string(), "failed_signins": 0 };
        if existing.avatar_url.is_none() {
            if let Some(picture) = &info.picture {
                set.insert("avatar_url", picture.as_str());
            }
        }
        users.update_one(doc! { "_id": user_id }, doc! { "$set": set }).await?;

        log::info!("Google sign-in for existing account {}", user_id);
        return token_for(settings, &existing, user_id);
    }

    let now = Utc::now();
    let user = User {
        id: None,
        email,
        password: None,
        name: info.display_name(),
        home_city: None,
        bio: None,
        avatar_url: info.picture.clone(),
        provider: AuthProvider::Google,
        favorites: Vec::new(),
        last_signin: Some(now),
        failed_signins: Some(0),
        created_at: Some(now),
        updated_at: Some(now),
    };

    let result = users.insert_one(&user).await?;
    let user_id = result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| ApiError::Internal("Inserted user has no ObjectId".to_string()))?;

    log::info!("Created account {} from Google sign-in", user_id);
    token_for(settings, &user, user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_request(email: &str, password: &str, name: &str) -> SignupRequest {
        SignupRequest {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("traveller@example.com"));
        assert!(is_valid_email("first.last+trips@sub.example.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
    }

    #[test]
    fn test_signup_validation() {
        assert!(validate_signup(&signup_request("ada@example.com", "longenough", "Ada")).is_ok());
        assert!(matches!(
            validate_signup(&signup_request("nope", "longenough", "Ada")),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            validate_signup(&signup_request("ada@example.com", "short", "Ada")),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            validate_signup(&signup_request("ada@example.com", "longenough", "   ")),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_profile_update_only_sets_given_fields() {
        let update = ProfileUpdate {
            name: Some(" Ada ".into()),
            home_city: Some("Rome".into()),
            bio: None,
        };
        let set = profile_update_document(&update).unwrap();

        assert_eq!(set.get_str("name").unwrap(), "Ada");
        assert_eq!(set.get_str("home_city").unwrap(), "rome");
        assert!(!set.contains_key("bio"));
        assert!(set.contains_key("updated_at"));
    }

    #[test]
    fn test_profile_update_rejections() {
        let empty = ProfileUpdate::default();
        assert!(matches!(
            profile_update_document(&empty),
            Err(ApiError::Validation(_))
        ));

        let unknown_city = ProfileUpdate {
            home_city: Some("atlantis".into()),
            ..Default::default()
        };
        assert!(matches!(
            profile_update_document(&unknown_city),
            Err(ApiError::Validation(_))
        ));

        let long_bio = ProfileUpdate {
            bio: Some("x".repeat(MAX_BIO_LENGTH + 1)),
            ..Default::default()
        };
        assert!(matches!(
            profile_update_document(&long_bio),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_clearing_home_city() {
        let update = ProfileUpdate {
            home_city: Some("".into()),
            ..Default::default()
        };
        let set = profile_update_document(&update).unwrap();
        assert!(set.is_null("home_city"));
    }
}
